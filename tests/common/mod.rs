#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mealplanner::{
    AppState, Config,
    config::{CalendarConfig, ObservabilityConfig, ServerConfig, UpstreamConfig},
};
use mealplanner_shared::{
    DayMeal, Error, MealSource, MonthMeals, RecipeSearch, Result, SearchResult,
};
use tower::ServiceExt;

/// In-memory meal planner API.
#[derive(Default)]
pub struct FakeSource {
    pub fail: bool,
    pub months: Mutex<Vec<(i32, u8)>>,
}

#[async_trait::async_trait]
impl MealSource for FakeSource {
    async fn meals_by_month(&self, year: i32, month: u8) -> Result<MonthMeals> {
        self.months.lock().unwrap().push((year, month));

        if self.fail {
            return Err(Error::Upstream("connection refused".to_owned()));
        }

        let mut month_meals = vec![DayMeal::default(); 31];
        month_meals[0] = DayMeal {
            recipe_name: "Pancakes".to_owned(),
            recipe_id: Some(3),
            meal_id: Some(11),
            page: Some(12),
            cookbook_id: Some(2),
            cookbook_title: Some("Joy of Cooking".to_owned()),
            author: Some("Irma Rombauer".to_owned()),
            notes: Some("use buttermilk".to_owned()),
            ..Default::default()
        };

        Ok(MonthMeals { month_meals })
    }

    async fn recipe_search(&self, keys: &str) -> Result<RecipeSearch> {
        if self.fail {
            return Err(Error::Upstream("connection refused".to_owned()));
        }

        if keys == "nothing" {
            return Ok(RecipeSearch::default());
        }

        let recipe = |id: u64, name: &str| SearchResult {
            id,
            name: name.to_owned(),
            cookbook: "Soups".to_owned(),
            author: "Julia Child".to_owned(),
            ..Default::default()
        };

        Ok(RecipeSearch {
            recipes: vec![recipe(4, "Chili"), recipe(2, "Beef stew")],
        })
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        upstream: UpstreamConfig {
            base_url: "http://localhost:8000".to_owned(),
            timeout_secs: 1,
        },
        calendar: CalendarConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn app(source: FakeSource) -> Router {
    app_with_config(source, config())
}

pub fn app_with_config(source: FakeSource, config: Config) -> Router {
    mealplanner::router(AppState {
        config,
        source: Arc::new(source),
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn cookie(&self) -> Option<&str> {
        self.header(header::SET_COOKIE.as_str())
    }
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(router: Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut request = Request::builder().uri(uri);

    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    send(router, request.body(Body::empty()).unwrap()).await
}

pub async fn post_form(router: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();

    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(router, request).await
}
