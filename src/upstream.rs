//! HTTP client of the meal planner API.

use std::time::Duration;

use async_trait::async_trait;
use mealplanner_shared::{Error, MealSource, MonthMeals, RecipeSearch, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::UpstreamConfig;

#[derive(Debug, Clone)]
pub struct HttpMealSource {
    base_url: Url,
    client: Client,
}

impl HttpMealSource {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;

        // Endpoints are joined relatively, the base path must be a directory.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| Error::Server(format!("invalid upstream url: {err}")))?;

        url.query_pairs_mut().extend_pairs(query);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "upstream request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| Error::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "upstream request failed");

            return Err(Error::Upstream(format!("{url} returned {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| Error::Upstream(format!("invalid response from {url}: {err}")))
    }
}

#[async_trait]
impl MealSource for HttpMealSource {
    async fn meals_by_month(&self, year: i32, month: u8) -> Result<MonthMeals> {
        let year = year.to_string();
        let month = month.to_string();
        let url = self.endpoint(
            "meal/meals_by_month",
            &[("year", year.as_str()), ("month", month.as_str())],
        )?;

        self.get_json(url).await
    }

    async fn recipe_search(&self, keys: &str) -> Result<RecipeSearch> {
        let url = self.endpoint("meal/recipe_search", &[("keys", keys)])?;

        self.get_json(url).await
    }
}
