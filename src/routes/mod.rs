use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use mealplanner_shared::MealSource;

use crate::template::{NotFoundTemplate, Template};

mod assets;
mod calendar;
mod health;
mod popup;
mod print;
mod search;
mod table;

pub use assets::AssetsService;
pub use calendar::SEQ_HEADER;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub source: Arc<dyn MealSource>,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template.render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(|| async { Redirect::to("/meal/meals") }))
        .route("/meal/meals", get(calendar::page))
        .route("/meal/calendar", get(calendar::set_period))
        .route("/meal/calendar/next", get(calendar::next))
        .route("/meal/calendar/previous", get(calendar::previous))
        .route("/meal/calendar/today", get(calendar::today))
        .route("/meal/calendar/jump", get(calendar::jump))
        .route("/meal/recipe-search", get(search::results))
        .route("/meal/recipe-search/dialog", get(search::dialog))
        .route("/meal/recipe-search/select", post(search::select))
        .route("/meal/print/options", get(print::options))
        .route("/popup/open", get(popup::open))
        .route("/popup/created", get(popup::created))
        .route("/popup/print-closed", get(popup::print_closed))
        .route("/popup/apply", post(popup::apply))
        .route("/popup/toggle", post(popup::toggle))
        .route("/table/sort", post(table::sort))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
