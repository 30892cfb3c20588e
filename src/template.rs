use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::convert::Infallible;
use time::{Date, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";
pub const UPSTREAM_ERROR_MESSAGE: &str = "The meal planner is unreachable, please retry later";
pub const NOT_FOUND: &str = "Not found";

/// Header the widget script sends with the browser time zone.
pub const TIMEZONE_HEADER: &str = "TS-Timezone";

pub struct Template {
    pub timezone: String,
}

impl Template {
    /// Current date in the browser time zone, UTC when unknown.
    pub fn today(&self) -> Date {
        let now = OffsetDateTime::now_utc();

        match timezones::get_by_name(&self.timezone) {
            Some(tz) => now.to_timezone(tz).date(),
            None => now.date(),
        }
    }

    pub fn to_string<T: askama::Template>(&self, template: T) -> String {
        match template.render() {
            Ok(html) => html,
            Err(err) => format!("Failed to render template. Error: {err}"),
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "Failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let timezone = parts
            .headers
            .get(TIMEZONE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| "UTC".to_string());

        Ok(Template { timezone })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[derive(askama::Template)]
#[template(path = "partials/toast-error.html")]
pub struct ToastErrorTemplate<'a> {
    pub message: &'a str,
    pub description: Option<&'a str>,
}

#[derive(askama::Template)]
#[template(path = "partials/alert.html")]
pub struct AlertTemplate<'a> {
    pub message: &'a str,
}

#[macro_export]
macro_rules! try_page_response {
    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return axum::response::IntoResponse::into_response((
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $template.render($crate::template::ServerTemplate),
                ));
            }
        }
    };

    ($result:expr, $template:expr) => {
        $crate::try_page_response!(sync: $result.await, $template)
    };
}

/// Unwraps a `mealplanner_shared::Result`, turning errors into a fragment that
/// is not swapped into the page: an alert for selection errors, an error toast
/// otherwise.
#[macro_export]
macro_rules! try_response {
    (@toast $template:expr, $status:expr, $message:expr, $description:expr) => {
        return axum::response::IntoResponse::into_response((
            $status,
            [("ts-swap", "skip")],
            $template.render($crate::template::ToastErrorTemplate {
                message: $message,
                description: $description,
            }),
        ))
    };

    (sync: $result:expr, $template:expr) => {
        match $result {
            Ok(r) => r,
            Err(mealplanner_shared::Error::Upstream(err)) => {
                tracing::error!("{err}");
                $crate::try_response!(
                    @toast $template,
                    axum::http::StatusCode::BAD_GATEWAY,
                    $crate::template::UPSTREAM_ERROR_MESSAGE,
                    Some(err.as_str())
                )
            }
            Err(mealplanner_shared::Error::Selection(err)) => {
                return axum::response::IntoResponse::into_response((
                    axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                    [("ts-swap", "skip")],
                    $template.render($crate::template::AlertTemplate {
                        message: &err.to_string(),
                    }),
                ));
            }
            Err(mealplanner_shared::Error::Validate(message)) => {
                $crate::try_response!(
                    @toast $template,
                    axum::http::StatusCode::BAD_REQUEST,
                    message.as_str(),
                    None
                )
            }
            Err(err) => {
                tracing::error!("{err}");
                $crate::try_response!(
                    @toast $template,
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    $crate::template::SERVER_ERROR_MESSAGE,
                    None
                )
            }
        }
    };

    ($result:expr, $template:expr) => {
        $crate::try_response!(sync: $result.await, $template)
    };
}
