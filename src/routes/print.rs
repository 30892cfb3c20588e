use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use mealplanner_calendar::cookie::{self, COOKIE_NAME};
use mealplanner_widgets::print::{PRINTABLE_WEEKS, PrintOptions, PrintScope};

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "print.html")]
pub struct PrintTemplate {
    pub action: String,
    pub options: PrintOptions,
    pub scopes: [PrintScope; 2],
    pub weeks: [u8; 5],
}

/// Print dialog for the month currently displayed in the calendar.
pub async fn options(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let period = cookie::restore(
        jar.get(COOKIE_NAME).map(|cookie| cookie.value()),
        template.today(),
    );

    let action = format!(
        "{}/meal/print",
        app.config.upstream.base_url.trim_end_matches('/')
    );

    template.render(PrintTemplate {
        action,
        options: PrintOptions::for_period(period),
        scopes: [PrintScope::All, PrintScope::Select],
        weeks: PRINTABLE_WEEKS,
    })
}

impl PrintTemplate {
    fn is_week_checked(&self, week: &u8) -> bool {
        self.options.selected_weeks().contains(week)
    }

    fn is_scope(&self, scope: &PrintScope) -> bool {
        *scope == self.options.scope
    }
}
