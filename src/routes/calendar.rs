use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, cookie::Cookie};
use mealplanner_calendar::{
    CalendarView, Direction, DisplayedPeriod, MONTH_NAMES, MonthGrid, PendingRequest,
    cookie::{self, COOKIE_NAME},
};
use serde::Deserialize;
use time::Duration;

use crate::{routes::AppState, template::Template};

pub const SEQ_HEADER: &str = "x-calendar-seq";

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const YEARS_AROUND: i32 = 5;

/// Calendar fragment. `cookie` is the `yearmonth` cookie for the displayed
/// month, written by the script only once the fragment is accepted.
#[derive(askama::Template)]
#[template(path = "partials/calendar.html")]
pub struct CalendarTemplate {
    pub grid: MonthGrid,
    pub seq: u64,
    pub cookie: String,
    pub weekdays: [&'static str; 7],
    pub month_names: [&'static str; 12],
    pub years: Vec<i32>,
}

impl CalendarTemplate {
    fn new(grid: MonthGrid, seq: u64, cookie: String) -> Self {
        let year = grid.period.year();

        Self {
            grid,
            seq,
            cookie,
            weekdays: WEEKDAYS,
            month_names: MONTH_NAMES,
            years: ((year - YEARS_AROUND)..=(year + YEARS_AROUND)).collect(),
        }
    }

    fn is_selected_month(&self, index: &usize) -> bool {
        *index == usize::from(self.grid.period.month())
    }

    fn is_selected_year(&self, year: &i32) -> bool {
        *year == self.grid.period.year()
    }
}

#[derive(askama::Template)]
#[template(path = "meals.html")]
pub struct MealsTemplate {
    pub calendar: Option<CalendarTemplate>,
    pub error_message: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct SeqQuery {
    #[serde(default)]
    pub seq: u64,
}

/// A period and the number of calendar requests the client already issued.
#[derive(Deserialize)]
pub struct PeriodQuery {
    pub month: i32,
    pub year: i32,
    #[serde(default)]
    pub seq: u64,
}

#[derive(Deserialize)]
pub struct JumpQuery {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub seq: u64,
}

fn view_at(app: &AppState, period: DisplayedPeriod, template: &Template, seq: u64) -> CalendarView {
    CalendarView::new(period, template.today())
        .with_tooltip_width(app.config.calendar.tooltip_width)
        .resume_from(seq)
}

fn today_view(app: &AppState, template: &Template, seq: u64) -> CalendarView {
    view_at(app, DisplayedPeriod::from_date(template.today()), template, seq)
}

fn period_cookie(app: &AppState, period: &DisplayedPeriod) -> Cookie<'static> {
    let hours = i64::from(app.config.calendar.cookie_hours);

    Cookie::build((COOKIE_NAME, cookie::encode(period)))
        .path("/")
        .max_age(Duration::hours(hours))
        .build()
}

/// Fragment for `request`. No cookie is set here: a response the client
/// discards as stale must not persist its month.
async fn render_fragment(
    template: Template,
    app: AppState,
    view: CalendarView,
    request: PendingRequest,
) -> Response {
    let grid = crate::try_response!(view.fetch(app.source.as_ref(), request), template);
    let cookie = period_cookie(&app, &request.period).to_string();

    (
        [(SEQ_HEADER, request.seq.to_string())],
        template.render(CalendarTemplate::new(grid, request.seq, cookie)),
    )
        .into_response()
}

#[tracing::instrument(skip_all)]
pub async fn page(template: Template, State(app): State<AppState>, jar: CookieJar) -> Response {
    let period = cookie::restore(
        jar.get(COOKIE_NAME).map(|cookie| cookie.value()),
        template.today(),
    );
    let mut view = view_at(&app, period, &template, 0);
    let request = view.refresh();
    let cookie = period_cookie(&app, &request.period);

    let (calendar, error_message) = match view.fetch(app.source.as_ref(), request).await {
        Ok(grid) => (
            Some(CalendarTemplate::new(grid, request.seq, cookie.to_string())),
            None,
        ),
        Err(err) => {
            tracing::error!(period = %request.period, "{err}");

            (None, Some(crate::template::UPSTREAM_ERROR_MESSAGE.to_owned()))
        }
    };

    (
        jar.add(cookie),
        template.render(MealsTemplate {
            calendar,
            error_message,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip_all, fields(month = input.month, year = input.year))]
pub async fn set_period(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<PeriodQuery>,
) -> Response {
    let mut view = today_view(&app, &template, input.seq);
    let request = crate::try_response!(sync: view.set_period(input.month, input.year), template);

    render_fragment(template, app, view, request).await
}

/// Moves one month away from the period the client currently displays.
async fn advance(
    template: Template,
    app: AppState,
    input: PeriodQuery,
    direction: Direction,
) -> Response {
    let period = crate::try_response!(sync: DisplayedPeriod::new(input.month, input.year), template);
    let mut view = view_at(&app, period, &template, input.seq);
    let request = view.advance(direction);

    render_fragment(template, app, view, request).await
}

#[tracing::instrument(skip_all, fields(month = input.month, year = input.year))]
pub async fn next(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<PeriodQuery>,
) -> Response {
    advance(template, app, input, Direction::Next).await
}

#[tracing::instrument(skip_all, fields(month = input.month, year = input.year))]
pub async fn previous(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<PeriodQuery>,
) -> Response {
    advance(template, app, input, Direction::Previous).await
}

pub async fn today(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<SeqQuery>,
) -> Response {
    let mut view = today_view(&app, &template, input.seq);
    let request = view.jump_to_today();

    render_fragment(template, app, view, request).await
}

#[tracing::instrument(skip_all, fields(month = %input.month, year = %input.year))]
pub async fn jump(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<JumpQuery>,
) -> Response {
    let mut view = today_view(&app, &template, input.seq);
    let request = crate::try_response!(
        sync: view.jump_to_selection(&input.month, &input.year),
        template
    );

    render_fragment(template, app, view, request).await
}
