use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use mealplanner_shared::Error;
use mealplanner_widgets::search::{
    DISPLAY_FIELD_ID, HIDDEN_FIELD_ID, NO_RESULTS, RESULTS_TABLE_ID, RecipeFormFields,
    SearchResults, SearchWidget,
};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

#[derive(askama::Template)]
#[template(path = "partials/recipe-search-dialog.html")]
pub struct DialogTemplate {
    pub keys: String,
    pub search_enabled: bool,
    pub results: ResultsTemplate,
}

#[derive(askama::Template)]
#[template(path = "partials/recipe-search-results.html")]
pub struct ResultsTemplate {
    pub table_id: &'static str,
    pub keys: String,
    pub no_results: Option<&'static str>,
    pub table: Option<crate::routes::table::TableTemplate>,
}

impl ResultsTemplate {
    fn new(widget: &SearchWidget) -> Self {
        let (no_results, table) = match widget.results() {
            SearchResults::Cleared => (None, None),
            SearchResults::Empty => (Some(NO_RESULTS), None),
            SearchResults::Table(table) => (
                None,
                Some(crate::routes::table::TableTemplate::new(table.clone())),
            ),
        };

        Self {
            table_id: RESULTS_TABLE_ID,
            keys: widget.keys().to_owned(),
            no_results,
            table,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "partials/recipe-search-selected.html")]
pub struct SelectedTemplate {
    pub display_field_id: &'static str,
    pub hidden_field_id: &'static str,
    pub form: RecipeFormFields,
}

pub async fn dialog(template: Template) -> impl IntoResponse {
    let widget = SearchWidget::launch();

    template.render(DialogTemplate {
        keys: widget.keys().to_owned(),
        search_enabled: widget.search_enabled(),
        results: ResultsTemplate::new(&widget),
    })
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keys: String,
}

#[tracing::instrument(skip_all, fields(keys = %input.keys))]
pub async fn results(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<SearchQuery>,
) -> Response {
    let mut widget = SearchWidget::launch();
    widget.set_search_input(input.keys);

    if widget.search_enabled() {
        crate::try_response!(widget.search(app.source.as_ref()), template);
    }

    template.render(ResultsTemplate::new(&widget))
}

#[derive(Deserialize)]
pub struct SelectInput {
    #[serde(default)]
    pub keys: String,
    #[serde(default)]
    pub selected: Vec<u64>,
}

/// Confirms the rows picked in the result table. The search is replayed with
/// the same keys so only ids of actual results can be selected.
#[tracing::instrument(skip_all, fields(keys = %input.keys, selected = ?input.selected))]
pub async fn select(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<SelectInput>,
) -> Response {
    let mut widget = SearchWidget::launch();
    widget.set_search_input(input.keys);

    if widget.search_enabled() {
        crate::try_response!(widget.search(app.source.as_ref()), template);
    }

    widget.mark_selected(&input.selected);

    let mut form = RecipeFormFields::default();
    crate::try_response!(
        sync: widget.confirm_selection(&mut form).map_err(Error::from),
        template
    );

    template
        .render(SelectedTemplate {
            display_field_id: DISPLAY_FIELD_ID,
            hidden_field_id: HIDDEN_FIELD_ID,
            form,
        })
        .into_response()
}
