use axum::{Json, response::IntoResponse};
use mealplanner_widgets::table::{SortDirection, Table, sort_by_column};
use serde::Deserialize;

use crate::template::Template;

/// Sortable table, carrying its own rows as JSON for the next sort request.
#[derive(askama::Template)]
#[template(path = "partials/table.html")]
pub struct TableTemplate {
    pub table: Table,
    pub sorted: Option<(usize, SortDirection)>,
}

impl TableTemplate {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            sorted: None,
        }
    }

    fn table_json(&self) -> String {
        serde_json::to_string(&self.table).unwrap_or_default()
    }

    fn sort_marker(&self, column: &usize) -> &'static str {
        match self.sorted {
            Some((sorted, SortDirection::Ascending)) if sorted == *column => "▲",
            Some((sorted, SortDirection::Descending)) if sorted == *column => "▼",
            _ => "",
        }
    }
}

#[derive(Deserialize)]
pub struct SortInput {
    pub table: Table,
    pub column: usize,
}

#[tracing::instrument(skip_all, fields(table = %input.table.id, column = input.column))]
pub async fn sort(template: Template, Json(mut input): Json<SortInput>) -> impl IntoResponse {
    let direction = sort_by_column(&mut input.table, input.column);

    template.render(TableTemplate {
        table: input.table,
        sorted: Some((input.column, direction)),
    })
}
