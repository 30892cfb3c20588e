//! Recipe keyword search dialog opened from the meal form.

use mealplanner_shared::{MealSource, RecipeSearch, Result, SearchResult, SelectionError};
use serde::{Deserialize, Serialize};

use crate::table::{Cell, Row, SortDirection, Table, sort_by_column};

pub const NO_RESULTS: &str = "No Results";
pub const RESULTS_TABLE_ID: &str = "id_recipe_search_results";
pub const DISPLAY_FIELD_ID: &str = "id_recipe_name_display";
pub const HIDDEN_FIELD_ID: &str = "id-recipe";

const ID_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "table", rename_all = "lowercase")]
pub enum SearchResults {
    #[default]
    Cleared,
    Empty,
    Table(Table),
}

/// Meal form fields receiving the confirmed recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeFormFields {
    pub recipe_name_display: String,
    pub recipe: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchWidget {
    keys: String,
    results: SearchResults,
    open: bool,
}

impl SearchWidget {
    /// Dialog as shown when opened: empty keys and no results.
    pub fn launch() -> Self {
        Self {
            open: true,
            ..Default::default()
        }
    }

    pub fn keys(&self) -> &str {
        &self.keys
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.keys = text.into();
    }

    pub fn reset(&mut self) {
        self.keys.clear();
        self.results = SearchResults::Cleared;
    }

    pub fn search_enabled(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Replaces the results with the upstream matches for the current keys.
    /// Results are left untouched when the request fails.
    pub async fn search<S: MealSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let response = source.recipe_search(&self.keys).await?;

        tracing::debug!(keys = %self.keys, found = response.recipes.len(), "recipe search");
        self.render_results(&response);

        Ok(())
    }

    pub fn render_results(&mut self, search: &RecipeSearch) {
        self.results = results_table(search);
    }

    /// Selects the row at `index` and deselects every other one.
    pub fn click_row(&mut self, index: usize) -> bool {
        let SearchResults::Table(table) = &mut self.results else {
            return false;
        };

        if index >= table.rows.len() {
            return false;
        }

        for (i, row) in table.rows.iter_mut().enumerate() {
            row.selected = i == index;
        }

        true
    }

    /// Marks the rows whose recipe id is in `ids`, returns how many matched.
    pub fn mark_selected(&mut self, ids: &[u64]) -> usize {
        let SearchResults::Table(table) = &mut self.results else {
            return 0;
        };

        let ids = ids.iter().map(u64::to_string).collect::<Vec<_>>();
        let mut count = 0;

        for row in table.rows.iter_mut() {
            row.selected = ids.iter().any(|id| id == row.text(ID_COLUMN));
            count += usize::from(row.selected);
        }

        count
    }

    pub fn selected_rows(&self) -> Vec<&Row> {
        match &self.results {
            SearchResults::Table(table) => table.rows.iter().filter(|row| row.selected).collect(),
            _ => Vec::new(),
        }
    }

    /// Copies the single selected recipe into the form and closes the dialog.
    /// The form is left untouched unless exactly one row is selected.
    pub fn confirm_selection(
        &mut self,
        form: &mut RecipeFormFields,
    ) -> std::result::Result<(), SelectionError> {
        let row = match self.selected_rows().as_slice() {
            [] => return Err(SelectionError::NoneSelected),
            [row] => *row,
            _ => return Err(SelectionError::MultipleSelected),
        };

        form.recipe_name_display = row.text(NAME_COLUMN).to_owned();
        form.recipe = row.text(ID_COLUMN).to_owned();
        self.open = false;

        Ok(())
    }

    pub fn sort_results(&mut self, column: usize) -> Option<SortDirection> {
        match &mut self.results {
            SearchResults::Table(table) => Some(sort_by_column(table, column)),
            _ => None,
        }
    }
}

/// Result table with one row per recipe, in response order.
///
/// The usage columns are only shown when the first recipe carries them.
pub fn results_table(search: &RecipeSearch) -> SearchResults {
    let Some(first) = search.recipes.first() else {
        return SearchResults::Empty;
    };

    let columns = Columns {
        last_made: first.last_made.is_some(),
        rating: first.rating.is_some(),
        times_made: first.times_made.is_some(),
    };

    SearchResults::Table(Table {
        id: RESULTS_TABLE_ID.to_owned(),
        header: Some(columns.header()),
        rows: search.recipes.iter().map(|r| columns.row(r)).collect(),
    })
}

struct Columns {
    last_made: bool,
    rating: bool,
    times_made: bool,
}

impl Columns {
    fn header(&self) -> Row {
        let mut cells = vec![
            Cell::hidden("Id"),
            Cell::new("Name"),
            Cell::new("Cookbook"),
            Cell::new("Author"),
        ];

        if self.last_made {
            cells.push(Cell::new("Last Made"));
        }

        if self.rating {
            cells.push(Cell::new("Rating"));
        }

        if self.times_made {
            cells.push(Cell::new("Times Made"));
        }

        Row::new(cells)
    }

    fn row(&self, recipe: &SearchResult) -> Row {
        let mut cells = vec![
            Cell::hidden(recipe.id.to_string()),
            Cell::new(recipe.name.to_owned()),
            Cell::new(recipe.cookbook.to_owned()),
            Cell::new(recipe.author.to_owned()),
        ];

        if self.last_made {
            cells.push(Cell::new(recipe.last_made.to_owned().unwrap_or_default()));
        }

        if self.rating {
            cells.push(Cell::new(recipe.rating_label().unwrap_or_default()));
        }

        if self.times_made {
            cells.push(Cell::new(
                recipe
                    .times_made
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ));
        }

        Row::new(cells)
    }
}
