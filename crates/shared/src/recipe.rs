use serde::{Deserialize, Serialize};

/// One row of a `recipe_search` response.
///
/// Only `id` and `name` are always present; the usage columns depend on the
/// upstream version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub cookbook: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "last made")]
    pub last_made: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "times made")]
    pub times_made: Option<u32>,
}

impl SearchResult {
    /// `-` for unrated recipes.
    pub fn rating_label(&self) -> Option<String> {
        self.rating.map(|rating| {
            if rating == 0.0 {
                "-".to_owned()
            } else {
                rating.to_string()
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSearch {
    pub recipes: Vec<SearchResult>,
}
