use crate::{MonthMeals, RecipeSearch, Result};

/// Read access to the meal planner data the widgets display.
#[async_trait::async_trait]
pub trait MealSource: Send + Sync {
    /// Meals for every day of a month, `month` is 1-based.
    async fn meals_by_month(&self, year: i32, month: u8) -> Result<MonthMeals>;

    /// Recipes matching the raw keyword string.
    async fn recipe_search(&self, keys: &str) -> Result<RecipeSearch>;
}
