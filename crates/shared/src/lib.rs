mod error;
pub mod meal;
pub mod recipe;
mod source;
pub mod text;

pub use error::*;
pub use meal::{DayMeal, MonthMeals};
pub use recipe::{RecipeSearch, SearchResult};
pub use source::*;
