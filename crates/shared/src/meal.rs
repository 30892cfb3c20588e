use serde::{Deserialize, Serialize};

/// Meal planned for a single calendar day, as returned by `meals_by_month`.
///
/// An empty `recipe_name` means nothing is planned for the day. Every other
/// attribute is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayMeal {
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub recipe_name: String,
    #[serde(default)]
    pub recipe_id: Option<u64>,
    #[serde(default)]
    pub meal_id: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub cookbook_id: Option<u64>,
    #[serde(default, rename = "cookbook")]
    pub cookbook_title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub abbr: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DayMeal {
    pub fn is_planned(&self) -> bool {
        !self.recipe_name.is_empty()
    }

    /// `p<N>`, or nothing when the recipe has no page (leftovers, external recipes).
    pub fn page_label(&self) -> Option<String> {
        match self.page {
            Some(0) | None => None,
            Some(page) => Some(format!("p{page}")),
        }
    }

    pub fn cookbook_abbr(&self) -> Option<String> {
        if let Some(abbr) = self.abbr.as_deref().filter(|a| !a.is_empty()) {
            return Some(abbr.to_owned());
        }

        self.cookbook_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(abbreviate)
    }

    /// Cookbook title followed by its author, used as the abbreviation tooltip.
    pub fn cookbook_tooltip(&self) -> Option<String> {
        let title = self.cookbook_title.as_deref().filter(|t| !t.is_empty())?;

        match self.author.as_deref().map(str::trim) {
            Some(author) if !author.is_empty() => Some(format!("{title} by {author}")),
            _ => Some(title.to_owned()),
        }
    }

    /// Upstream uses id 0 for recipes without a cookbook.
    pub fn cookbook_href(&self) -> Option<String> {
        self.cookbook_id
            .filter(|id| *id != 0)
            .map(|id| format!("../cookbook/{id}"))
    }

    pub fn recipe_href(&self) -> Option<String> {
        self.recipe_id.map(|id| format!("../recipe/{id}"))
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// A single word keeps its first three characters, longer titles use the
/// initial of every word.
pub fn abbreviate(title: &str) -> String {
    let words = title.split_whitespace().collect::<Vec<_>>();

    match words.as_slice() {
        [word] => word.chars().take(3).collect(),
        words => words.iter().filter_map(|w| w.chars().next()).collect(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthMeals {
    pub month_meals: Vec<DayMeal>,
}

impl MonthMeals {
    /// Meal for a 1-based day of month.
    pub fn day(&self, day: u8) -> Option<&DayMeal> {
        usize::from(day)
            .checked_sub(1)
            .and_then(|idx| self.month_meals.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label_suppressed_for_zero() {
        let meal = DayMeal {
            recipe_name: "Leftovers".to_owned(),
            page: Some(0),
            ..Default::default()
        };

        assert_eq!(meal.page_label(), None);

        let meal = DayMeal {
            page: Some(12),
            ..meal
        };

        assert_eq!(meal.page_label().as_deref(), Some("p12"));
    }

    #[test]
    fn test_abbreviate() {
        assert_eq!(abbreviate("Joy of Cooking"), "JoC");
        assert_eq!(abbreviate("Jerusalem"), "Jer");
        assert_eq!(abbreviate("Ox"), "Ox");
    }

    #[test]
    fn test_cookbook_abbr_prefers_upstream_value() {
        let meal = DayMeal {
            recipe_name: "Soup".to_owned(),
            abbr: Some("Unk".to_owned()),
            cookbook_title: Some("Salt Fat Acid Heat".to_owned()),
            ..Default::default()
        };
        assert_eq!(meal.cookbook_abbr().as_deref(), Some("Unk"));

        let meal = DayMeal { abbr: None, ..meal };
        assert_eq!(meal.cookbook_abbr().as_deref(), Some("SFAH"));
    }

    #[test]
    fn test_unknown_cookbook_has_no_link() {
        let meal = DayMeal {
            cookbook_id: Some(0),
            ..Default::default()
        };
        assert_eq!(meal.cookbook_href(), None);
    }

    #[test]
    fn test_deserialize_empty_day() {
        let meals: MonthMeals = serde_json::from_str(
            r#"{"month_meals":[{"scheduled_date":"2024-01-01","recipe_name":""}]}"#,
        )
        .unwrap();

        let day = meals.day(1).unwrap();
        assert!(!day.is_planned());
        assert!(meals.day(2).is_none());
        assert!(meals.day(0).is_none());
    }

    #[test]
    fn test_deserialize_planned_day() {
        let meals: MonthMeals = serde_json::from_str(
            r#"{"month_meals":[{
                "scheduled_date":"2024-01-01","meal_id":7,"recipe_name":"Pancakes",
                "page":12,"cookbook_id":3,"cookbook":"Joy of Cooking",
                "author":"Irma Rombauer","abbr":"JoC"
            }]}"#,
        )
        .unwrap();

        let day = meals.day(1).unwrap();
        assert!(day.is_planned());
        assert_eq!(day.meal_id, Some(7));
        assert_eq!(
            day.cookbook_tooltip().as_deref(),
            Some("Joy of Cooking by Irma Rombauer")
        );
        assert_eq!(day.cookbook_href().as_deref(), Some("../cookbook/3"));
    }
}
