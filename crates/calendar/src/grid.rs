use mealplanner_shared::{DayMeal, MonthMeals, text::wrap_text};
use time::Date;

use crate::DisplayedPeriod;

pub const WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const DEFAULT_TOOLTIP_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLink {
    pub href: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookbookBadge {
    pub abbr: String,
    pub tooltip: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    pub href: Option<String>,
    pub cookbook: Option<CookbookBadge>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u8,
    pub is_today: bool,
    pub link: DayLink,
    pub recipe: Option<RecipeSummary>,
    pub notes: Option<String>,
}

/// One calendar row. `None` cells are the blanks before the 1st; a row stops
/// early once the month is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Week {
    pub cells: Vec<Option<DayCell>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub period: DisplayedPeriod,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn heading(&self) -> String {
        self.period.to_string()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.cells.iter().flatten())
    }

    pub fn day(&self, day: u8) -> Option<&DayCell> {
        self.days().find(|cell| cell.day == day)
    }
}

/// Lays out the month as 6 weeks of 7 days starting on Sunday.
pub fn build(
    period: DisplayedPeriod,
    meals: &MonthMeals,
    today: Date,
    tooltip_width: usize,
) -> MonthGrid {
    let first_weekday = usize::from(period.first_weekday());
    let days_in_month = period.days_in_month();
    let no_meal = DayMeal::default();

    let mut weeks = Vec::with_capacity(WEEKS);
    let mut date = 1;

    for week in 0..WEEKS {
        let mut cells = Vec::with_capacity(DAYS_PER_WEEK);

        for weekday in 0..DAYS_PER_WEEK {
            if week == 0 && weekday < first_weekday {
                cells.push(None);
                continue;
            }

            if date > days_in_month {
                break;
            }

            let meal = meals.day(date).unwrap_or(&no_meal);
            cells.push(Some(day_cell(period, date, meal, today, tooltip_width)));
            date += 1;
        }

        weeks.push(Week { cells });
    }

    MonthGrid { period, weeks }
}

fn day_cell(
    period: DisplayedPeriod,
    day: u8,
    meal: &DayMeal,
    today: Date,
    tooltip_width: usize,
) -> DayCell {
    let is_today = period.contains(today) && today.day() == day;
    let notes = meal.notes().map(|notes| wrap_text(notes, tooltip_width));

    let (Some(meal_id), true) = (meal.meal_id, meal.is_planned()) else {
        return DayCell {
            day,
            is_today,
            link: DayLink {
                href: new_meal_href(period, day),
                title: format!("Set meal for {day} of month"),
            },
            recipe: None,
            notes,
        };
    };

    let cookbook = meal.cookbook_abbr().map(|abbr| CookbookBadge {
        abbr,
        tooltip: meal.cookbook_tooltip(),
        href: meal.cookbook_href(),
    });

    DayCell {
        day,
        is_today,
        link: DayLink {
            href: format!("/meal/{meal_id}"),
            title: format!("Edit meal for {day} of month"),
        },
        recipe: Some(RecipeSummary {
            name: meal.recipe_name.to_owned(),
            href: meal.recipe_href(),
            cookbook,
            page: meal.page_label(),
        }),
        notes,
    }
}

/// Link to the meal creation form, pre-filled with an unpadded `Y-M-D` date.
pub fn new_meal_href(period: DisplayedPeriod, day: u8) -> String {
    format!(
        "/meal/new?date={}-{}-{}",
        period.year(),
        period.month_number(),
        day
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn planned(name: &str) -> DayMeal {
        DayMeal {
            recipe_name: name.to_owned(),
            meal_id: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_always_six_weeks() {
        // February 2015 fits exactly in 4 rows
        let period = DisplayedPeriod::new(1, 2015).unwrap();
        let grid = build(period, &MonthMeals::default(), date!(2020 - 01 - 01), 40);

        assert_eq!(grid.weeks.len(), WEEKS);
        assert_eq!(grid.weeks[3].cells.len(), 7);
        assert!(grid.weeks[4].cells.is_empty());
        assert!(grid.weeks[5].cells.is_empty());
        assert_eq!(grid.days().count(), 28);
    }

    #[test]
    fn test_leading_blanks() {
        // 2023-09-01 was a Friday
        let period = DisplayedPeriod::new(8, 2023).unwrap();
        let grid = build(period, &MonthMeals::default(), date!(2020 - 01 - 01), 40);

        let first_week = &grid.weeks[0].cells;
        assert!(first_week[..5].iter().all(Option::is_none));
        assert_eq!(first_week[5].as_ref().map(|c| c.day), Some(1));
        assert_eq!(first_week[6].as_ref().map(|c| c.day), Some(2));
    }

    #[test]
    fn test_last_row_stops_after_month() {
        // August 2020 starts on a Saturday and needs all 6 rows
        let period = DisplayedPeriod::new(7, 2020).unwrap();
        let grid = build(period, &MonthMeals::default(), date!(2020 - 01 - 01), 40);

        assert_eq!(grid.weeks[5].cells.len(), 2);
        assert_eq!(grid.day(31).map(|c| c.day), Some(31));
    }

    #[test]
    fn test_today_marked() {
        let period = DisplayedPeriod::new(2, 2024).unwrap();
        let grid = build(period, &MonthMeals::default(), date!(2024 - 03 - 15), 40);

        let today = grid.days().filter(|c| c.is_today).collect::<Vec<_>>();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 15);

        let grid = build(period, &MonthMeals::default(), date!(2024 - 04 - 15), 40);
        assert!(grid.days().all(|c| !c.is_today));
    }

    #[test]
    fn test_planned_day_links_to_edit() {
        let period = DisplayedPeriod::new(0, 2024).unwrap();
        let meals = MonthMeals {
            month_meals: vec![planned("Chili")],
        };
        let grid = build(period, &meals, date!(2020 - 01 - 01), 40);

        let day = grid.day(1).unwrap();
        assert_eq!(day.link.href, "/meal/42");
        assert_eq!(day.link.title, "Edit meal for 1 of month");
        assert_eq!(day.recipe.as_ref().map(|r| r.name.as_str()), Some("Chili"));
        assert_eq!(day.recipe.as_ref().and_then(|r| r.page.clone()), None);
    }

    #[test]
    fn test_empty_day_links_to_new_meal() {
        let period = DisplayedPeriod::new(0, 2024).unwrap();
        let grid = build(period, &MonthMeals::default(), date!(2020 - 01 - 01), 40);

        let day = grid.day(9).unwrap();
        assert_eq!(day.link.href, "/meal/new?date=2024-1-9");
        assert_eq!(day.link.title, "Set meal for 9 of month");
        assert!(day.recipe.is_none());
    }

    #[test]
    fn test_notes_are_wrapped() {
        let period = DisplayedPeriod::new(0, 2024).unwrap();
        let meals = MonthMeals {
            month_meals: vec![DayMeal {
                notes: Some("double the garlic and add lemon".to_owned()),
                ..planned("Chicken")
            }],
        };
        let grid = build(period, &meals, date!(2020 - 01 - 01), 12);

        assert_eq!(
            grid.day(1).and_then(|c| c.notes.as_deref()),
            Some("double the\ngarlic and\nadd lemon\n")
        );
    }
}
