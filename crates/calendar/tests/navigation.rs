use std::sync::Mutex;

use mealplanner_calendar::{CalendarView, Direction, DisplayedPeriod, days_in_month};
use mealplanner_shared::{DayMeal, Error, MealSource, MonthMeals, RecipeSearch, Result};
use time::macros::date;

#[derive(Default)]
struct Upstream {
    requested: Mutex<Vec<(i32, u8)>>,
    fail: bool,
}

#[async_trait::async_trait]
impl MealSource for Upstream {
    async fn meals_by_month(&self, year: i32, month: u8) -> Result<MonthMeals> {
        self.requested.lock().unwrap().push((year, month));

        if self.fail {
            return Err(Error::Upstream("connection refused".to_owned()));
        }

        let mut month_meals = vec![DayMeal::default(); 31];
        month_meals[0] = DayMeal {
            recipe_name: "Pancakes".to_owned(),
            meal_id: Some(1),
            page: Some(12),
            ..Default::default()
        };

        Ok(MonthMeals { month_meals })
    }

    async fn recipe_search(&self, _keys: &str) -> Result<RecipeSearch> {
        Ok(RecipeSearch::default())
    }
}

fn is_leap(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[test]
fn days_in_month_matches_gregorian_calendar() {
    for year in 1600..=2400 {
        for month in 0..12u8 {
            let expected = match month {
                1 if is_leap(year) => 29,
                1 => 28,
                3 | 5 | 8 | 10 => 30,
                _ => 31,
            };

            assert_eq!(
                days_in_month(month, year).unwrap(),
                expected,
                "month {month} of {year}"
            );
        }
    }
}

#[test]
fn twelve_nexts_advance_one_year() {
    for month in 0..12 {
        let start = DisplayedPeriod::new(month, 2023).unwrap();
        let mut period = start;

        for _ in 0..12 {
            period = period.advance(Direction::Next);
        }

        assert_eq!(period.month(), start.month());
        assert_eq!(period.year(), 2024);
    }
}

#[test]
fn twelve_previous_go_back_one_year() {
    let mut view = CalendarView::new(DisplayedPeriod::new(4, 2023).unwrap(), date!(2023 - 05 - 02));

    for _ in 0..12 {
        view.advance(Direction::Previous);
    }

    assert_eq!(view.period(), DisplayedPeriod::new(4, 2022).unwrap());
}

#[test]
fn cookie_restores_december() {
    let view = CalendarView::restore(Some("2023-11"), date!(2025 - 03 - 01));

    assert_eq!(view.period().month(), 11);
    assert_eq!(view.period().year(), 2023);
    assert_eq!(view.cookie_value(), "2023-11");
}

#[test]
fn jump_to_today_resets_period() {
    let mut view = CalendarView::restore(Some("2019-4"), date!(2025 - 03 - 01));

    let request = view.jump_to_today();

    assert_eq!(request.period, DisplayedPeriod::new(2, 2025).unwrap());
    assert_eq!(view.cookie_value(), "2025-2");
}

#[test]
fn jump_to_selection_validates_inputs() {
    let mut view = CalendarView::restore(None, date!(2025 - 03 - 01));

    assert!(view.jump_to_selection("13", "2024").is_err());
    assert!(view.jump_to_selection("x", "2024").is_err());
    assert!(view.jump_to_selection("3", "").is_err());
    assert_eq!(view.period(), DisplayedPeriod::new(2, 2025).unwrap());

    let request = view.jump_to_selection("7", " 2021 ").unwrap();
    assert_eq!(request.period, DisplayedPeriod::new(7, 2021).unwrap());
}

#[test]
fn stale_responses_are_discarded() {
    let mut view = CalendarView::restore(Some("2024-0"), date!(2024 - 01 - 10));

    let february = view.advance(Direction::Next);
    let march = view.advance(Direction::Next);

    assert!(view.receive(february, &MonthMeals::default()).is_none());

    let grid = view.receive(march, &MonthMeals::default()).unwrap();
    assert_eq!(grid.heading(), "March 2024");
}

#[tokio::test]
async fn set_period_renders_pancakes() {
    let upstream = Upstream::default();
    let mut view = CalendarView::restore(None, date!(2024 - 01 - 20));

    let request = view.set_period(0, 2024).unwrap();
    let grid = view.load(&upstream, request).await.unwrap().unwrap();

    assert_eq!(upstream.requested.lock().unwrap().as_slice(), &[(2024, 1)]);

    let first = grid.days().next().unwrap();
    let recipe = first.recipe.as_ref().unwrap();
    assert_eq!(first.day, 1);
    assert_eq!(recipe.name, "Pancakes");
    assert_eq!(recipe.page.as_deref(), Some("p12"));

    let second = grid.day(2).unwrap();
    assert!(second.recipe.is_none());
    assert_eq!(second.link.href, "/meal/new?date=2024-1-2");

    assert!(grid.day(20).unwrap().is_today);
}

#[tokio::test]
async fn upstream_failure_is_an_error_value() {
    let upstream = Upstream {
        fail: true,
        ..Default::default()
    };
    let mut view = CalendarView::restore(None, date!(2024 - 01 - 20));

    let request = view.refresh();
    let result = view.load(&upstream, request).await;

    assert!(matches!(result, Err(Error::Upstream(_))));
}

#[tokio::test]
async fn quick_navigation_lands_two_months_ahead() {
    let upstream = Upstream::default();
    let mut view = CalendarView::restore(Some("2024-0"), date!(2024 - 01 - 10));

    let february = view.advance(Direction::Next);
    let march = view.advance(Direction::Next);

    // Both requests are in flight; the older one resolves last.
    let latest = view.load(&upstream, march).await.unwrap().unwrap();
    let stale = view.load(&upstream, february).await.unwrap();

    assert_eq!(latest.heading(), "March 2024");
    assert!(stale.is_none());
    assert_eq!(view.cookie_value(), "2024-2");
}

#[tokio::test]
async fn fetch_ignores_newer_requests() {
    let upstream = Upstream::default();
    let mut view = CalendarView::restore(Some("2024-0"), date!(2024 - 01 - 10));

    let february = view.advance(Direction::Next);
    view.advance(Direction::Next);

    let grid = view.fetch(&upstream, february).await.unwrap();

    assert_eq!(grid.heading(), "February 2024");
    assert_eq!(upstream.requested.lock().unwrap().as_slice(), &[(2024, 2)]);
}
