use mealplanner_shared::{Error, Result, invalid};
use strum::{AsRefStr, Display, EnumString};
use time::{Date, Duration, Month};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Month shown by the calendar.
///
/// Months are 0-based (January = 0) everywhere except [`month_number`], which
/// is what the upstream API and date links expect.
///
/// [`month_number`]: DisplayedPeriod::month_number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayedPeriod {
    first: Date,
}

impl DisplayedPeriod {
    /// Normalizes `month` into 0..=11, carrying whole years into `year`.
    pub fn new(month: i32, year: i32) -> Result<Self> {
        let Some(year) = year.checked_add(month.div_euclid(12)) else {
            invalid!("year {year} is out of range");
        };

        let month = Month::try_from(month.rem_euclid(12) as u8 + 1)
            .map_err(|e| Error::Validate(e.to_string()))?;

        let first = Date::from_calendar_date(year, month, 1)
            .map_err(|e| Error::Validate(e.to_string()))?;

        Ok(Self { first })
    }

    pub fn from_date(date: Date) -> Self {
        Self {
            first: date.saturating_sub(Duration::days(i64::from(date.day()) - 1)),
        }
    }

    pub fn month(&self) -> u8 {
        u8::from(self.first.month()) - 1
    }

    pub fn month_number(&self) -> u8 {
        u8::from(self.first.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month())]
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    /// Weekday of the 1st, 0 = Sunday.
    pub fn first_weekday(&self) -> u8 {
        self.first.weekday().number_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u8 {
        // Day 32 always overflows into the following month; the day it lands
        // on tells how many days were skipped.
        match self.first.checked_add(Duration::days(31)) {
            Some(day_32) => 32 - day_32.day(),
            None => 31,
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.first.month()
    }

    pub fn next(self) -> Self {
        self.advance(Direction::Next)
    }

    pub fn previous(self) -> Self {
        self.advance(Direction::Previous)
    }

    /// Stays put at the edges of the supported date range.
    pub fn advance(self, direction: Direction) -> Self {
        let offset = match direction {
            Direction::Next => 1,
            Direction::Previous => -1,
        };

        Self::new(i32::from(self.month()) + offset, self.year()).unwrap_or(self)
    }
}

impl std::fmt::Display for DisplayedPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

/// Number of days of a 0-based `month`.
pub fn days_in_month(month: u8, year: i32) -> Result<u8> {
    Ok(DisplayedPeriod::new(i32::from(month), year)?.days_in_month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_normalizes_overflow() {
        let period = DisplayedPeriod::new(12, 2023).unwrap();
        assert_eq!((period.month(), period.year()), (0, 2024));

        let period = DisplayedPeriod::new(-1, 2024).unwrap();
        assert_eq!((period.month(), period.year()), (11, 2023));

        let period = DisplayedPeriod::new(-13, 2024).unwrap();
        assert_eq!((period.month(), period.year()), (11, 2022));
    }

    #[test]
    fn test_new_rejects_unsupported_year() {
        assert!(DisplayedPeriod::new(0, 100_000).is_err());
    }

    #[test]
    fn test_from_date() {
        let period = DisplayedPeriod::from_date(date!(2024 - 02 - 29));
        assert_eq!(period.first_day(), date!(2024 - 02 - 01));
        assert_eq!(period.to_string(), "February 2024");
    }

    #[test]
    fn test_days_in_month_leap_years() {
        assert_eq!(days_in_month(1, 2024).unwrap(), 29);
        assert_eq!(days_in_month(1, 2023).unwrap(), 28);
        assert_eq!(days_in_month(1, 2000).unwrap(), 29);
        assert_eq!(days_in_month(1, 1900).unwrap(), 28);
        assert_eq!(days_in_month(11, 9999).unwrap(), 31);
    }

    #[test]
    fn test_first_weekday() {
        // 2024-01-01 was a Monday
        assert_eq!(DisplayedPeriod::new(0, 2024).unwrap().first_weekday(), 1);
        // 2023-10-01 was a Sunday
        assert_eq!(DisplayedPeriod::new(9, 2023).unwrap().first_weekday(), 0);
    }

    #[test]
    fn test_advance_rolls_over_year() {
        let december = DisplayedPeriod::new(11, 2023).unwrap();
        assert_eq!(december.next(), DisplayedPeriod::new(0, 2024).unwrap());
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("next".parse::<Direction>().unwrap(), Direction::Next);
        assert_eq!(Direction::Previous.to_string(), "previous");
    }
}
