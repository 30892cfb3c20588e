//! `yearmonth` cookie holding the last displayed month.
//!
//! The value is `<year>-<month>` with a 0-based month, e.g. `2023-11` for
//! December 2023.

use time::Date;

use crate::DisplayedPeriod;

pub const COOKIE_NAME: &str = "yearmonth";
pub const DEFAULT_COOKIE_HOURS: u32 = 8;

pub fn encode(period: &DisplayedPeriod) -> String {
    format!("{}-{}", period.year(), period.month())
}

pub fn decode(value: &str) -> Option<DisplayedPeriod> {
    let (year, month) = value.trim().split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<i32>().ok()?;

    if !(0..12).contains(&month) {
        return None;
    }

    DisplayedPeriod::new(month, year).ok()
}

/// Period stored in the cookie, or the month of `today` when it is missing or
/// malformed.
pub fn restore(value: Option<&str>, today: Date) -> DisplayedPeriod {
    match value.filter(|v| !v.is_empty()) {
        Some(value) => decode(value).unwrap_or_else(|| {
            tracing::debug!(value, "malformed {COOKIE_NAME} cookie, using current month");
            DisplayedPeriod::from_date(today)
        }),
        None => DisplayedPeriod::from_date(today),
    }
}
