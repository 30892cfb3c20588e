use mealplanner_shared::{Error, MealSource, MonthMeals, Result, invalid};
use time::Date;

use crate::{DEFAULT_TOOLTIP_WIDTH, Direction, DisplayedPeriod, MonthGrid, cookie, grid};

/// A meals request issued by a period change, stamped with its sequence
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub period: DisplayedPeriod,
}

/// Calendar navigation state.
///
/// Every period change issues a new [`PendingRequest`]; only the response to
/// the latest one is rendered, so a slow response for a month the user already
/// navigated away from is dropped.
#[derive(Debug, Clone)]
pub struct CalendarView {
    period: DisplayedPeriod,
    today: Date,
    seq: u64,
    tooltip_width: usize,
}

impl CalendarView {
    pub fn new(period: DisplayedPeriod, today: Date) -> Self {
        Self {
            period,
            today,
            seq: 0,
            tooltip_width: DEFAULT_TOOLTIP_WIDTH,
        }
    }

    /// Initial state from the `yearmonth` cookie value.
    pub fn restore(cookie_value: Option<&str>, today: Date) -> Self {
        Self::new(cookie::restore(cookie_value, today), today)
    }

    pub fn with_tooltip_width(mut self, tooltip_width: usize) -> Self {
        self.tooltip_width = tooltip_width;
        self
    }

    /// Continues the sequence of a client that already issued `seq` requests.
    pub fn resume_from(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }

    pub fn period(&self) -> DisplayedPeriod {
        self.period
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn cookie_value(&self) -> String {
        cookie::encode(&self.period)
    }

    /// Requests the current period again, used on page load.
    pub fn refresh(&mut self) -> PendingRequest {
        self.issue()
    }

    pub fn set_period(&mut self, month: i32, year: i32) -> Result<PendingRequest> {
        self.period = DisplayedPeriod::new(month, year)?;

        Ok(self.issue())
    }

    pub fn advance(&mut self, direction: Direction) -> PendingRequest {
        self.period = self.period.advance(direction);
        self.issue()
    }

    pub fn jump_to_today(&mut self) -> PendingRequest {
        self.period = DisplayedPeriod::from_date(self.today);
        self.issue()
    }

    /// Period picked with the month and year selectors.
    pub fn jump_to_selection(&mut self, month: &str, year: &str) -> Result<PendingRequest> {
        let month = month
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::Validate(format!("invalid month {month:?}")))?;

        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| Error::Validate(format!("invalid year {year:?}")))?;

        if !(0..12).contains(&month) {
            invalid!("month {month} is out of range");
        }

        self.set_period(month, year)
    }

    /// Grid for `request`, or `None` when a newer request was issued since.
    pub fn receive(&self, request: PendingRequest, meals: &MonthMeals) -> Option<MonthGrid> {
        if request.seq != self.seq {
            tracing::debug!(
                seq = request.seq,
                latest = self.seq,
                period = %request.period,
                "discarding stale calendar response"
            );

            return None;
        }

        Some(self.build(request.period, meals))
    }

    /// Grid for `request`, dropped when a newer request was issued while the
    /// meals were loading.
    pub async fn load<S: MealSource + ?Sized>(
        &self,
        source: &S,
        request: PendingRequest,
    ) -> Result<Option<MonthGrid>> {
        let meals = Self::meals(source, request).await?;

        Ok(self.receive(request, &meals))
    }

    /// Grid for `request` regardless of newer requests, for callers that
    /// leave the stale check to whoever displays the grid.
    pub async fn fetch<S: MealSource + ?Sized>(
        &self,
        source: &S,
        request: PendingRequest,
    ) -> Result<MonthGrid> {
        let meals = Self::meals(source, request).await?;

        Ok(self.build(request.period, &meals))
    }

    async fn meals<S: MealSource + ?Sized>(source: &S, request: PendingRequest) -> Result<MonthMeals> {
        source
            .meals_by_month(request.period.year(), request.period.month_number())
            .await
    }

    fn build(&self, period: DisplayedPeriod, meals: &MonthMeals) -> MonthGrid {
        grid::build(period, meals, self.today, self.tooltip_width)
    }

    fn issue(&mut self) -> PendingRequest {
        self.seq += 1;

        PendingRequest {
            seq: self.seq,
            period: self.period,
        }
    }
}
