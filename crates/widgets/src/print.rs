//! Options of the calendar print dialog. The PDF itself is produced upstream.

use mealplanner_calendar::DisplayedPeriod;
use mealplanner_shared::{Result, invalid};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub const PRINTABLE_WEEKS: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PrintScope {
    #[default]
    All,
    Select,
}

impl PrintScope {
    pub fn label(&self) -> &'static str {
        match self {
            PrintScope::All => "Print all weeks",
            PrintScope::Select => "Print only following weeks:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintOptions {
    pub meal_year: i32,
    /// 1-based.
    pub meal_month: u8,
    #[serde(rename = "print_weeks", default)]
    pub scope: PrintScope,
    #[serde(default)]
    pub weeks: Vec<u8>,
    #[serde(default)]
    pub print_only_meals: bool,
    #[serde(default = "default_print_notes")]
    pub print_notes: bool,
}

fn default_print_notes() -> bool {
    true
}

impl PrintOptions {
    pub fn for_period(period: DisplayedPeriod) -> Self {
        Self {
            meal_year: period.year(),
            meal_month: period.month_number(),
            scope: PrintScope::All,
            weeks: Vec::new(),
            print_only_meals: false,
            print_notes: default_print_notes(),
        }
    }

    pub fn set_scope(&mut self, scope: PrintScope) {
        self.scope = scope;
    }

    /// Week checkboxes are only editable when printing selected weeks.
    pub fn weeks_disabled(&self) -> bool {
        self.scope == PrintScope::All
    }

    pub fn selected_weeks(&self) -> Vec<u8> {
        match self.scope {
            PrintScope::All => PRINTABLE_WEEKS.to_vec(),
            PrintScope::Select => PRINTABLE_WEEKS
                .into_iter()
                .filter(|week| self.weeks.contains(week))
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.meal_month) {
            invalid!("month {} is out of range", self.meal_month);
        }

        if let Some(week) = self.weeks.iter().find(|week| !PRINTABLE_WEEKS.contains(*week)) {
            invalid!("week {week} is out of range");
        }

        if self.scope == PrintScope::Select && self.weeks.is_empty() {
            invalid!("select at least one week to print");
        }

        Ok(())
    }
}
