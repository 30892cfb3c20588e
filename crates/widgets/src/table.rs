//! Column sorting for small HTML tables.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Delay before a deferred sort starts, leaves the page time to show the busy
/// cursor.
pub const DEFAULT_SORT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden: false,
        }
    }

    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub selected: bool,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            selected: false,
        }
    }

    /// Text of a column, empty when the row is shorter.
    pub fn text(&self, column: usize) -> &str {
        self.cells
            .get(column)
            .map(|cell| cell.text.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    #[serde(default)]
    pub header: Option<Row>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    #[serde(rename = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    #[serde(rename = "desc")]
    Descending,
}

/// Bubble sorts the body rows on the case-insensitive text of `column`.
///
/// Sorting starts ascending; when the rows are already in ascending order the
/// pass switches to descending instead, so calling it repeatedly flips the
/// order. Returns the direction the rows ended up in.
pub fn sort_by_column(table: &mut Table, column: usize) -> SortDirection {
    let mut direction = SortDirection::Ascending;
    let mut switch_count = 0;

    loop {
        let out_of_order = (1..table.rows.len()).find(|&i| {
            let x = table.rows[i - 1].text(column).to_lowercase();
            let y = table.rows[i].text(column).to_lowercase();

            match direction {
                SortDirection::Ascending => x > y,
                SortDirection::Descending => x < y,
            }
        });

        match out_of_order {
            Some(i) => {
                table.rows.swap(i - 1, i);
                switch_count += 1;
            }
            None if switch_count == 0 && direction == SortDirection::Ascending => {
                direction = SortDirection::Descending;
            }
            None => return direction,
        }
    }
}

/// Shared flag set while a deferred sort is pending or running.
#[derive(Debug, Clone, Default)]
pub struct BusyIndicator(Arc<AtomicBool>);

impl BusyIndicator {
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn enter(&self) -> BusyGuard {
        self.0.store(true, Ordering::Release);
        BusyGuard(self.0.clone())
    }
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// [`sort_by_column`] after `delay`, with `busy` raised until the sort is done
/// or the future is dropped.
pub async fn sort_by_column_deferred(
    table: &mut Table,
    column: usize,
    delay: Duration,
    busy: &BusyIndicator,
) -> SortDirection {
    let _guard = busy.enter();
    tokio::time::sleep(delay).await;

    sort_by_column(table, column)
}
