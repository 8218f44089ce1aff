//! Month grid computation.
//!
//! # Responsibility
//! - Map a (month, year) pair to a rectangular grid of dates covering the
//!   full first and last calendar week of that month.
//!
//! # Invariants
//! - Weeks start on Sunday and are exactly 7 days wide.
//! - A grid has 4 to 6 rows; dates are strictly consecutive with no gaps.
//! - Leading/trailing entries may belong to adjacent months.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Fixed week-start day for all grids.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Rectangular grid of dates for one calendar month.
///
/// Rows are calendar weeks aligned to [`WEEK_START`]; the first and last row
/// may spill into the previous/next month so that every row is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: u32,
    year: i32,
    weeks: Vec<[NaiveDate; 7]>,
}

impl MonthGrid {
    /// Month this grid was requested for, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Year this grid was requested for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Week rows in calendar order.
    pub fn weeks(&self) -> &[[NaiveDate; 7]] {
        &self.weeks
    }

    /// All dates of the grid in calendar order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// First date of the grid (may belong to the previous month).
    pub fn first_day(&self) -> NaiveDate {
        self.weeks[0][0]
    }

    /// Last date of the grid (may belong to the next month).
    pub fn last_day(&self) -> NaiveDate {
        self.weeks[self.weeks.len() - 1][6]
    }

    /// Returns whether `day` falls inside the requested month itself.
    pub fn is_in_month(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month() == self.month
    }
}

/// Computes the month grid for `(month, year)`.
///
/// Pure and deterministic. Handles December/January rollover and leap years
/// when padding leading and trailing days.
///
/// # Panics
/// Panics when `month` is outside `1..=12`; callers (the navigation layer)
/// normalize input before reaching this function.
pub fn grid_for(month: u32, year: i32) -> MonthGrid {
    assert!(
        (1..=12).contains(&month),
        "month must be in 1..=12, got {month}"
    );

    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).expect("validated month/year is constructible");
    let first_of_next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }
    .expect("validated month/year is constructible");
    let last_of_month = first_of_next - Duration::days(1);

    let grid_start = first_of_month - Duration::days(leading_pad(first_of_month));
    let grid_end = last_of_month + Duration::days(trailing_pad(last_of_month));

    let mut weeks = Vec::new();
    let mut cursor = grid_start;
    while cursor <= grid_end {
        let mut week = [cursor; 7];
        for slot in week.iter_mut() {
            *slot = cursor;
            cursor = cursor + Duration::days(1);
        }
        weeks.push(week);
    }

    MonthGrid { month, year, weeks }
}

/// Days between the week start and the first of the month.
fn leading_pad(first_of_month: NaiveDate) -> i64 {
    i64::from(first_of_month.weekday().num_days_from_sunday())
}

/// Days between the last of the month and the week end.
fn trailing_pad(last_of_month: NaiveDate) -> i64 {
    6 - i64::from(last_of_month.weekday().num_days_from_sunday())
}
