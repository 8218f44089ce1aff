//! Month/year navigation cursor.
//!
//! # Responsibility
//! - Hold the (month, year) pair currently displayed.
//! - Validate textual jump input coming from the date-picker collaborator.
//!
//! # Invariants
//! - The cursor is always a valid month/year pair.
//! - A failed `jump` leaves the cursor untouched.
//! - `advance` rolls the year at January/December boundaries and saturates
//!   at the supported year bounds.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest year accepted by `jump`.
pub const MIN_YEAR: i32 = 1;
/// Highest year accepted by `jump`.
pub const MAX_YEAR: i32 = 9999;

pub type NavigationResult<T> = Result<T, NavigationError>;

/// Navigation input error, surfaced to the caller as user-correctable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Input is not parseable as a legitimate month/year pair.
    InvalidDate(String),
}

impl Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(details) => write!(f, "invalid date input: {details}"),
        }
    }
}

impl Error for NavigationError {}

/// Direction for single-month cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The (month, year) cursor driving which grid is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    month: u32,
    year: i32,
}

impl NavigationState {
    /// Creates a cursor positioned at a validated month/year pair.
    pub fn new(month: u32, year: i32) -> NavigationResult<Self> {
        validate_month(month)?;
        validate_year(year)?;
        Ok(Self { month, year })
    }

    /// Current month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Current year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current cursor as a `(month, year)` pair.
    pub fn cursor(&self) -> (u32, i32) {
        (self.month, self.year)
    }

    /// Replaces the cursor from raw textual input.
    ///
    /// Both fields are parsed and validated before either is written, so the
    /// replacement is atomic: on error the cursor keeps its previous value.
    pub fn jump(&mut self, month: &str, year: &str) -> NavigationResult<()> {
        let month = parse_month(month)?;
        let year = parse_year(year)?;
        self.month = month;
        self.year = year;
        Ok(())
    }

    /// Moves the cursor exactly one calendar month.
    ///
    /// Rolls the year at January/December boundaries. At the supported year
    /// bounds the move saturates and the cursor stays in place.
    pub fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Next => {
                if self.month == 12 {
                    if self.year < MAX_YEAR {
                        self.month = 1;
                        self.year += 1;
                    }
                } else {
                    self.month += 1;
                }
            }
            Direction::Previous => {
                if self.month == 1 {
                    if self.year > MIN_YEAR {
                        self.month = 12;
                        self.year -= 1;
                    }
                } else {
                    self.month -= 1;
                }
            }
        }
    }
}

fn parse_month(value: &str) -> NavigationResult<u32> {
    let month = value
        .trim()
        .parse::<u32>()
        .map_err(|_| NavigationError::InvalidDate(format!("month is not a number: `{value}`")))?;
    validate_month(month)?;
    Ok(month)
}

fn parse_year(value: &str) -> NavigationResult<i32> {
    let year = value
        .trim()
        .parse::<i32>()
        .map_err(|_| NavigationError::InvalidDate(format!("year is not a number: `{value}`")))?;
    validate_year(year)?;
    Ok(year)
}

fn validate_month(month: u32) -> NavigationResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(NavigationError::InvalidDate(format!(
            "month must be in 1..=12, got {month}"
        )))
    }
}

fn validate_year(year: i32) -> NavigationResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(NavigationError::InvalidDate(format!(
            "year must be in {MIN_YEAR}..={MAX_YEAR}, got {year}"
        )))
    }
}
