//! Holiday and derived day-info records.
//!
//! # Responsibility
//! - Define the holiday record supplied by holiday providers.
//! - Define the derived annotation attached to one calendar day.
//!
//! # Invariants
//! - `(date, name)` is not guaranteed unique upstream; resolution treats the
//!   first holiday matching a date as authoritative.
//! - The not-a-holiday record uses empty strings, not absent values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One holiday entry for a given year, as supplied by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Civil calendar date of the holiday.
    pub date: NaiveDate,
    /// Display name, e.g. `Victory Day`.
    pub name: String,
    /// Free-text description supplied by the provider.
    pub description: String,
    /// Provider-defined category, e.g. `National holiday`.
    pub category: String,
}

/// Derived holiday annotation for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// Whether the date matched a known holiday.
    pub is_holiday: bool,
    /// Holiday name, empty when `is_holiday` is false.
    pub name: String,
    /// Holiday description, empty when `is_holiday` is false.
    pub description: String,
    /// Holiday category, empty when `is_holiday` is false.
    pub category: String,
}

impl DayInfo {
    /// Canonical record for a date with no holiday data.
    pub fn not_a_holiday() -> Self {
        Self {
            is_holiday: false,
            name: String::new(),
            description: String::new(),
            category: String::new(),
        }
    }

    /// Builds the annotation for a matched holiday.
    pub fn from_holiday(holiday: &Holiday) -> Self {
        Self {
            is_holiday: true,
            name: holiday.name.clone(),
            description: holiday.description.clone(),
            category: holiday.category.clone(),
        }
    }
}
