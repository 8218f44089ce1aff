//! Holiday provider capability.
//!
//! # Responsibility
//! - Define the one-operation capability supplying a year's holiday list.
//! - Host the remote and offline-fallback implementations.
//!
//! # Invariants
//! - Providers return holidays in provider-defined order; callers must not
//!   assume normalization or deduplication.
//! - Every failure mode collapses into `ProviderError::Unavailable`; the
//!   cache layer decides what recovery looks like.

use crate::model::holiday::Holiday;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod calendarific;
pub mod envelope;
pub mod offline;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Holiday fetch failure: transport error, bad status, malformed payload or
/// unreadable dataset.
#[derive(Debug)]
pub enum ProviderError {
    Unavailable(String),
}

impl ProviderError {
    /// Reason text carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            Self::Unavailable(reason) => reason,
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "holiday provider unavailable: {reason}"),
        }
    }
}

impl Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        Self::Unavailable(format!("transport failure: {value}"))
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Unavailable(format!("malformed payload: {value}"))
    }
}

impl From<std::io::Error> for ProviderError {
    fn from(value: std::io::Error) -> Self {
        Self::Unavailable(format!("dataset unreadable: {value}"))
    }
}

/// Capability supplying the holiday list for a given year.
pub trait HolidayProvider {
    /// Returns the provider-defined ordered holiday sequence for `year`.
    fn fetch(&self, year: i32) -> ProviderResult<Vec<Holiday>>;
}
