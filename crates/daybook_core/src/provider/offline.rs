//! Offline fallback provider reading the bundled holiday dataset.
//!
//! # Responsibility
//! - Serve holidays from a local dataset recorded for a fixed reference
//!   year, rewritten to the requested year.
//!
//! # Invariants
//! - The rewrite is a plain textual substitution of the reference-year
//!   literal, not a semantic recompute. Holidays whose actual date depends
//!   on the year (moving feasts) keep the reference-year day and will be
//!   wrong after substitution. Intentional; do not recompute.

use crate::model::holiday::Holiday;
use crate::provider::envelope::HolidayEnvelope;
use crate::provider::{HolidayProvider, ProviderResult};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Year the bundled dataset was recorded for.
pub const REFERENCE_YEAR: i32 = 2020;

/// Offline implementation of the holiday provider capability.
pub struct OfflineFallbackProvider {
    dataset_path: PathBuf,
}

impl OfflineFallbackProvider {
    /// Creates a provider reading the dataset at `dataset_path`.
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
        }
    }
}

impl HolidayProvider for OfflineFallbackProvider {
    fn fetch(&self, year: i32) -> ProviderResult<Vec<Holiday>> {
        let raw = fs::read_to_string(&self.dataset_path)?;
        let rewritten = raw.replace(&REFERENCE_YEAR.to_string(), &year.to_string());
        let envelope: HolidayEnvelope = serde_json::from_str(&rewritten)?;
        let holidays = envelope.into_holidays()?;
        info!(
            "event=holiday_fetch module=provider provider=offline status=ok year={} count={}",
            year,
            holidays.len()
        );
        Ok(holidays)
    }
}
