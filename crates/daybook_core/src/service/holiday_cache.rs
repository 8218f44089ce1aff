//! Per-year holiday cache with fallback substitution.
//!
//! # Responsibility
//! - Serve holiday lists per year, fetching lazily through the primary
//!   provider and substituting the fallback provider on failure.
//!
//! # Invariants
//! - For a given year, providers are consulted at most once per process
//!   lifetime; all later lookups are served from cache, including cached
//!   fallback results.
//! - Provider failures never cross the cache boundary; fallback data is an
//!   equally valid answer.
//! - Entries are never evicted. Unbounded growth is accepted for a process
//!   with a human-scale lifetime.

use crate::model::holiday::Holiday;
use crate::provider::HolidayProvider;
use log::{error, warn};
use std::collections::HashMap;

/// Per-year cache wrapping a primary and a fallback holiday provider.
pub struct HolidayCache<P, F> {
    primary: P,
    fallback: F,
    fetched_years: HashMap<i32, Vec<Holiday>>,
    fallback_hits: u64,
}

impl<P, F> HolidayCache<P, F>
where
    P: HolidayProvider,
    F: HolidayProvider,
{
    /// Creates an empty cache over the given providers.
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            fetched_years: HashMap::new(),
            fallback_hits: 0,
        }
    }

    /// Returns the holiday list for `year`, fetching it on first use.
    ///
    /// On primary failure the fallback result is stored and returned; when
    /// both providers fail an empty list is stored so the at-most-once fetch
    /// policy still holds.
    pub fn holidays_for(&mut self, year: i32) -> &[Holiday] {
        if !self.fetched_years.contains_key(&year) {
            let holidays = self.fetch_with_fallback(year);
            self.fetched_years.insert(year, holidays);
        }
        self.fetched_years
            .get(&year)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether `year` has already been resolved into the cache.
    pub fn is_cached(&self, year: i32) -> bool {
        self.fetched_years.contains_key(&year)
    }

    /// Number of years served through the fallback path so far.
    ///
    /// Observability hook: persistent upstream failures show up here without
    /// changing the never-error lookup contract.
    pub fn fallback_hits(&self) -> u64 {
        self.fallback_hits
    }

    fn fetch_with_fallback(&mut self, year: i32) -> Vec<Holiday> {
        match self.primary.fetch(year) {
            Ok(holidays) => holidays,
            Err(err) => {
                self.fallback_hits += 1;
                warn!(
                    "event=holiday_fallback module=cache status=substituted year={year} error={err}"
                );
                match self.fallback.fetch(year) {
                    Ok(holidays) => holidays,
                    Err(fallback_err) => {
                        error!(
                            "event=holiday_fallback module=cache status=error year={year} error={fallback_err}"
                        );
                        Vec::new()
                    }
                }
            }
        }
    }
}
