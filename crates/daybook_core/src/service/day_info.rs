//! Day-info resolution.
//!
//! # Responsibility
//! - Map a concrete date plus the holiday cache to a derived day-info
//!   record.
//!
//! # Invariants
//! - Resolution never fails; a date with no holiday data yields the
//!   canonical not-a-holiday record.
//! - The first holiday matching a date wins; provider order is not
//!   normalized, so upstream duplicates resolve deterministically.

use crate::model::holiday::{DayInfo, Holiday};
use crate::provider::HolidayProvider;
use crate::service::holiday_cache::HolidayCache;
use chrono::{Datelike, NaiveDate};

/// Use-case service resolving day annotations through the holiday cache.
pub struct DayInfoService<P, F> {
    cache: HolidayCache<P, F>,
}

impl<P, F> DayInfoService<P, F>
where
    P: HolidayProvider,
    F: HolidayProvider,
{
    /// Creates a resolver owning the given cache.
    pub fn new(cache: HolidayCache<P, F>) -> Self {
        Self { cache }
    }

    /// Resolves the day-info record for one date.
    ///
    /// May trigger a provider fetch for the date's year on first use.
    pub fn resolve(&mut self, day: NaiveDate) -> DayInfo {
        let holidays = self.cache.holidays_for(day.year());
        assemble_day_info(day, holidays)
    }

    /// Read access to the underlying cache, for observability.
    pub fn cache(&self) -> &HolidayCache<P, F> {
        &self.cache
    }
}

/// Scans a year's holiday list and builds the annotation for `day`.
///
/// First match wins when the list contains duplicates for one date.
pub fn assemble_day_info(day: NaiveDate, holidays: &[Holiday]) -> DayInfo {
    holidays
        .iter()
        .find(|holiday| holiday.date == day)
        .map(DayInfo::from_holiday)
        .unwrap_or_else(DayInfo::not_a_holiday)
}

#[cfg(test)]
mod tests {
    use super::assemble_day_info;
    use crate::model::holiday::Holiday;
    use chrono::NaiveDate;

    fn holiday(day: u32, name: &str) -> Holiday {
        Holiday {
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            name: name.to_string(),
            description: format!("{name} description"),
            category: "National holiday".to_string(),
        }
    }

    #[test]
    fn first_match_wins_for_duplicate_dates() {
        let holidays = vec![holiday(9, "Victory Day"), holiday(9, "Shadowed Entry")];
        let info = assemble_day_info(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(), &holidays);
        assert!(info.is_holiday);
        assert_eq!(info.name, "Victory Day");
    }

    #[test]
    fn no_match_yields_canonical_empty_record() {
        let holidays = vec![holiday(1, "Spring and Labour Day")];
        let info = assemble_day_info(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), &holidays);
        assert!(!info.is_holiday);
        assert!(info.name.is_empty());
        assert!(info.description.is_empty());
        assert!(info.category.is_empty());
    }
}
