//! Wire schema shared by the remote service and the offline dataset.
//!
//! # Responsibility
//! - Deserialize the holiday-service envelope and convert it into domain
//!   holidays.
//!
//! # Invariants
//! - `meta.code != 200` and invalid calendar values are malformed payloads,
//!   not partial successes.
//! - Unknown envelope fields are ignored; the consumed shape is the contract.

use crate::model::holiday::Holiday;
use crate::provider::{ProviderError, ProviderResult};
use chrono::NaiveDate;
use serde::Deserialize;

/// `meta.code` value the service uses for success.
pub const SUCCESS_CODE: i64 = 200;

/// Top-level success envelope.
#[derive(Debug, Deserialize)]
pub struct HolidayEnvelope {
    pub meta: EnvelopeMeta,
    pub response: EnvelopeResponse,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeMeta {
    pub code: i64,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeResponse {
    pub holidays: Vec<EnvelopeHoliday>,
}

/// One holiday entry as shipped on the wire.
#[derive(Debug, Deserialize)]
pub struct EnvelopeHoliday {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: String,
    pub date: EnvelopeDate,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeDate {
    pub datetime: EnvelopeDateTime,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HolidayEnvelope {
    /// Validates the envelope status and converts entries in wire order.
    pub fn into_holidays(self) -> ProviderResult<Vec<Holiday>> {
        if self.meta.code != SUCCESS_CODE {
            return Err(ProviderError::Unavailable(format!(
                "service responded with meta.code {}",
                self.meta.code
            )));
        }
        self.response
            .holidays
            .into_iter()
            .map(EnvelopeHoliday::into_holiday)
            .collect()
    }
}

impl EnvelopeHoliday {
    fn into_holiday(self) -> ProviderResult<Holiday> {
        let EnvelopeDateTime { year, month, day } = self.date.datetime;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ProviderError::Unavailable(format!(
                "payload contains invalid calendar date {year}-{month}-{day}"
            ))
        })?;
        Ok(Holiday {
            date,
            name: self.name,
            description: self.description,
            category: self.category,
        })
    }
}
