//! Remote holiday provider backed by the Calendarific HTTP service.
//!
//! # Responsibility
//! - Issue the blocking per-year holidays request and decode the envelope.
//!
//! # Invariants
//! - Requests carry an explicit timeout; the engine never blocks forever.
//! - The API key is part of the request URL and must never reach log output.

use crate::config::EngineConfig;
use crate::model::holiday::Holiday;
use crate::provider::envelope::HolidayEnvelope;
use crate::provider::{HolidayProvider, ProviderError, ProviderResult};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Remote implementation of the holiday provider capability.
pub struct CalendarificProvider {
    base_url: String,
    api_key: String,
    country: String,
    client: reqwest::blocking::Client,
}

impl CalendarificProvider {
    /// Builds the provider from explicit engine configuration.
    pub fn try_new(config: &EngineConfig) -> ProviderResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            country: config.country.clone(),
            client,
        })
    }

    fn request_url(&self, year: i32) -> String {
        format!(
            "{}/holidays?api_key={}&country={}&year={}",
            self.base_url, self.api_key, self.country, year
        )
    }
}

impl HolidayProvider for CalendarificProvider {
    fn fetch(&self, year: i32) -> ProviderResult<Vec<Holiday>> {
        let started_at = Instant::now();
        debug!(
            "event=holiday_fetch module=provider provider=calendarific status=start country={} year={}",
            self.country, year
        );

        let response = self.client.get(self.request_url(year)).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(
                "event=holiday_fetch module=provider provider=calendarific status=error year={} duration_ms={} http_status={}",
                year,
                started_at.elapsed().as_millis(),
                status.as_u16()
            );
            return Err(ProviderError::Unavailable(format!(
                "service returned HTTP status {status}"
            )));
        }

        let envelope: HolidayEnvelope = response.json()?;
        let holidays = envelope.into_holidays()?;
        info!(
            "event=holiday_fetch module=provider provider=calendarific status=ok year={} duration_ms={} count={}",
            year,
            started_at.elapsed().as_millis(),
            holidays.len()
        );
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::CalendarificProvider;
    use crate::config::EngineConfig;
    use std::path::PathBuf;

    fn config() -> EngineConfig {
        EngineConfig {
            api_key: "secret-key".to_string(),
            country: "RU".to_string(),
            default_holidays_path: PathBuf::from("data/default_holidays.json"),
            schema_path: PathBuf::from("data/notes_schema.sql"),
            base_url: "https://calendarific.com/api/v2/".to_string(),
            request_timeout_secs: 10,
        }
    }

    #[test]
    fn request_url_carries_key_country_and_year() {
        let provider = CalendarificProvider::try_new(&config()).unwrap();
        let url = provider.request_url(2024);
        assert_eq!(
            url,
            "https://calendarific.com/api/v2/holidays?api_key=secret-key&country=RU&year=2024"
        );
    }
}
