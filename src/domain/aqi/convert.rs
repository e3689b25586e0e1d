//! Conversion: AqiResponse → AqiReading (TryFrom + validation).

use super::wire;
use super::{AqiReading, ValidationError};
use chrono::DateTime;

impl TryFrom<wire::AqiResponse> for AqiReading {
    type Error = ValidationError;

    fn try_from(source: wire::AqiResponse) -> Result<Self, Self::Error> {
        if source.zone_id.trim().is_empty() {
            return Err(ValidationError::MissingZoneId);
        }
        if source.zone_name.trim().is_empty() {
            return Err(ValidationError::MissingZoneName(source.zone_id));
        }

        // Sub-second precision is noise at observation granularity.
        let observed_at = source
            .timestamp_unix
            .and_then(|secs| DateTime::from_timestamp(secs as i64, 0));

        Ok(AqiReading {
            zone_id: source.zone_id.into(),
            zone_name: source.zone_name,
            aqi: source.aqi,
            us_aqi: source.us_aqi,
            main_pollutant: source.main_pollutant,
            breakdown: source.aqi_breakdown.unwrap_or_default(),
            concentrations: source.concentrations_us_units.unwrap_or_default(),
            observed_at,
            history: source.history.unwrap_or_default(),
        })
    }
}
