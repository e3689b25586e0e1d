//! AQI domain — readings, history samples, trend calculation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod trend;
pub mod wire;

use crate::shared::{AqiCategory, AqiScale, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One observation in a zone's AQI time series.
///
/// `us_aqi` is present only when the source reported a US-standardized
/// value alongside the national one. The series carries no ordering or
/// uniqueness guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Unix timestamp in seconds.
    pub ts: i64,
    /// AQI under the national index.
    pub aqi: i32,
    /// AQI under the US index, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_aqi: Option<i32>,
}

impl HistorySample {
    /// Value under the given scale. `Us` falls back to the national value
    /// when no US value was reported.
    pub fn value(&self, scale: AqiScale) -> i32 {
        match scale {
            AqiScale::National => self.aqi,
            AqiScale::Us => self.us_aqi.unwrap_or(self.aqi),
        }
    }
}

/// A validated AQI reading for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    pub zone_id: ZoneId,
    pub zone_name: String,
    /// Current AQI under the national index.
    pub aqi: i32,
    /// Current AQI under the US index, when reported.
    pub us_aqi: Option<i32>,
    /// Dominant pollutant key (e.g. `"pm2_5"`).
    pub main_pollutant: String,
    /// Per-pollutant sub-indices, when reported.
    pub breakdown: HashMap<String, i32>,
    /// Per-pollutant concentrations in US units (µg/m³ or ppm), when reported.
    pub concentrations: HashMap<String, f64>,
    /// When the backend observed this reading.
    pub observed_at: Option<DateTime<Utc>>,
    /// Recent observations, unordered.
    pub history: Vec<HistorySample>,
}

impl AqiReading {
    /// Current value under the given scale (`Us` falls back to national).
    pub fn value(&self, scale: AqiScale) -> i32 {
        match scale {
            AqiScale::National => self.aqi,
            AqiScale::Us => self.us_aqi.unwrap_or(self.aqi),
        }
    }

    /// Severity band of the current value under the given scale.
    pub fn category(&self, scale: AqiScale) -> AqiCategory {
        AqiCategory::for_value(self.value(scale), scale)
    }

    /// Signed change versus roughly one hour ago, if the history holds a
    /// usable sample. See [`trend::one_hour_change`].
    pub fn one_hour_change(&self, scale: AqiScale) -> Option<i32> {
        trend::one_hour_change(Some(&self.history), self.value(scale), scale)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    MissingZoneId,
    MissingZoneName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingZoneId => write!(f, "Missing zone id"),
            ValidationError::MissingZoneName(id) => {
                write!(f, "Missing zone name for reading {id}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
