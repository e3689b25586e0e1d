//! Wire types for AQI responses (REST).

use super::HistorySample;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw AQI reading from the REST API.
///
/// `history` and the pollutant maps are frequently omitted by providers
/// that only report a headline value, so everything beyond the identity
/// fields and the national index is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AqiResponse {
    pub zone_id: String,
    pub zone_name: String,
    /// National index value.
    pub aqi: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_aqi: Option<i32>,
    pub main_pollutant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aqi_breakdown: Option<HashMap<String, i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentrations_us_units: Option<HashMap<String, f64>>,
    /// Observation time as fractional unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_unix: Option<f64>,
    /// Human-readable observation time, provider-formatted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistorySample>>,
}
