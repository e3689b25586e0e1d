//! Wire types for zone responses (REST).

use serde::{Deserialize, Serialize};

/// Raw zone record from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// REST response for the zone listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonesResponse {
    pub zones: Vec<ZoneResponse>,
}
