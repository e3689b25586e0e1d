//! Zone domain — monitored locations, validation, conversion.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::ZoneId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinates of a zone's monitoring station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lon: f64,
}

/// A validated monitored zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Upstream data provider (e.g. `"OpenAQ"`, `"OpenMeteo"`), when reported.
    pub provider: Option<String>,
    /// Present only when both latitude and longitude were reported.
    pub coords: Option<Coords>,
}

impl Zone {
    /// Case-insensitive name match, used by the dashboard search box.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    MissingId,
    MissingName(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing zone id"),
            ValidationError::MissingName(id) => write!(f, "Missing name for zone {id}"),
        }
    }
}

impl std::error::Error for ValidationError {}
