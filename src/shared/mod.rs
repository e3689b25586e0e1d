//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ZoneId ──────────────────────────────────────────────────────────────────

/// Newtype for zone identifiers (e.g. `"srinagar_lal_chowk"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ZoneId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ZoneId(s.to_string()))
    }
}

impl Serialize for ZoneId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ZoneId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ZoneId(s))
    }
}

// ─── AqiScale ────────────────────────────────────────────────────────────────

/// Which AQI index a value is expressed in.
///
/// `National` is the series' native scale (the backend's `aqi` field).
/// `Us` is the US-standardized index (`us_aqi`); readings that lack a US
/// value fall back to the national one wherever a `Us`-scale value is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AqiScale {
    #[default]
    National,
    Us,
}

impl AqiScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Us => "us",
        }
    }

    /// The other scale. Used by the units toggle in dashboard sessions.
    pub fn toggled(&self) -> Self {
        match self {
            Self::National => Self::Us,
            Self::Us => Self::National,
        }
    }
}

impl std::fmt::Display for AqiScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── AqiCategory ─────────────────────────────────────────────────────────────

/// Severity band for an AQI value.
///
/// Band names follow the national index. US-scale values map onto the same
/// six bands by their own breakpoints (101–150 `Moderate` covers the US
/// "sensitive groups" range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl AqiCategory {
    /// Classify a value under the given scale.
    pub fn for_value(value: i32, scale: AqiScale) -> Self {
        match scale {
            AqiScale::National => match value {
                i32::MIN..=50 => Self::Good,
                51..=100 => Self::Satisfactory,
                101..=200 => Self::Moderate,
                201..=300 => Self::Poor,
                301..=400 => Self::VeryPoor,
                _ => Self::Severe,
            },
            AqiScale::Us => match value {
                i32::MIN..=50 => Self::Good,
                51..=100 => Self::Satisfactory,
                101..=150 => Self::Moderate,
                151..=200 => Self::Poor,
                201..=300 => Self::VeryPoor,
                _ => Self::Severe,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Satisfactory => "Satisfactory",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
