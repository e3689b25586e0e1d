//! Conversion: ZoneResponse → Zone (TryFrom + validation).

use super::wire;
use super::{Coords, ValidationError, Zone};

impl TryFrom<wire::ZoneResponse> for Zone {
    type Error = ValidationError;

    fn try_from(source: wire::ZoneResponse) -> Result<Self, Self::Error> {
        if source.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.trim().is_empty() {
            return Err(ValidationError::MissingName(source.id));
        }

        // Coordinates only count when both halves arrived.
        let coords = match (source.lat, source.lon) {
            (Some(lat), Some(lon)) => Some(Coords { lat, lon }),
            _ => None,
        };

        Ok(Zone {
            id: source.id.into(),
            name: source.name,
            provider: source.provider,
            coords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_response() -> wire::ZoneResponse {
        wire::ZoneResponse {
            id: "srinagar_lal_chowk".to_string(),
            name: "Lal Chowk, Srinagar".to_string(),
            provider: Some("OpenAQ".to_string()),
            lat: Some(34.07),
            lon: Some(74.80),
        }
    }

    #[test]
    fn test_zone_converts() {
        let zone = Zone::try_from(zone_response()).unwrap();
        assert_eq!(zone.id.as_str(), "srinagar_lal_chowk");
        assert_eq!(zone.coords.unwrap().lat, 34.07);
    }

    #[test]
    fn test_zone_empty_id_fails() {
        let mut resp = zone_response();
        resp.id = "  ".to_string();
        assert!(matches!(
            Zone::try_from(resp),
            Err(ValidationError::MissingId)
        ));
    }

    #[test]
    fn test_zone_empty_name_fails() {
        let mut resp = zone_response();
        resp.name = String::new();
        let err = Zone::try_from(resp).unwrap_err();
        assert!(format!("{err}").contains("srinagar_lal_chowk"));
    }

    #[test]
    fn test_zone_partial_coords_dropped() {
        let mut resp = zone_response();
        resp.lon = None;
        let zone = Zone::try_from(resp).unwrap();
        assert!(zone.coords.is_none());
    }

    #[test]
    fn test_zone_matches_query() {
        let zone = Zone::try_from(zone_response()).unwrap();
        assert!(zone.matches_query("lal chowk"));
        assert!(zone.matches_query(""));
        assert!(!zone.matches_query("delhi"));
    }
}
