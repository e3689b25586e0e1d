//! Dashboard state container — app-owned, SDK-provided update logic.

use crate::domain::aqi::AqiReading;
use crate::domain::zone::Zone;
use crate::shared::ZoneId;
use std::collections::BTreeSet;

/// Aggregate state behind one dashboard view.
///
/// The app owns instances of this type (one per session — never a global).
/// The SDK provides update methods; `DashboardSession` drives them during
/// refresh cycles.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// A foreground refresh is in flight.
    pub loading: bool,
    /// Last foreground refresh failure, cleared on the next attempt.
    pub error: Option<String>,
    zones: Vec<Zone>,
    readings: Vec<AqiReading>,
    pinned_ids: BTreeSet<ZoneId>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Refresh lifecycle ────────────────────────────────────────────────

    /// Mark a foreground refresh as started.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a foreground refresh failure. Existing data stays visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Replace the zone list.
    pub fn apply_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
    }

    /// Replace the readings and clear the loading flag.
    ///
    /// Called twice per refresh: once with the pinned zones' readings (so
    /// the dashboard's primary content lands early) and again with the
    /// complete set.
    pub fn apply_readings(&mut self, readings: Vec<AqiReading>) {
        self.loading = false;
        self.readings = readings;
    }

    /// Restore zones + readings from a persisted snapshot.
    pub fn apply_snapshot(&mut self, zones: Vec<Zone>, readings: Vec<AqiReading>) {
        self.loading = false;
        self.zones = zones;
        self.readings = readings;
    }

    // ── Pins ─────────────────────────────────────────────────────────────

    /// Replace the pinned-zone set (loaded from, or written through, the
    /// preference store).
    pub fn set_pinned(&mut self, pinned_ids: BTreeSet<ZoneId>) {
        self.pinned_ids = pinned_ids;
    }

    pub fn pinned_ids(&self) -> &BTreeSet<ZoneId> {
        &self.pinned_ids
    }

    pub fn is_pinned(&self, zone_id: &ZoneId) -> bool {
        self.pinned_ids.contains(zone_id)
    }

    // ── Views ────────────────────────────────────────────────────────────

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn readings(&self) -> &[AqiReading] {
        &self.readings
    }

    /// Readings for pinned zones, in reading order.
    pub fn pinned_readings(&self) -> Vec<&AqiReading> {
        self.readings
            .iter()
            .filter(|r| self.pinned_ids.contains(&r.zone_id))
            .collect()
    }

    /// The reading for one zone, if fetched.
    pub fn reading(&self, zone_id: &ZoneId) -> Option<&AqiReading> {
        self.readings.iter().find(|r| &r.zone_id == zone_id)
    }

    /// Zones whose name matches `query`, case-insensitively. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Zone> {
        self.zones
            .iter()
            .filter(|z| z.matches_query(query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: ZoneId::from(id),
            name: name.to_string(),
            provider: None,
            coords: None,
        }
    }

    fn reading(zone_id: &str, aqi: i32) -> AqiReading {
        AqiReading {
            zone_id: ZoneId::from(zone_id),
            zone_name: zone_id.to_string(),
            aqi,
            us_aqi: None,
            main_pollutant: "pm2_5".to_string(),
            breakdown: Default::default(),
            concentrations: Default::default(),
            observed_at: None,
            history: vec![],
        }
    }

    #[test]
    fn test_refresh_lifecycle_flags() {
        let mut state = DashboardState::new();
        state.begin_refresh();
        assert!(state.loading);
        assert!(state.error.is_none());

        state.apply_readings(vec![reading("a", 100)]);
        assert!(!state.loading);
        assert_eq!(state.readings().len(), 1);
    }

    #[test]
    fn test_fail_keeps_existing_data() {
        let mut state = DashboardState::new();
        state.apply_readings(vec![reading("a", 100)]);
        state.begin_refresh();
        state.fail("network unreachable");
        assert_eq!(state.error.as_deref(), Some("network unreachable"));
        assert_eq!(state.readings().len(), 1);
    }

    #[test]
    fn test_pinned_readings_follow_pin_set() {
        let mut state = DashboardState::new();
        state.apply_readings(vec![reading("a", 90), reading("b", 180)]);
        state.set_pinned(BTreeSet::from([ZoneId::from("b")]));

        let pinned = state.pinned_readings();
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].zone_id.as_str(), "b");
        assert!(state.is_pinned(&ZoneId::from("b")));
        assert!(!state.is_pinned(&ZoneId::from("a")));
    }

    #[test]
    fn test_apply_snapshot_replaces_everything() {
        let mut state = DashboardState::new();
        state.loading = true;
        state.apply_snapshot(vec![zone("a", "Zone A")], vec![reading("a", 70)]);
        assert!(!state.loading);
        assert_eq!(state.zones().len(), 1);
        assert_eq!(state.reading(&ZoneId::from("a")).unwrap().aqi, 70);
    }

    #[test]
    fn test_search_filters_by_name() {
        let mut state = DashboardState::new();
        state.apply_zones(vec![
            zone("a", "Lal Chowk, Srinagar"),
            zone("b", "Anand Vihar, Delhi"),
        ]);
        let hits = state.search("delhi");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "b");
        assert_eq!(state.search("").len(), 2);
    }
}
