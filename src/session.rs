//! Per-session dashboard state holder.
//!
//! A `DashboardSession` wires the high-level client, the preference store,
//! and a [`DashboardState`] together for the lifetime of one dashboard
//! view. Construct one per view and clone it into whatever loop drives
//! refreshes — there is no process-wide instance.

use crate::client::BreatheClient;
use crate::domain::dashboard::DashboardState;
use crate::error::SdkError;
use crate::shared::{AqiScale, ZoneId};
use crate::store::{PreferenceStore, Snapshot};

use async_lock::RwLock;
use std::sync::Arc;

/// State holder for one dashboard view.
///
/// Cloning shares the underlying state, store, and client caches.
#[derive(Clone)]
pub struct DashboardSession {
    client: BreatheClient,
    store: Arc<PreferenceStore>,
    state: Arc<RwLock<DashboardState>>,
    scale: Arc<RwLock<AqiScale>>,
}

impl DashboardSession {
    pub fn new(client: BreatheClient, store: PreferenceStore) -> Self {
        Self {
            client,
            store: Arc::new(store),
            state: Arc::new(RwLock::new(DashboardState::new())),
            scale: Arc::new(RwLock::new(AqiScale::default())),
        }
    }

    /// Bring the session up: load preferences and the offline snapshot so
    /// the dashboard can render immediately, then run a foreground refresh.
    ///
    /// A refresh failure is recorded in the state (the snapshot stays
    /// visible) and returned.
    pub async fn init(&self) -> Result<(), SdkError> {
        *self.scale.write().await = self.store.scale()?;
        let pinned = self.store.pinned_ids()?;

        {
            let mut state = self.state.write().await;
            state.set_pinned(pinned);
            if let Some(snapshot) = self.store.load_snapshot()? {
                tracing::debug!(
                    zones = snapshot.zones.len(),
                    readings = snapshot.readings.len(),
                    "restored dashboard snapshot"
                );
                state.apply_snapshot(snapshot.zones, snapshot.readings);
            }
        }

        self.refresh(false).await
    }

    /// Run one refresh cycle.
    ///
    /// Pinned zones are fetched and published first so the dashboard's
    /// primary content lands before the long tail. Foreground refreshes
    /// (`auto = false`) drive the loading/error flags; auto refreshes leave
    /// the visible state untouched on failure.
    pub async fn refresh(&self, auto: bool) -> Result<(), SdkError> {
        if !auto {
            self.state.write().await.begin_refresh();
        }

        // Re-read pins each cycle — another session (or the widget process)
        // may have written the store since the last one.
        let pinned = self.store.pinned_ids()?;

        let zones = match self.client.zones().list().await {
            Ok(zones) => zones,
            Err(e) => {
                if !auto {
                    self.state.write().await.fail(e.to_string());
                } else {
                    tracing::debug!(error = %e, "auto refresh failed");
                }
                return Err(e);
            }
        };

        {
            let mut state = self.state.write().await;
            state.set_pinned(pinned.clone());
            state.apply_zones(zones.clone());
        }

        let (pinned_ids, unpinned_ids): (Vec<ZoneId>, Vec<ZoneId>) = zones
            .iter()
            .map(|z| z.id.clone())
            .partition(|id| pinned.contains(id));

        let pinned_readings = self.client.aqi().get_many(&pinned_ids).await;
        self.state
            .write()
            .await
            .apply_readings(pinned_readings.clone());

        let all_readings = if unpinned_ids.is_empty() {
            pinned_readings
        } else {
            let mut all = pinned_readings;
            all.extend(self.client.aqi().get_many(&unpinned_ids).await);
            self.state.write().await.apply_readings(all.clone());
            all
        };

        // Snapshot persistence is best-effort; a full refresh already
        // succeeded from the caller's point of view.
        let snapshot = Snapshot {
            zones,
            readings: all_readings,
        };
        if let Err(e) = self.store.save_snapshot(&snapshot) {
            tracing::warn!(error = %e, "failed to persist dashboard snapshot");
        }

        Ok(())
    }

    // ── Pins ─────────────────────────────────────────────────────────────

    /// Flip a zone's pinned state in the store and the live state.
    /// Returns the new state (`true` = now pinned).
    pub async fn toggle_pin(&self, zone_id: &ZoneId) -> Result<bool, SdkError> {
        let now_pinned = self.store.toggle_pin(zone_id)?;
        let pinned = self.store.pinned_ids()?;
        self.state.write().await.set_pinned(pinned);
        Ok(now_pinned)
    }

    // ── Scale ────────────────────────────────────────────────────────────

    pub async fn scale(&self) -> AqiScale {
        *self.scale.read().await
    }

    /// Switch between the national and US index, persisting the choice.
    /// Returns the new scale.
    pub async fn toggle_scale(&self) -> Result<AqiScale, SdkError> {
        let mut scale = self.scale.write().await;
        let next = scale.toggled();
        self.store.set_scale(next)?;
        *scale = next;
        Ok(next)
    }

    // ── Views ────────────────────────────────────────────────────────────

    /// A point-in-time copy of the dashboard state for rendering.
    pub async fn state(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Trend delta for one zone's current reading under the session scale,
    /// or `None` when the zone has no reading or no usable history sample.
    pub async fn one_hour_change(&self, zone_id: &ZoneId) -> Option<i32> {
        let scale = *self.scale.read().await;
        let state = self.state.read().await;
        state.reading(zone_id)?.one_hour_change(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aqi::AqiReading;
    use crate::domain::zone::Zone;
    use tempfile::TempDir;

    fn session() -> (TempDir, DashboardSession) {
        let tmp = TempDir::new().unwrap();
        // Unroutable port — network-touching paths fail fast in tests.
        let client = BreatheClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
        (tmp, DashboardSession::new(client, store))
    }

    fn reading(zone_id: &str, aqi: i32, history: Vec<crate::domain::aqi::HistorySample>) -> AqiReading {
        AqiReading {
            zone_id: ZoneId::from(zone_id),
            zone_name: zone_id.to_string(),
            aqi,
            us_aqi: None,
            main_pollutant: "pm2_5".to_string(),
            breakdown: Default::default(),
            concentrations: Default::default(),
            observed_at: None,
            history,
        }
    }

    #[tokio::test]
    async fn test_toggle_pin_updates_store_and_state() {
        let (_tmp, session) = session();
        let id = ZoneId::from("srinagar_lal_chowk");

        assert!(session.toggle_pin(&id).await.unwrap());
        assert!(session.state().await.is_pinned(&id));

        assert!(!session.toggle_pin(&id).await.unwrap());
        assert!(!session.state().await.is_pinned(&id));
    }

    #[tokio::test]
    async fn test_toggle_scale_persists() {
        let (tmp, session) = session();
        assert_eq!(session.scale().await, AqiScale::National);
        assert_eq!(session.toggle_scale().await.unwrap(), AqiScale::Us);

        // A fresh session over the same store dir sees the setting.
        let client = BreatheClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
        let fresh = DashboardSession::new(client, store);
        fresh.init().await.ok(); // refresh fails offline; prefs still load
        assert_eq!(fresh.scale().await, AqiScale::Us);
    }

    #[tokio::test]
    async fn test_init_restores_snapshot_when_offline() {
        let (tmp, session) = session();

        let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
        store
            .save_snapshot(&Snapshot {
                zones: vec![Zone {
                    id: ZoneId::from("a"),
                    name: "Zone A".to_string(),
                    provider: None,
                    coords: None,
                }],
                readings: vec![reading("a", 95, vec![])],
            })
            .unwrap();

        // The refresh itself fails (no server), but the snapshot must be
        // visible and the failure recorded.
        assert!(session.init().await.is_err());
        let state = session.state().await;
        assert_eq!(state.zones().len(), 1);
        assert_eq!(state.reading(&ZoneId::from("a")).unwrap().aqi, 95);
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn test_one_hour_change_reads_session_scale() {
        use crate::domain::aqi::HistorySample;
        let (_tmp, session) = session();

        let now = chrono::Utc::now().timestamp();
        let history = vec![HistorySample {
            ts: now - 3600,
            aqi: 80,
            us_aqi: Some(90),
        }];
        session
            .state
            .write()
            .await
            .apply_readings(vec![reading("a", 100, history)]);

        assert_eq!(
            session.one_hour_change(&ZoneId::from("a")).await,
            Some(20)
        );
        session.toggle_scale().await.unwrap();
        // Us scale: reading has no us_aqi (falls back to 100), sample has 90.
        assert_eq!(
            session.one_hour_change(&ZoneId::from("a")).await,
            Some(10)
        );
        assert_eq!(session.one_hour_change(&ZoneId::from("missing")).await, None);
    }
}
