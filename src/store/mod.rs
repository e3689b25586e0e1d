//! Durable preference + snapshot storage.
//!
//! Two small JSON files under a per-user directory:
//! - `prefs.json` — pinned zone ids and the AQI scale setting
//! - `snapshot.json` — last good zones + readings, so a dashboard can render
//!   immediately on start while the first refresh runs
//!
//! Missing files mean "no data yet" and are never errors. Corrupt files
//! surface as [`StoreError::Corrupt`] so callers can decide whether to
//! discard them.

use crate::domain::aqi::AqiReading;
use crate::domain::zone::Zone;
use crate::error::StoreError;
use crate::shared::{AqiScale, ZoneId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "prefs.json";
const SNAPSHOT_FILE: &str = "snapshot.json";

/// The platform-appropriate default store directory.
pub fn default_store_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("breathe-sdk")
    } else {
        PathBuf::from(".breathe-sdk")
    }
}

// ─── Persisted shapes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    pinned_ids: BTreeSet<ZoneId>,
    #[serde(default)]
    scale: AqiScale,
}

/// Last good fetch, persisted for offline start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub zones: Vec<Zone>,
    pub readings: Vec<AqiReading>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// File-backed store for user preferences and the offline snapshot.
///
/// Reads go to disk on every call — the files are tiny and sessions cache
/// what they need in [`DashboardState`](crate::domain::dashboard::DashboardState).
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// Pass `None` for the platform default; tests pass a temp dir.
    pub fn new(dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.unwrap_or_else(default_store_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ── Preferences ──────────────────────────────────────────────────────

    /// The persisted pinned-zone set, empty if never written.
    pub fn pinned_ids(&self) -> Result<BTreeSet<ZoneId>, StoreError> {
        Ok(self.load_prefs()?.pinned_ids)
    }

    /// Flip a zone's pinned state and persist. Returns the new state
    /// (`true` = now pinned).
    pub fn toggle_pin(&self, zone_id: &ZoneId) -> Result<bool, StoreError> {
        let mut prefs = self.load_prefs()?;
        let now_pinned = if prefs.pinned_ids.contains(zone_id) {
            prefs.pinned_ids.remove(zone_id);
            false
        } else {
            prefs.pinned_ids.insert(zone_id.clone());
            true
        };
        self.save_prefs(&prefs)?;
        Ok(now_pinned)
    }

    /// The persisted AQI scale setting.
    pub fn scale(&self) -> Result<AqiScale, StoreError> {
        Ok(self.load_prefs()?.scale)
    }

    pub fn set_scale(&self, scale: AqiScale) -> Result<(), StoreError> {
        let mut prefs = self.load_prefs()?;
        prefs.scale = scale;
        self.save_prefs(&prefs)
    }

    // ── Snapshot ─────────────────────────────────────────────────────────

    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        self.write_json(SNAPSHOT_FILE, snapshot)
    }

    /// The persisted snapshot, or `None` if never written.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>, StoreError> {
        self.read_json(SNAPSHOT_FILE)
    }

    // ── File plumbing ────────────────────────────────────────────────────

    fn load_prefs(&self) -> Result<Preferences, StoreError> {
        Ok(self.read_json(PREFS_FILE)?.unwrap_or_default())
    }

    fn save_prefs(&self, prefs: &Preferences) -> Result<(), StoreError> {
        self.write_json(PREFS_FILE, prefs)
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                file: file.to_string(),
                source,
            })
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        // Write-then-rename so a crash mid-write can't corrupt the old file.
        let tmp = self.dir.join(format!("{file}.tmp"));
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Corrupt {
            file: file.to_string(),
            source,
        })?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, self.dir.join(file))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PreferenceStore) {
        let tmp = TempDir::new().unwrap();
        let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
        (tmp, store)
    }

    #[test]
    fn test_defaults_when_nothing_written() {
        let (_tmp, store) = store();
        assert!(store.pinned_ids().unwrap().is_empty());
        assert_eq!(store.scale().unwrap(), AqiScale::National);
        assert!(store.load_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_toggle_pin_roundtrips() {
        let (_tmp, store) = store();
        let id = ZoneId::from("srinagar_lal_chowk");

        assert!(store.toggle_pin(&id).unwrap());
        assert!(store.pinned_ids().unwrap().contains(&id));

        assert!(!store.toggle_pin(&id).unwrap());
        assert!(store.pinned_ids().unwrap().is_empty());
    }

    #[test]
    fn test_scale_persists_independently_of_pins() {
        let (_tmp, store) = store();
        store.set_scale(AqiScale::Us).unwrap();
        store.toggle_pin(&ZoneId::from("a")).unwrap();
        assert_eq!(store.scale().unwrap(), AqiScale::Us);
    }

    #[test]
    fn test_corrupt_prefs_surface_as_error() {
        let (_tmp, store) = store();
        fs::write(store.dir().join(PREFS_FILE), b"not json").unwrap();
        assert!(matches!(
            store.pinned_ids(),
            Err(StoreError::Corrupt { .. })
        ));
    }
}
