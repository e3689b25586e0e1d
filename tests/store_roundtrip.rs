//! Integration test: preference + snapshot store round trips through real
//! files, the way two app processes (dashboard and widget) share them.

use breathe_sdk::prelude::*;
use breathe_sdk::domain::zone::Coords;
use breathe_sdk::shared::ZoneId;
use std::collections::HashMap;
use tempfile::TempDir;

fn sample_snapshot() -> Snapshot {
    let history = vec![
        HistorySample {
            ts: 1_722_942_000,
            aqi: 120,
            us_aqi: Some(104),
        },
        HistorySample {
            ts: 1_722_938_400,
            aqi: 110,
            us_aqi: None,
        },
    ];

    Snapshot {
        zones: vec![Zone {
            id: ZoneId::from("srinagar_lal_chowk"),
            name: "Lal Chowk, Srinagar".to_string(),
            provider: Some("OpenAQ".to_string()),
            coords: Some(Coords {
                lat: 34.07,
                lon: 74.80,
            }),
        }],
        readings: vec![AqiReading {
            zone_id: ZoneId::from("srinagar_lal_chowk"),
            zone_name: "Lal Chowk, Srinagar".to_string(),
            aqi: 134,
            us_aqi: Some(118),
            main_pollutant: "pm2_5".to_string(),
            breakdown: HashMap::from([("pm2_5".to_string(), 134)]),
            concentrations: HashMap::from([("pm2_5".to_string(), 48.2)]),
            observed_at: chrono::DateTime::from_timestamp(1_722_945_600, 0),
            history,
        }],
    }
}

#[test]
fn snapshot_survives_store_reopen() {
    let tmp = TempDir::new().unwrap();

    {
        let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
        store.save_snapshot(&sample_snapshot()).unwrap();
    }

    // A second store over the same directory — a different process, in
    // practice — sees everything, history samples included.
    let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let snapshot = store.load_snapshot().unwrap().expect("snapshot missing");

    assert_eq!(snapshot.zones.len(), 1);
    assert_eq!(snapshot.zones[0].provider.as_deref(), Some("OpenAQ"));

    let reading = &snapshot.readings[0];
    assert_eq!(reading.aqi, 134);
    assert_eq!(reading.us_aqi, Some(118));
    assert_eq!(reading.observed_at.unwrap().timestamp(), 1_722_945_600);
    assert_eq!(reading.history.len(), 2);
    assert_eq!(reading.history[0].us_aqi, Some(104));
    assert_eq!(reading.history[1].us_aqi, None);
}

#[test]
fn restored_history_still_yields_a_trend() {
    let tmp = TempDir::new().unwrap();
    let store = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();

    // Pin history to one hour before a fixed "now" so the delta is exact.
    let now = 1_722_945_600;
    let mut snapshot = sample_snapshot();
    snapshot.readings[0].history = vec![HistorySample {
        ts: now - 3600,
        aqi: 114,
        us_aqi: None,
    }];
    store.save_snapshot(&snapshot).unwrap();

    let restored = store.load_snapshot().unwrap().unwrap();
    let reading = &restored.readings[0];
    assert_eq!(
        one_hour_change_at(Some(&reading.history), reading.aqi, AqiScale::National, now),
        Some(20)
    );
}

#[test]
fn pins_and_scale_are_shared_across_stores() {
    let tmp = TempDir::new().unwrap();
    let writer = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();
    let reader = PreferenceStore::new(Some(tmp.path().to_path_buf())).unwrap();

    writer.toggle_pin(&ZoneId::from("a")).unwrap();
    writer.toggle_pin(&ZoneId::from("b")).unwrap();
    writer.set_scale(AqiScale::Us).unwrap();

    let pinned = reader.pinned_ids().unwrap();
    assert!(pinned.contains(&ZoneId::from("a")));
    assert!(pinned.contains(&ZoneId::from("b")));
    assert_eq!(reader.scale().unwrap(), AqiScale::Us);
}
