//! Trend calculation — signed AQI change over roughly the last hour.

use super::HistorySample;
use crate::shared::AqiScale;
use chrono::Utc;

/// How far back the comparison sample should sit.
const LOOKBACK_SECS: i64 = 3600;

/// How far a sample may deviate from the lookback target and still count.
const TOLERANCE_SECS: i64 = 1800;

/// Signed AQI change versus roughly one hour ago, against the wall clock.
///
/// Delegates to [`one_hour_change_at`] with the current time; see there for
/// the selection rules. Callers that need a deterministic result (tests,
/// replay) should use [`one_hour_change_at`] directly.
pub fn one_hour_change(
    history: Option<&[HistorySample]>,
    current: i32,
    scale: AqiScale,
) -> Option<i32> {
    one_hour_change_at(history, current, scale, Utc::now().timestamp())
}

/// Signed AQI change versus roughly one hour before `now_secs`.
///
/// Scans `history` (order-independent) for the sample closest to
/// `now_secs - 3600`, accepting only samples within ±1800 s of that target
/// (boundary inclusive). Returns `current - past`, reading the past value
/// under `scale` (`Us` falls back to the national value when the sample has
/// no US value). Returns `None` when the history is absent, empty, or holds
/// no sample within tolerance — never an error.
pub fn one_hour_change_at(
    history: Option<&[HistorySample]>,
    current: i32,
    scale: AqiScale,
    now_secs: i64,
) -> Option<i32> {
    let history = history?;
    if history.is_empty() {
        return None;
    }

    let target = now_secs - LOOKBACK_SECS;

    let mut best: Option<&HistorySample> = None;
    let mut best_dist = i64::MAX;

    for sample in history {
        let dist = (sample.ts - target).abs();
        // Strict `<` keeps the first of two equidistant samples.
        if dist <= TOLERANCE_SECS && dist < best_dist {
            best_dist = dist;
            best = Some(sample);
        }
    }

    best.map(|sample| current - sample.value(scale))
}
