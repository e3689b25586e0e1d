//! # Breathe SDK
//!
//! A Rust SDK for the Breathe air-quality service: zone listing, per-zone
//! AQI readings with history, one-hour trend deltas, and dashboard sessions
//! with pinned zones and auto-refresh.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, trend calculator (always available)
//! 2. **Store** — Durable preferences + offline snapshots (JSON files)
//! 3. **HTTP API** — `BreatheHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `BreatheClient` with nested sub-clients and caching
//! 5. **Session** — `DashboardSession` state holder + `AutoRefresh` polling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use breathe_sdk::prelude::*;
//!
//! let client = BreatheClient::builder()
//!     .base_url("https://api.breathe.sidharthify.dev")
//!     .build()?;
//!
//! let zones = client.zones().list().await?;
//! let reading = client.aqi().get(&zones[0].id).await?;
//! let delta = one_hour_change(Some(&reading.history), reading.aqi, AqiScale::National);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Store ───────────────────────────────────────────────────────────

/// Durable preference + snapshot storage.
pub mod store;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BreatheClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Session + Polling ───────────────────────────────────────────────

/// Per-session dashboard state holder.
#[cfg(feature = "http")]
pub mod session;

/// Cancellable periodic refresh task.
#[cfg(feature = "http")]
pub mod poll;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AqiCategory, AqiScale, ZoneId};

    // Domain types — zone
    pub use crate::domain::zone::Zone;

    // Domain types — aqi (readings, history, trend)
    pub use crate::domain::aqi::trend::{one_hour_change, one_hour_change_at};
    pub use crate::domain::aqi::{AqiReading, HistorySample};

    // State containers
    pub use crate::domain::dashboard::DashboardState;

    // Store
    pub use crate::store::{PreferenceStore, Snapshot};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AqiClient, BreatheClient, BreatheClientBuilder, ZonesClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Session + polling
    #[cfg(feature = "http")]
    pub use crate::poll::AutoRefresh;
    #[cfg(feature = "http")]
    pub use crate::session::DashboardSession;
}
