//! High-level client — `BreatheClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::aqi::client::Aqi;
use crate::domain::zone::client::Zones;
use crate::domain::zone::Zone;
use crate::error::SdkError;
use crate::http::BreatheHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::aqi::client::Aqi as AqiClient;
pub use crate::domain::zone::client::Zones as ZonesClient;

/// The primary entry point for the Breathe SDK.
///
/// Provides nested sub-client accessors: `client.zones()`, `client.aqi()`.
///
/// Dashboard sessions are intentionally not embedded here — their lifetime
/// is managed by the application (one per dashboard view), so they live in
/// [`crate::session::DashboardSession`] and borrow a clone of this client.
pub struct BreatheClient {
    pub(crate) http: BreatheHttp,
    /// Zone list cache: (zones, fetched_at). The listing endpoint returns
    /// every zone, so one entry covers the whole cache.
    pub(crate) zone_cache: Arc<RwLock<Option<(Vec<Zone>, Instant)>>>,
    pub(crate) zone_cache_ttl: Duration,
}

impl BreatheClient {
    pub fn builder() -> BreatheClientBuilder {
        BreatheClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn zones(&self) -> Zones<'_> {
        Zones { client: self }
    }

    pub fn aqi(&self) -> Aqi<'_> {
        Aqi { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_caches(&self) {
        *self.zone_cache.write().await = None;
    }
}

impl Clone for BreatheClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            zone_cache: self.zone_cache.clone(),
            zone_cache_ttl: self.zone_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BreatheClientBuilder {
    base_url: String,
    zone_cache_ttl: Duration,
}

impl Default for BreatheClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            zone_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl BreatheClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn zone_cache_ttl(mut self, ttl: Duration) -> Self {
        self.zone_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<BreatheClient, SdkError> {
        Ok(BreatheClient {
            http: BreatheHttp::new(&self.base_url),
            zone_cache: Arc::new(RwLock::new(None)),
            zone_cache_ttl: self.zone_cache_ttl,
        })
    }
}
