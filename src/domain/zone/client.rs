//! Zones sub-client — list, cache.

use crate::client::BreatheClient;
use crate::domain::zone::Zone;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for zone operations.
pub struct Zones<'a> {
    pub(crate) client: &'a BreatheClient,
}

impl<'a> Zones<'a> {
    /// List all monitored zones. Uses TTL cache.
    ///
    /// Zones the backend sends with a missing id or name are skipped rather
    /// than failing the whole listing.
    pub async fn list(&self) -> Result<Vec<Zone>, SdkError> {
        {
            let cache = self.client.zone_cache.read().await;
            if let Some((zones, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.zone_cache_ttl {
                    tracing::debug!(count = zones.len(), "zone list cache hit");
                    return Ok(zones.clone());
                }
            }
        }

        let resp = self.client.http.get_zones().await?;
        let mut zones = Vec::with_capacity(resp.zones.len());
        for zr in resp.zones {
            match Zone::try_from(zr) {
                Ok(zone) => zones.push(zone),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed zone");
                }
            }
        }

        *self.client.zone_cache.write().await = Some((zones.clone(), Instant::now()));
        Ok(zones)
    }

    /// Drop the cached zone list, forcing the next `list()` to refetch.
    pub async fn invalidate(&self) {
        *self.client.zone_cache.write().await = None;
    }
}
