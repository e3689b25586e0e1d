//! AQI sub-client — per-zone readings, concurrent fan-out.

use crate::client::BreatheClient;
use crate::domain::aqi::AqiReading;
use crate::error::SdkError;
use crate::shared::ZoneId;
use futures_util::future::join_all;

/// Sub-client for AQI reading operations.
pub struct Aqi<'a> {
    pub(crate) client: &'a BreatheClient,
}

impl<'a> Aqi<'a> {
    /// Fetch the current reading (with history) for one zone.
    pub async fn get(&self, zone_id: &ZoneId) -> Result<AqiReading, SdkError> {
        let resp = self.client.http.get_zone_aqi(zone_id.as_str()).await?;
        resp.try_into()
            .map_err(|e: super::ValidationError| SdkError::Validation(e.to_string()))
    }

    /// Fetch readings for many zones concurrently.
    ///
    /// Zones whose fetch or validation fails are dropped from the result so
    /// one flaky provider cannot take down a whole dashboard refresh. The
    /// output preserves the input order of the zones that succeeded.
    pub async fn get_many(&self, zone_ids: &[ZoneId]) -> Vec<AqiReading> {
        let fetches = zone_ids.iter().map(|id| async move {
            match self.get(id).await {
                Ok(reading) => Some(reading),
                Err(e) => {
                    tracing::warn!(zone = %id, error = %e, "dropping failed zone fetch");
                    None
                }
            }
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}
