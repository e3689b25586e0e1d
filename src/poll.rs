//! Cancellable periodic refresh task.

use crate::session::DashboardSession;

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// How often dashboards auto-refresh unless told otherwise.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to a background auto-refresh loop.
///
/// The loop runs [`DashboardSession::refresh`] as an auto refresh on a
/// fixed interval until [`stop`](Self::stop) is called. Dropping the handle
/// aborts the task without waiting for it.
pub struct AutoRefresh {
    handle: Option<JoinHandle<()>>,
    stop_tx: watch::Sender<bool>,
}

impl AutoRefresh {
    /// Spawn the refresh loop on the current tokio runtime.
    ///
    /// The first refresh fires one full `interval` after spawning — session
    /// setup already ran a foreground refresh.
    pub fn spawn(session: DashboardSession, interval: Duration) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker.reset(); // skip immediate first tick

            loop {
                tokio::select! {
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        tracing::debug!("auto refresh tick");
                        // Failures are already logged by the session; the
                        // loop keeps going and tries again next tick.
                        let _ = session.refresh(true).await;
                    }
                }
            }
        });

        Self {
            handle: Some(handle),
            stop_tx,
        }
    }

    /// Spawn with [`DEFAULT_REFRESH_INTERVAL`].
    pub fn spawn_default(session: DashboardSession) -> Self {
        Self::spawn(session, DEFAULT_REFRESH_INTERVAL)
    }

    /// Whether the loop is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the loop to stop and wait for it to wind down.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
