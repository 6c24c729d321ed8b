//! SessionSweeper - background eviction of idle sessions.
//!
//! Runs `SessionRegistry::evict_expired` on a fixed interval until the
//! shutdown signal flips to `true`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::ports::SessionRegistry;

/// Periodic sweeper over a session registry.
pub struct SessionSweeper {
    registry: Arc<dyn SessionRegistry>,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(registry: Arc<dyn SessionRegistry>, interval: Duration) -> Self {
        Self { registry, interval }
    }

    /// Run the sweep loop until shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Session sweeper stopping");
                        return;
                    }
                }
                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }

    /// Run exactly one sweep. Returns the number of evicted sessions.
    pub async fn sweep_once(&self) -> usize {
        self.registry.evict_expired().await
    }
}

/// Spawns a sweeper task on the current runtime.
pub fn spawn_sweeper(
    registry: Arc<dyn SessionRegistry>,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let sweeper = SessionSweeper::new(registry, interval);
    tokio::spawn(async move { sweeper.run(shutdown).await })
}
