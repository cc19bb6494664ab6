use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::collector::{Collector, PassReport};

/// Periodic trigger for collector passes.
///
/// The pass itself is idempotent at the store (re-derived hashes dedupe as
/// duplicates), so a missed or repeated tick is harmless.
pub struct CollectorService {
    collector: Arc<Collector>,
    interval_secs: u64,
}

impl CollectorService {
    pub fn new(collector: Arc<Collector>, interval_secs: u64) -> Self {
        Self {
            collector,
            interval_secs,
        }
    }

    /// Run collector passes on the configured interval until shutdown.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        if self.interval_secs == 0 {
            info!("Collector scheduler disabled (pass_interval_secs = 0)");
            let _ = shutdown.changed().await;
            return;
        }

        info!("Collector scheduler started: every {}s", self.interval_secs);

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        // The first tick fires immediately; skip it so startup stays quiet
        interval.tick().await;

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_ok() && *shutdown.borrow() {
                        info!("Collector scheduler received shutdown signal");
                        break;
                    }
                }

                _ = interval.tick() => {
                    debug!("Running scheduled collector pass");
                    self.collector.run_pass().await;
                }
            }
        }

        info!("Collector scheduler stopped");
    }

    /// Run a single pass immediately
    pub async fn run_now(&self) -> PassReport {
        self.collector.run_pass().await
    }
}
