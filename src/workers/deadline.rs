use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time;

use crate::models::deadline::{refresh_deadlines, DeadlineEntry};
use crate::utils::clock::Clock;

pub const DEADLINE_TICK_SECONDS: u64 = 1;

// Recomputes the seeded windows on a fixed tick until stopped. The first
// recomputation happens right away, not one period in.
pub struct DeadlineTracker {
    entries: Arc<RwLock<Vec<DeadlineEntry>>>,
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl DeadlineTracker {
    pub fn spawn(seed: Vec<DeadlineEntry>, clock: Arc<dyn Clock>, period: Duration) -> Self {
        let entries = Arc::new(RwLock::new(seed));
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let ticked = entries.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let now = clock.now_ms();
                        let mut entries = ticked.write().await;
                        refresh_deadlines(&mut entries, now);
                    }
                    _ = stop_rx.changed() => {
                        info!("deadline tracker stopped");
                        return;
                    }
                }
            }
        });

        DeadlineTracker {
            entries,
            stop_tx,
            handle,
        }
    }

    pub async fn snapshot(&self) -> Vec<DeadlineEntry> {
        self.entries.read().await.clone()
    }

    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}
