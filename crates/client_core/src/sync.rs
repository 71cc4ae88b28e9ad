//! Recurring snapshot polling with a single atomically replaced reference.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use shared::protocol::ElevatorSnapshot;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{authority::ElevatorAuthority, error::Result};

pub type HeldSnapshot = Option<Arc<ElevatorSnapshot>>;

#[derive(Debug, Default)]
struct SyncStats {
    accepted: AtomicU64,
    failed: AtomicU64,
    consecutive_failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncCounts {
    pub accepted: u64,
    pub failed: u64,
    /// Failed polls since the last accepted one.
    pub consecutive_failures: u64,
}

/// Read side of the synchronizer. Cloning is cheap; readers never block the writer.
#[derive(Debug, Clone)]
pub struct SnapshotHandle {
    rx: watch::Receiver<HeldSnapshot>,
    stats: Arc<SyncStats>,
}

impl SnapshotHandle {
    /// The most recently accepted snapshot, or `None` before the first successful poll.
    pub fn current(&self) -> HeldSnapshot {
        self.rx.borrow().clone()
    }

    pub fn counts(&self) -> SyncCounts {
        SyncCounts {
            accepted: self.stats.accepted.load(Ordering::Relaxed),
            failed: self.stats.failed.load(Ordering::Relaxed),
            consecutive_failures: self.stats.consecutive_failures.load(Ordering::Relaxed),
        }
    }

    /// Waits until a new snapshot is published. Returns `false` once the writer is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

struct SyncInner {
    authority: Arc<dyn ElevatorAuthority>,
    floor_count: usize,
    tx: watch::Sender<HeldSnapshot>,
    stats: Arc<SyncStats>,
}

impl SyncInner {
    async fn poll(&self) -> Result<Arc<ElevatorSnapshot>> {
        let outcome = self.authority.fetch_snapshot().await.and_then(|snapshot| {
            snapshot.validate(self.floor_count)?;
            Ok(snapshot)
        });

        match outcome {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                self.tx.send_replace(Some(Arc::clone(&snapshot)));
                self.stats.accepted.fetch_add(1, Ordering::Relaxed);
                let missed = self.stats.consecutive_failures.swap(0, Ordering::Relaxed);
                if missed > 0 {
                    info!(failed_polls = missed, "elevator authority reachable again");
                }
                debug!(position = snapshot.position, "accepted elevator snapshot");
                Ok(snapshot)
            }
            Err(err) => {
                self.stats.failed.fetch_add(1, Ordering::Relaxed);
                // One warn per outage.
                let streak = self.stats.consecutive_failures.fetch_add(1, Ordering::Relaxed);
                if streak == 0 {
                    warn!(error = %err, "elevator poll failed; keeping previous snapshot");
                } else {
                    debug!(error = %err, streak = streak + 1, "elevator poll still failing");
                }
                Err(err)
            }
        }
    }
}

/// Sole writer of the held snapshot.
pub struct StateSynchronizer {
    inner: Arc<SyncInner>,
}

impl StateSynchronizer {
    pub fn new(
        authority: Arc<dyn ElevatorAuthority>,
        floor_count: usize,
    ) -> (Self, SnapshotHandle) {
        let (tx, rx) = watch::channel(None);
        let stats = Arc::new(SyncStats::default());
        let handle = SnapshotHandle {
            rx,
            stats: Arc::clone(&stats),
        };
        let inner = Arc::new(SyncInner {
            authority,
            floor_count,
            tx,
            stats,
        });
        (Self { inner }, handle)
    }

    /// Fetches, validates and publishes one snapshot. On error the held snapshot is unchanged.
    pub async fn poll_once(&self) -> Result<Arc<ElevatorSnapshot>> {
        self.inner.poll().await
    }

    /// Starts the poll timer. Every tick issues its own request without waiting for earlier
    /// ones, so the last request to complete decides the held snapshot.
    pub fn spawn(self, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    let _ = inner.poll().await;
                });
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
