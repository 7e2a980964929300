use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

/// Single-slot gate around the README fetch.
///
/// At most one holder runs a fetch at any instant, and every acquisition
/// pays the pacing delay before the fetch starts, bounding throughput to one
/// fetch per delay period. The guard should be held for the duration of the
/// fetch only; cache write-back happens after release.
pub struct FetchPacer {
    gate: Mutex<()>,
    delay: Duration,
}

impl FetchPacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            gate: Mutex::new(()),
            delay,
        }
    }

    /// Wait for the slot, then wait the pacing delay, then hand the slot to
    /// the caller. Dropping the guard frees the slot.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        let guard = self.gate.lock().await;
        tokio::time::sleep(self.delay).await;
        guard
    }
}
