//! The tokio task that drives a [`CarouselCycle`].

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use super::cycle::{CarouselCycle, CycleStep};
use super::state::CarouselStore;

/// One running advance loop. Dropping it cancels the loop.
///
/// The fade delay is awaited inside the loop, so a tick never starts before
/// the previous fade completed. After a stall the missed ticks collapse into
/// one and the schedule restarts from the late tick.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    alive: Arc<AtomicBool>,
}

impl Ticker {
    /// Start advancing `store` through `len` images.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut cycle: CarouselCycle, store: CarouselStore, len: NonZeroUsize) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let task_alive = Arc::clone(&alive);
        let period = cycle.interval();
        let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            images = len.get(),
            interval_ms = cycle.interval().as_millis() as u64,
            "carousel ticker started"
        );

        let handle = tokio::spawn(async move {
            loop {
                ticks.tick().await;
                // The owner may have cancelled while we slept.
                if !task_alive.load(Ordering::Acquire) {
                    break;
                }
                cycle.step(&store, len);

                tokio::time::sleep(cycle.fade()).await;
                if !task_alive.load(Ordering::Acquire) {
                    break;
                }
                if let CycleStep::CompleteFade { index } = cycle.step(&store, len) {
                    tracing::trace!(index, "carousel advanced");
                }
            }
        });

        Self { handle, alive }
    }

    /// True until cancelled.
    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Acquire) && !self.handle.is_finished()
    }

    /// Stop the loop. Any pending fade completion is dropped.
    pub fn cancel(&self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            tracing::debug!("carousel ticker cancelled");
        }
        self.handle.abort();
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
