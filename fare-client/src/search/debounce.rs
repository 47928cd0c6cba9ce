//! Keystroke debouncing.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces a burst of events into at most one piece of work.
///
/// Each [`schedule`](Debouncer::schedule) aborts the previously pending
/// work and starts a fresh quiet-period timer, so only the most recent
/// call within the delay window ever runs. Classic debounce, not
/// throttle.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule work to run after the quiet period, replacing any work
    /// still pending from an earlier call.
    pub fn schedule<F>(&self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Abort any pending work without scheduling a replacement.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    async fn settle() {
        // Paused-clock tests: sleeping past the quiet period auto-advances
        // time once every runnable task has been polled.
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_work_runs_after_delay() {
        let debouncer = Debouncer::new(DELAY);
        let ran = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&ran);
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        settle().await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_of_a_burst_runs() {
        let debouncer = Debouncer::new(DELAY);
        let ran = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            let counter = Arc::clone(&ran);
            debouncer.schedule(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        settle().await;
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_work() {
        let debouncer = Debouncer::new(DELAY);
        let ran = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&ran);
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        settle().await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_each_run() {
        let debouncer = Debouncer::new(DELAY);
        let ran = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&ran);
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;

        let counter = Arc::clone(&ran);
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;

        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }
}
