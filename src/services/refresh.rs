//! Background polling for views that keep themselves fresh (market strip,
//! dashboard stats).
//!
//! A refresher performs one fetch immediately, then one per period; missed
//! ticks are skipped, never queued. The returned handle is the view's
//! liveness: dropping or stopping it cancels the schedule, and a completion
//! that lands after the stop (or after a newer request was issued) is
//! discarded instead of overwriting fresher state.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::warn;

/// The period the web client used for its market refresh.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(5000);

/// Monotonic ticket counter for in-flight requests. A response may only be
/// applied while its ticket is still the latest issued, so a slow early
/// request can never clobber the result of a later one.
#[derive(Debug, Default)]
pub struct RequestSeq {
    issued: AtomicU64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

/// Cancellable handle for a running refresher.
pub struct RefreshHandle {
    alive: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the schedule. In-flight work is aborted; a completion that races
    /// the stop is dropped by the liveness check before it can be applied.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::SeqCst);
        self.task.abort();
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn a refresher: fetch now, then every `period`, applying each fresh
/// result through `apply`. The apply future is awaited on the refresh task
/// itself, so store writes finish before the next tick and are never left
/// dangling at shutdown. A failed fetch is logged and leaves the previous
/// data visible; the next tick simply tries again.
pub fn start<F, Fut, T, E, A, AFut>(period: Duration, fetch: F, apply: A) -> RefreshHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send + 'static,
    E: Display + Send + 'static,
    A: Fn(T) -> AFut + Send + Sync + 'static,
    AFut: Future<Output = ()> + Send,
{
    let alive = Arc::new(AtomicBool::new(true));
    let seq = Arc::new(RequestSeq::new());

    let task = tokio::spawn({
        let alive = Arc::clone(&alive);
        let seq = Arc::clone(&seq);
        async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let ticket = seq.issue();
                match fetch().await {
                    Ok(value) => {
                        if alive.load(Ordering::SeqCst) && seq.is_latest(ticket) {
                            apply(value).await;
                        }
                    }
                    Err(e) => warn!("Background refresh failed: {}", e),
                }
            }
        }
    });

    RefreshHandle { alive, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[tokio::test(start_paused = true)]
    async fn fetches_immediately_and_then_per_period() {
        let applied = Arc::new(AtomicUsize::new(0));
        let handle = start(
            Duration::from_secs(5),
            || async { Ok::<_, String>(1u32) },
            {
                let applied = Arc::clone(&applied);
                move |_| {
                    let applied = Arc::clone(&applied);
                    async move {
                        applied.fetch_add(1, Ordering::SeqCst);
                    }
                }
            },
        );

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(applied.load(Ordering::SeqCst), 1, "first fetch is immediate");

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(applied.load(Ordering::SeqCst) >= 3);
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_discards_in_flight_completion() {
        let applied = Arc::new(AtomicUsize::new(0));
        let handle = start(
            Duration::from_secs(5),
            || async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                Ok::<_, String>(1u32)
            },
            {
                let applied = Arc::clone(&applied);
                move |_| {
                    let applied = Arc::clone(&applied);
                    async move {
                        applied.fetch_add(1, Ordering::SeqCst);
                    }
                }
            },
        );

        // Unmount while the first fetch is still pending.
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.stop();
        assert!(!handle.is_active());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(applied.load(Ordering::SeqCst), 0, "no state mutation after unmount");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetches_leave_prior_data_and_keep_ticking() {
        let calls = Arc::new(AtomicUsize::new(0));
        let applied = Arc::new(AtomicUsize::new(0));
        let handle = start(
            Duration::from_secs(5),
            {
                let calls = Arc::clone(&calls);
                move || {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    async move {
                        if n == 0 {
                            Err("network down".to_string())
                        } else {
                            Ok(1u32)
                        }
                    }
                }
            },
            {
                let applied = Arc::clone(&applied);
                move |_| {
                    let applied = Arc::clone(&applied);
                    async move {
                        applied.fetch_add(1, Ordering::SeqCst);
                    }
                }
            },
        );

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(calls.load(Ordering::SeqCst) >= 2);
        assert!(applied.load(Ordering::SeqCst) >= 1);
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn apply_writes_land_before_the_next_tick() {
        let written = Arc::new(tokio::sync::RwLock::new(Vec::new()));
        let handle = start(
            Duration::from_secs(5),
            || async { Ok::<_, String>(42u32) },
            {
                let written = Arc::clone(&written);
                move |value| {
                    let written = Arc::clone(&written);
                    async move {
                        written.write().await.push(value);
                    }
                }
            },
        );

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(*written.read().await, vec![42], "async store write completed");
        handle.stop();
    }

    #[test]
    fn stale_ticket_is_not_latest() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_latest(first), "earlier request must be discarded");
        assert!(seq.is_latest(second));
    }
}
