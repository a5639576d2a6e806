//! Minimum-interval gate for outbound Torn API calls.

use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

/// Enforces a minimum spacing between consecutive calls.
///
/// A caller holds the returned permit for the duration of its request, so
/// calls through one gate never overlap and each starts at least
/// `min_interval` after the previous one started. Uses tokio's clock, which
/// lets tests run with paused time instead of real delays.
pub struct RateGate {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

/// Held while a gated request is in flight.
pub struct RatePermit<'a> {
    _guard: MutexGuard<'a, Option<Instant>>,
}

impl RateGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits for the previous call to finish and the interval to elapse.
    pub async fn acquire(&self) -> RatePermit<'_> {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            tokio::time::sleep_until(previous + self.min_interval).await;
        }

        *last_call = Some(Instant::now());

        RatePermit { _guard: last_call }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Tests that the first call is not delayed.
    #[tokio::test(start_paused = true)]
    async fn first_call_passes_immediately() {
        let gate = RateGate::new(Duration::from_secs(1));
        let start = Instant::now();

        let _permit = gate.acquire().await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    /// Tests that consecutive calls are spaced by the interval.
    ///
    /// Expected: third call starts two intervals after the first
    #[tokio::test(start_paused = true)]
    async fn spaces_consecutive_calls() {
        let gate = RateGate::new(Duration::from_millis(500));
        let start = Instant::now();

        drop(gate.acquire().await);
        drop(gate.acquire().await);
        assert!(start.elapsed() >= Duration::from_millis(500));

        drop(gate.acquire().await);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    /// Tests that a call made long after the previous one is not delayed.
    #[tokio::test(start_paused = true)]
    async fn idle_gate_does_not_delay() {
        let gate = RateGate::new(Duration::from_millis(500));

        drop(gate.acquire().await);
        tokio::time::sleep(Duration::from_secs(5)).await;

        let before = Instant::now();
        drop(gate.acquire().await);
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    /// Tests that concurrent callers are serialized rather than bursting.
    ///
    /// Expected: four calls from separate tasks span at least three intervals
    #[tokio::test(start_paused = true)]
    async fn serializes_concurrent_callers() {
        let gate = Arc::new(RateGate::new(Duration::from_millis(250)));
        let start = Instant::now();

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move {
                    let _permit = gate.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut started = Vec::new();
        for task in tasks {
            started.push(task.await.unwrap());
        }
        started.sort();

        for pair in started.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(250));
        }
        assert!(start.elapsed() >= Duration::from_millis(750));
    }
}
