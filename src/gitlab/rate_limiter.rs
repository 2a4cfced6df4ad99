use crate::model::{Error, Result};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

pub const DEFAULT_REQUESTS_PER_SECOND: usize = 10;

/// Rolling-window limiter: at most `limit` operations start within any
/// `window`. Waiting callers are released in the order they arrived.
#[derive(Debug)]
pub struct RateLimiter {
    limit: usize,
    window: Duration,
    // Start instants of the operations inside the current window, oldest first.
    starts: Mutex<VecDeque<Instant>>,
}

// Create
impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Result<Self> {
        if limit == 0 {
            return Err(Error::Config(
                "rate limit must allow at least one request".to_string(),
            ));
        }
        Ok(Self {
            limit,
            window,
            starts: Mutex::new(VecDeque::with_capacity(limit)),
        })
    }

    pub fn per_second(limit: usize) -> Result<Self> {
        Self::new(limit, Duration::from_secs(1))
    }
}

impl RateLimiter {
    /// Runs `operation` once a slot is free. Its output, error or not, is
    /// handed back untouched.
    pub async fn schedule<F, Fut, T>(&self, operation: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.acquire().await;
        operation().await
    }

    async fn acquire(&self) {
        // tokio's mutex queues waiters fairly, so holding it while sleeping
        // keeps later callers behind the one that is waiting for a slot.
        let mut starts = self.starts.lock().await;
        loop {
            let now = Instant::now();
            while starts
                .front()
                .is_some_and(|oldest| now.duration_since(*oldest) >= self.window)
            {
                starts.pop_front();
            }
            if starts.len() < self.limit {
                starts.push_back(now);
                return;
            }
            if let Some(oldest) = starts.front() {
                let ready_at = *oldest + self.window;
                debug!(
                    wait_ms = ready_at.duration_since(now).as_millis() as u64,
                    "rate limit reached, waiting"
                );
                sleep_until(ready_at).await;
            }
        }
    }
}
