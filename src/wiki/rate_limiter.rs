// Download pacing for Wikipedia requests.
//
// Wikipedia asks scripted clients not to hammer its servers. The limiter
// enforces a minimum pause between consecutive downloads: the first request
// goes out immediately, each later one waits until `wait` has passed since
// the previous one.

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Enforces a minimum interval between requests.
pub struct RateLimiter {
    /// Minimum time between requests
    wait: Duration,
    /// When the last request was allowed through
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter that spaces requests `wait_secs` seconds apart.
    ///
    /// Zero, negative or non-finite values disable waiting.
    pub fn new(wait_secs: f64) -> Self {
        let wait = if wait_secs.is_finite() && wait_secs > 0.0 {
            Duration::from_secs_f64(wait_secs)
        } else {
            Duration::ZERO
        };
        Self {
            wait,
            last_request: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Wait until a request is allowed, then return.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.wait {
                tokio::time::sleep(self.wait - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}
