//! Minimum-interval request throttling

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Spaces requests out so that two consecutive requests start at least
/// `min_interval` apart
#[derive(Debug, Clone)]
pub(crate) struct RequestThrottle {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RequestThrottle {
    pub(crate) fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval: Duration::from_millis(min_interval_ms),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Wait until the next request may be sent
    pub(crate) async fn wait(&self) {
        if self.min_interval.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval.saturating_sub(elapsed);
                debug!(?wait, "Throttling request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}
