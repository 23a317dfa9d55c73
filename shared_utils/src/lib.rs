use std::time::Duration;

use tokio_retry::{strategy::ExponentialBackoff, RetryIf};
use tracing::{error, warn};

/// Backoff policy for idempotent calls to the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub initial_delay_millis: u64,
    pub max_delay_secs: u64,
    pub max_retries: u32,
}

impl RetryConfig {
    #[must_use]
    pub fn new(initial_delay_millis: u64, max_delay_secs: u64, max_retries: u32) -> Self {
        Self {
            initial_delay_millis,
            max_delay_secs,
            max_retries,
        }
    }

    /// A policy that runs the operation exactly once.
    #[must_use]
    pub fn once() -> Self {
        Self::new(0, 0, 0)
    }

    fn strategy(&self) -> impl Iterator<Item = Duration> + Clone {
        ExponentialBackoff::from_millis(self.initial_delay_millis.max(1))
            .max_delay(Duration::from_secs(self.max_delay_secs))
            .take(self.max_retries as usize)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_millis: 50,
            max_delay_secs: 2,
            max_retries: 3,
        }
    }
}

/// Run `operation`, retrying only the failures `is_transient` accepts.
///
/// Permanent failures (for example an HTTP 401 from the session endpoint) are
/// returned on the first attempt. `context` tags every log line.
pub async fn retry_if<F, Fut, T, E, P>(
    context: &str,
    config: RetryConfig,
    mut operation: F,
    mut is_transient: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
    P: FnMut(&E) -> bool,
{
    let result = RetryIf::spawn(
        config.strategy(),
        || {
            let fut = operation();
            async move {
                let outcome = fut.await;
                if let Err(err) = &outcome {
                    warn!(error = ?err, retry_context = context, "Upstream call failed");
                }
                outcome
            }
        },
        |err: &E| is_transient(err),
    )
    .await;

    if let Err(err) = &result {
        error!(error = ?err, retry_context = context, "Giving up on upstream call");
    }

    result
}
