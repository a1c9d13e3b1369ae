//! Per-call timeout and bounded retry for external lookups.

use std::future::Future;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use tracing::warn;

use crate::config::CallPolicy;
use crate::error::ProviderError;

const MIN_BACKOFF: Duration = Duration::from_millis(250);
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// Run `call` under `policy`: each attempt gets `policy.timeout`, and
/// transient failures are retried up to `policy.max_retries` times with
/// exponential backoff. Non-transient errors return immediately.
pub async fn call_with_policy<T, F, Fut>(
    policy: CallPolicy,
    operation: &str,
    mut call: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let timeout = policy.timeout;
    let attempt = || {
        let fut = call();
        async move {
            match tokio::time::timeout(timeout, fut).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            }
        }
    };

    attempt
        .retry(
            ExponentialBuilder::default()
                .with_min_delay(MIN_BACKOFF)
                .with_max_delay(MAX_BACKOFF)
                .with_max_times(policy.max_retries),
        )
        .when(ProviderError::is_transient)
        .notify(|err: &ProviderError, delay: Duration| {
            warn!(
                operation = %operation,
                error = %err,
                delay_ms = delay.as_millis() as u64,
                "retrying {} after transient error",
                operation
            );
        })
        .await
}
