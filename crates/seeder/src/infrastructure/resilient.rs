//! Resilient API client wrapper with bounded retry.
//!
//! Wraps any ApiPort implementation with retry logic for transient
//! failures. Timeouts back off longer than other transport errors; after
//! the final attempt the last error is returned as-is.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::infrastructure::ports::{ApiError, ApiPort, Method};

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts per request (1 = no retries).
    pub max_attempts: u32,
    /// Delay between attempts after a timeout.
    pub timeout_backoff: Duration,
    /// Delay between attempts after any other failure.
    pub error_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout_backoff: Duration::from_secs(2),
            error_backoff: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Zero-delay variant for tests.
    #[cfg(test)]
    pub fn fast(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            timeout_backoff: Duration::ZERO,
            error_backoff: Duration::ZERO,
        }
    }
}

/// Wrapper that adds retry logic to any API client.
pub struct ResilientApiClient {
    inner: Arc<dyn ApiPort>,
    config: RetryConfig,
}

impl ResilientApiClient {
    pub fn new(inner: Arc<dyn ApiPort>, config: RetryConfig) -> Self {
        let config = RetryConfig {
            max_attempts: config.max_attempts.max(1),
            ..config
        };
        Self { inner, config }
    }

    fn backoff_for(&self, error: &ApiError) -> Duration {
        match error {
            ApiError::Timeout => self.config.timeout_backoff,
            _ => self.config.error_backoff,
        }
    }
}

#[async_trait]
impl ApiPort for ResilientApiClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts {
            match self
                .inner
                .request(method, endpoint, body.clone())
                .await
            {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(attempt, %method, endpoint, "request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) => {
                    if let ApiError::Status { status, body } = &e {
                        tracing::warn!(%method, endpoint, status, body = %body, "server rejected request");
                    }
                    if attempt < self.config.max_attempts {
                        let delay = self.backoff_for(&e);
                        tracing::warn!(
                            attempt,
                            max_attempts = self.config.max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            %method,
                            endpoint,
                            "request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let error = last_error.unwrap_or_else(|| ApiError::Transport("unknown error".to_string()));
        tracing::error!(
            attempts = self.config.max_attempts,
            error = %error,
            %method,
            endpoint,
            "request failed after all attempts"
        );
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Mock API that fails a configurable number of times before succeeding.
    struct FailingMockApi {
        failures_remaining: AtomicU32,
        attempts: AtomicU32,
        error: ApiError,
    }

    impl FailingMockApi {
        fn new(failure_count: u32, error: ApiError) -> Self {
            Self {
                failures_remaining: AtomicU32::new(failure_count),
                attempts: AtomicU32::new(0),
                error,
            }
        }
    }

    #[async_trait]
    impl ApiPort for FailingMockApi {
        async fn request(
            &self,
            _method: Method,
            _endpoint: &str,
            _body: Option<Value>,
        ) -> Result<Value, ApiError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            let remaining = self.failures_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_remaining.fetch_sub(1, Ordering::SeqCst);
                Err(self.error.clone())
            } else {
                Ok(serde_json::json!({"id": 1, "name": "Longsword of Might"}))
            }
        }
    }

    #[tokio::test]
    async fn succeeds_without_retry() {
        let mock = Arc::new(FailingMockApi::new(0, ApiError::Timeout));
        let mock_ref = Arc::clone(&mock);
        let client = ResilientApiClient::new(mock, RetryConfig::fast(3));

        let result = client.request(Method::Get, "characters", None).await;

        assert!(result.is_ok());
        assert_eq!(mock_ref.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let mock = Arc::new(FailingMockApi::new(
            2,
            ApiError::Transport("connection reset".into()),
        ));
        let mock_ref = Arc::clone(&mock);
        let client = ResilientApiClient::new(mock, RetryConfig::fast(3));

        let result = client.request(Method::Post, "itemtemplates", None).await;

        assert!(result.is_ok());
        assert_eq!(mock_ref.attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn timeout_makes_exactly_max_attempts() {
        let mock = Arc::new(FailingMockApi::new(u32::MAX, ApiError::Timeout));
        let mock_ref = Arc::clone(&mock);
        let client = ResilientApiClient::new(mock, RetryConfig::fast(3));

        let result = client.request(Method::Get, "characters", None).await;

        assert!(matches!(result, Err(ApiError::Timeout)));
        assert_eq!(mock_ref.attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn transport_error_makes_exactly_max_attempts() {
        let mock = Arc::new(FailingMockApi::new(
            u32::MAX,
            ApiError::Status {
                status: 500,
                body: "internal error".into(),
            },
        ));
        let mock_ref = Arc::clone(&mock);
        let client = ResilientApiClient::new(mock, RetryConfig::fast(5));

        let result = client.request(Method::Post, "spells", None).await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert_eq!(mock_ref.attempts.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn zero_attempts_is_clamped_to_one() {
        let mock = Arc::new(FailingMockApi::new(u32::MAX, ApiError::Timeout));
        let mock_ref = Arc::clone(&mock);
        let client = ResilientApiClient::new(mock, RetryConfig::fast(0));

        let result = client.request(Method::Get, "characters", None).await;

        assert!(result.is_err());
        assert_eq!(mock_ref.attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backoff_distinguishes_timeouts_from_other_errors() {
        let config = RetryConfig::default();
        let client = ResilientApiClient::new(
            Arc::new(FailingMockApi::new(0, ApiError::Timeout)),
            config,
        );

        assert_eq!(client.backoff_for(&ApiError::Timeout), Duration::from_secs(2));
        assert_eq!(
            client.backoff_for(&ApiError::Transport("reset".into())),
            Duration::from_secs(1)
        );
        assert_eq!(
            client.backoff_for(&ApiError::Status {
                status: 500,
                body: String::new()
            }),
            Duration::from_secs(1)
        );
    }
}
