//! Runtime configuration, loaded from environment variables.

use std::time::Duration;

use crate::infrastructure::RetryConfig;

/// Default backend base URL (ASP.NET dev server with the `/api` prefix).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Delay inserted after each successful creation to throttle request rate.
pub const DEFAULT_THROTTLE_MS: u64 = 100;

#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Base URL all endpoints are resolved against.
    pub base_url: String,
    /// Total attempts per request before giving up.
    pub max_attempts: u32,
    /// Whether to delete existing records before seeding.
    pub clear: bool,
    /// Pause after each successful creation.
    pub throttle: Duration,
}

impl SeederConfig {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// `SEED_API_URL`, `SEED_MAX_ATTEMPTS`, `SEED_CLEAR`, `SEED_THROTTLE_MS`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SEED_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let max_attempts = std::env::var("SEED_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);
        let clear = std::env::var("SEED_CLEAR")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let throttle_ms = std::env::var("SEED_THROTTLE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_THROTTLE_MS);

        Self {
            base_url,
            max_attempts,
            clear,
            throttle: Duration::from_millis(throttle_ms),
        }
    }

    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            ..RetryConfig::default()
        }
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            max_attempts: 3,
            clear: false,
            throttle: Duration::from_millis(DEFAULT_THROTTLE_MS),
        }
    }
}
