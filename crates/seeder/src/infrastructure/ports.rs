//! Port trait for the remote API boundary.
//!
//! The seeding pipeline only ever talks to the backend through [`ApiPort`],
//! so tests can swap the reqwest client for an in-memory mock and the retry
//! wrapper can decorate any implementation.

use async_trait::async_trait;
use serde_json::Value;

/// HTTP method subset the seeder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// One outbound call against the backend.
///
/// A 2xx response with an empty body resolves to `Value::Null`, which
/// callers treat as "created, nothing to read back".
#[async_trait]
pub trait ApiPort: Send + Sync {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;
}
