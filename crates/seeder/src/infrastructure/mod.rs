//! Infrastructure: the backend API boundary and its retry decoration.

pub mod api;
pub mod ports;
pub mod resilient;

pub use api::HttpApiClient;
pub use ports::{ApiError, ApiPort, Method};
pub use resilient::{ResilientApiClient, RetryConfig};
