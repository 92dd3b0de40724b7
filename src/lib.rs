pub mod config;
pub mod core;
pub mod drivers;
pub mod ops;

// Re-export for easier access: use chargectl::StartRequest;
pub use crate::core::{ApiResponse, ChargeError, ConnectorRequest, Endpoint, StartRequest};
pub use crate::ops::{StopOutcome, start_charge, stop_charge};
use async_trait::async_trait;

/// Transport used to reach the charge point control API.
#[async_trait]
pub trait ChargeApi: Send + Sync {
    /// Sends `body` (already serialized JSON) as `POST` to `endpoint`.
    ///
    /// Every status code counts as a completed call; only failures to send the
    /// request or read the response are errors.
    async fn post_json(
        &self,
        endpoint: Endpoint,
        body: String,
    ) -> crate::core::Result<ApiResponse>;
}
