//! Core data structures for the charge point control API.
//!
//! This module defines the fundamental types used throughout chargectl:
//! - Request bodies sent to the start, stop and release endpoints
//! - Endpoint paths of the control API
//! - The structured response returned for every completed call
//! - Error types for transport and client setup

use serde::Serialize;
use thiserror::Error;

/// `idTag` sent with a start request when none is given on the command line.
pub const DEFAULT_ID_TAG: &str = "DEMO_IDTAG";

/// Body of `POST /api/v1/start`.
///
/// # Examples
///
/// ```
/// use chargectl::core::StartRequest;
///
/// let req = StartRequest::new("CP001", 1, None);
/// let json = serde_json::to_string(&req).unwrap();
/// assert_eq!(json, r#"{"cpid":"CP001","connectorId":1,"idTag":"DEMO_IDTAG"}"#);
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    /// Charge point identifier
    pub cpid: String,
    /// Connector on the charge point
    pub connector_id: u32,
    /// Credential authorizing the session
    pub id_tag: String,
}

impl StartRequest {
    /// Builds a start request, falling back to [`DEFAULT_ID_TAG`] when `id_tag` is `None`.
    #[must_use]
    pub fn new(cpid: impl Into<String>, connector_id: u32, id_tag: Option<String>) -> Self {
        Self {
            cpid: cpid.into(),
            connector_id,
            id_tag: id_tag.unwrap_or_else(|| DEFAULT_ID_TAG.to_string()),
        }
    }
}

/// Body of `POST /api/v1/stop` and `POST /api/v1/release`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorRequest {
    pub cpid: String,
    pub connector_id: u32,
}

impl ConnectorRequest {
    #[must_use]
    pub fn new(cpid: impl Into<String>, connector_id: u32) -> Self {
        Self {
            cpid: cpid.into(),
            connector_id,
        }
    }
}

/// Endpoints of the control API this client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Stop,
    /// Frees a connector whose session is already gone on the server side.
    Release,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Start => "/api/v1/start",
            Endpoint::Stop => "/api/v1/stop",
            Endpoint::Release => "/api/v1/release",
        }
    }
}

/// Result of one completed HTTP call.
///
/// The body is kept as raw bytes; it is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub method: String,
    pub url: String,
    pub status: u16,
    /// Canonical reason phrase of `status`, empty if the code has none
    pub status_text: String,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Body as text, invalid UTF-8 replaced.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Status line in the form `POST http://host/api/v1/stop -> 404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "{} {} -> {} {}",
            self.method, self.url, self.status, self.status_text
        )
    }
}

/// Error types for chargectl operations.
#[derive(Error, Debug)]
pub enum ChargeError {
    /// The request could not be sent or the response could not be read
    /// (DNS, connect, TLS, timeout or read failure).
    ///
    /// Automatically converted from `reqwest::Error` via the `?` operator.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Base URL does not use a supported scheme.
    #[error("Unsupported protocol in base URL: {url} (expected http:// or https://)")]
    InvalidBaseUrl {
        /// The rejected base URL
        url: String,
    },

    /// HTTP client could not be built.
    #[error("Client setup error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, ChargeError>;
