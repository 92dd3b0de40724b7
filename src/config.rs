use crate::core::{ChargeError, Endpoint, Result};
use std::time::Duration;

// server used when neither --base-url nor CHARGECTL_BASE_URL is set
pub const DEFAULT_BASE_URL: &str = "http://45.136.236.186:8080";

/// Transport settings, built once per process and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// scheme, host and port of the control API, without trailing slash
    pub base_url: String,
    /// upper bound for a whole request including reading the body
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub tls_handshake_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
            tls_handshake_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// full URL of an endpoint on the configured server
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

/// load config, uses internal defaults if no base url is set
pub fn load_config(base_url: Option<String>) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(url) = base_url {
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ChargeError::InvalidBaseUrl { url });
        }
        config.base_url = url;
    }

    Ok(config)
}
