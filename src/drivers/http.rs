use crate::ChargeApi;
use crate::config::ClientConfig;
use crate::core::{ApiResponse, ChargeError, Endpoint, Result};
use async_trait::async_trait;
use reqwest::header::{CONNECTION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;

pub struct HttpDriver {
    pub client: Client,
    pub config: ClientConfig,
}

impl HttpDriver {
    /// Builds a client that opens a fresh connection for every request.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // reqwest applies connect_timeout to the whole connector, TLS included,
        // so the handshake is bounded by the shorter of the two
        let connect_timeout = config.connect_timeout.min(config.tls_handshake_timeout);

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(0)
            .tcp_keepalive(None::<Duration>)
            .http1_only()
            .build()
            .map_err(|e| ChargeError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChargeApi for HttpDriver {
    async fn post_json(&self, endpoint: Endpoint, body: String) -> Result<ApiResponse> {
        let url = self.config.endpoint_url(endpoint);
        debug!(%url, %body, "sending request");

        let response = self
            .client
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(CONNECTION, HeaderValue::from_static("close"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(ApiResponse {
            method: Method::POST.to_string(),
            url,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
