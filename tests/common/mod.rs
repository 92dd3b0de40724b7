#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use chargectl::config::{ClientConfig, load_config};
use chargectl::drivers::HttpDriver;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct TestContext {
    /// stub of the control API, isolated per test
    pub server: MockServer,
}

impl TestContext {
    pub async fn setup() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ClientConfig {
        load_config(Some(self.server.uri())).expect("stub uri is a valid base url")
    }

    pub fn driver(&self) -> HttpDriver {
        HttpDriver::new(self.config()).expect("Error building http driver")
    }

    /// answers `POST <endpoint>` with `status` and `body`, only for the given json body
    pub async fn mount(
        &self,
        endpoint: &str,
        expected_body: serde_json::Value,
        status: u16,
        body: &str,
    ) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(header("content-type", "application/json"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// every request the stub has seen, in arrival order
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }

    pub async fn request_paths(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

/// base url of a local port nobody listens on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
