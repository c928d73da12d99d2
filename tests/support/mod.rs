//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use mockito::{Server, ServerGuard};
use ms_demo_client::transport::{TransportRequest, TransportResponse};
use ms_demo_client::{ApiClient, Transport, TransportError};
use std::sync::{Arc, Mutex};

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create a client pointed at the mock server
    pub fn client(&self) -> ApiClient {
        ApiClient::builder()
            .base_url(&self.base_url)
            .build()
            .expect("mock server URL is valid")
    }
}

/// Client pointed at a local port that nothing listens on.
pub fn unreachable_client() -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    ApiClient::builder()
        .base_url(format!("http://127.0.0.1:{}", port))
        .build()
        .expect("valid URL")
}

/// In-memory transport that records every request and answers with a fixed response.
pub struct RecordingTransport {
    requests: Mutex<Vec<TransportRequest>>,
    status: u16,
    body: Bytes,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            status,
            body: Bytes::from_static(body.as_bytes()),
        })
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request")
    }

    pub fn last_body_json(&self) -> Option<serde_json::Value> {
        self.last()
            .body
            .map(|b| serde_json::from_slice(&b).expect("request body is JSON"))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(TransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn recording_client(transport: &Arc<RecordingTransport>) -> ApiClient {
    ApiClient::with_transport(transport.clone())
}
