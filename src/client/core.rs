use crate::client::normalize::{failure_body, normalize_response, normalize_transport_error};
use crate::transport::{Method, Transport, TransportRequest};
use crate::types::NormalizedResult;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Request normalizer.
///
/// Every operation performs exactly one exchange through the injected [`Transport`] and
/// always yields a [`NormalizedResult`]; transport faults and server errors never escape
/// as `Err`. No retries, no extra timeouts and no cancellation handle are provided.
///
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

/// A [`NormalizedResult`] plus the JSON body the server sent with a failure status.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub result: NormalizedResult,
    /// Set only for a completed non-2xx exchange whose body decoded as JSON.
    pub server_body: Option<Value>,
}

impl From<NormalizedResult> for Exchange {
    fn from(result: NormalizedResult) -> Self {
        Self {
            result,
            server_body: None,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over the default HTTP transport, configured from the environment.
    pub fn new() -> crate::Result<Self> {
        crate::client::builder::ApiClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::ApiClientBuilder {
        crate::client::builder::ApiClientBuilder::new()
    }

    /// Create a client over an explicitly injected transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, endpoint: &str) -> NormalizedResult {
        self.dispatch(Method::Get, endpoint, None).await.result
    }

    pub async fn post<B>(&self, endpoint: &str, body: &B) -> NormalizedResult
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::Post, endpoint, Some(body)).await
    }

    pub async fn put<B>(&self, endpoint: &str, body: &B) -> NormalizedResult
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::Put, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> NormalizedResult {
        self.dispatch(Method::Delete, endpoint, None).await.result
    }

    /// Generic entry point. A body that fails to serialize is reported as a
    /// transport-level failure and nothing is sent.
    pub async fn request<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> NormalizedResult
    where
        B: Serialize + ?Sized,
    {
        match encode_body(method, endpoint, body) {
            Ok(body) => self.dispatch(method, endpoint, body).await.result,
            Err(failure) => failure,
        }
    }

    /// Same as [`request`](Self::request) for an already parsed JSON body.
    pub async fn request_raw(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> NormalizedResult {
        self.request(method, endpoint, body.as_ref()).await
    }

    /// Like [`request_raw`](Self::request_raw), but keeps the server's JSON body when
    /// the exchange completed with a failure status.
    pub async fn exchange(&self, method: Method, endpoint: &str, body: Option<Value>) -> Exchange {
        match encode_body(method, endpoint, body.as_ref()) {
            Ok(body) => self.dispatch(method, endpoint, body).await,
            Err(failure) => failure.into(),
        }
    }

    async fn dispatch(&self, method: Method, endpoint: &str, body: Option<Bytes>) -> Exchange {
        let request_id = Uuid::new_v4();

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = TransportRequest {
            method,
            endpoint: endpoint.to_string(),
            headers,
            body,
        };

        debug!(%request_id, method = %method, endpoint, "issuing request");

        match self.transport.send(request).await {
            Ok(response) => {
                let result = normalize_response(response.status, &response.body);
                if result.success {
                    debug!(%request_id, status = result.status, "request completed");
                } else if result.is_transport_failure() {
                    error!(
                        %request_id,
                        status = response.status,
                        "API error: {}",
                        result.error().unwrap_or_default()
                    );
                } else {
                    warn!(
                        %request_id,
                        method = %method,
                        endpoint,
                        status = result.status,
                        "request failed: {}",
                        result.error().unwrap_or_default()
                    );
                }
                Exchange {
                    result,
                    server_body: failure_body(response.status, &response.body),
                }
            }
            Err(e) => {
                error!(%request_id, method = %method, endpoint, "API error: {}", e);
                normalize_transport_error(&e).into()
            }
        }
    }
}

fn encode_body<B>(
    method: Method,
    endpoint: &str,
    body: Option<&B>,
) -> std::result::Result<Option<Bytes>, NormalizedResult>
where
    B: Serialize + ?Sized,
{
    match body.map(serde_json::to_vec).transpose() {
        Ok(body) => Ok(body.map(Bytes::from)),
        Err(e) => {
            error!(method = %method, endpoint, "API error: {}", e);
            Err(NormalizedResult::transport_failure(format!(
                "Failed to serialize request body: {}",
                e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{TransportError, TransportResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubTransport {
        seen: Mutex<Vec<TransportRequest>>,
        reply: fn() -> std::result::Result<TransportResponse, TransportError>,
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> std::result::Result<TransportResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            (self.reply)()
        }
    }

    fn stub(
        reply: fn() -> std::result::Result<TransportResponse, TransportError>,
    ) -> Arc<StubTransport> {
        Arc::new(StubTransport {
            seen: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn ok_empty_object() -> std::result::Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status: 200,
            body: Bytes::from_static(b"{}"),
        })
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[tokio::test]
    async fn test_get_sends_accept_only() {
        let transport = stub(ok_empty_object);
        let client = ApiClient::with_transport(transport.clone());
        let r = client.get("/api/users").await;
        assert!(r.success);

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].header("Accept"), Some("application/json"));
        assert_eq!(seen[0].header("Content-Type"), None);
        assert!(seen[0].body.is_none());
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let transport = stub(ok_empty_object);
        let client = ApiClient::with_transport(transport.clone());
        client
            .post("/api/users", &serde_json::json!({"username": "ada"}))
            .await;

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].header("content-type"), Some("application/json"));
        assert_eq!(
            seen[0].body.as_deref(),
            Some(&br#"{"username":"ada"}"#[..])
        );
    }

    #[tokio::test]
    async fn test_serialization_fault_is_not_sent() {
        let transport = stub(ok_empty_object);
        let client = ApiClient::with_transport(transport.clone());
        let r = client.put("/api/products/1", &Unserializable).await;

        assert!(r.is_transport_failure());
        assert!(r.error().unwrap().contains("cannot encode"));
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_status_zero() {
        let transport = stub(|| Err(TransportError::Other("connection refused".into())));
        let client = ApiClient::with_transport(transport);
        let r = client.delete("/api/users/1").await;
        assert_eq!(r, NormalizedResult::transport_failure("connection refused"));
    }

    #[tokio::test]
    async fn test_exchange_keeps_failure_body() {
        let transport = stub(|| {
            Ok(TransportResponse {
                status: 400,
                body: Bytes::from_static(br#"{"success":false,"error":"Invalid status"}"#),
            })
        });
        let client = ApiClient::with_transport(transport);
        let exchange = client
            .exchange(
                Method::Put,
                "/api/orders/1/status",
                Some(serde_json::json!({"status": "lost"})),
            )
            .await;

        assert_eq!(exchange.result, NormalizedResult::app_failure(400, "Invalid status"));
        assert_eq!(
            exchange.server_body,
            Some(serde_json::json!({"success": false, "error": "Invalid status"}))
        );

        let ok = ApiClient::with_transport(stub(ok_empty_object))
            .exchange(Method::Get, "/api/users", None)
            .await;
        assert!(ok.result.success);
        assert!(ok.server_body.is_none());
    }
}
