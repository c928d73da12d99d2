use crate::client::core::ApiClient;
use crate::transport::{HttpTransport, HttpTransportConfig, Transport};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment (see [`HttpTransportConfig::from_env`]).
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    proxy_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            pool_max_idle_per_host: None,
            proxy_url: None,
            transport: None,
        }
    }

    /// Server origin that endpoints are appended to, e.g. `http://localhost:5000`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport-level timeout for the whole exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn pool_max_idle_per_host(mut self, n: usize) -> Self {
        self.pool_max_idle_per_host = Some(n);
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Inject a transport. HTTP settings are ignored when one is supplied.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the HTTP settings: explicit values first, then environment, then defaults.
    pub fn http_config(&self) -> HttpTransportConfig {
        let env = HttpTransportConfig::from_env();
        HttpTransportConfig {
            base_url: self.base_url.clone().unwrap_or(env.base_url),
            timeout: self.timeout.unwrap_or(env.timeout),
            pool_max_idle_per_host: self
                .pool_max_idle_per_host
                .unwrap_or(env.pool_max_idle_per_host),
            proxy_url: self.proxy_url.clone().or(env.proxy_url),
        }
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient> {
        if let Some(transport) = self.transport {
            return Ok(ApiClient::with_transport(transport));
        }
        let config = self.http_config();
        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "building HTTP transport");
        let transport = HttpTransport::new(&config)?;
        Ok(ApiClient::with_transport(Arc::new(transport)))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
