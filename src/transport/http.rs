use super::{Method, Transport, TransportError, TransportRequest, TransportResponse};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransportConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub proxy_url: Option<String>,
}

impl HttpTransportConfig {
    /// Minimal production-friendly defaults (env-overridable).
    ///
    /// - `MS_DEMO_BASE_URL` (default `http://localhost:5000`)
    /// - `MS_DEMO_HTTP_TIMEOUT_SECS` (default 30)
    /// - `MS_DEMO_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
    /// - `MS_DEMO_PROXY_URL`
    pub fn from_env() -> Self {
        let base_url = env::var("MS_DEMO_BASE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = env::var("MS_DEMO_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let pool_max_idle_per_host = env::var("MS_DEMO_HTTP_POOL_MAX_IDLE_PER_HOST")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(32);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            pool_max_idle_per_host,
            proxy_url: env::var("MS_DEMO_PROXY_URL").ok().filter(|s| !s.is_empty()),
        }
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
            proxy_url: None,
        }
    }
}

/// `reqwest`-backed transport. Endpoints are appended to the configured origin.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &HttpTransportConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("proxy_url")
                        .with_component("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

/// Validate the origin and strip trailing slashes so endpoints can be appended verbatim.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid base URL '{}': {}", raw, e),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_component("http_transport"),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("Unsupported URL scheme '{}'", parsed.scheme()),
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details("http or https")
                .with_component("http_transport"),
        ));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let url = self.url_for(&request.endpoint);

        let mut req = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        for (k, v) in &request.headers {
            req = req.header(k.as_str(), v.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let transport = HttpTransport::new(&HttpTransportConfig {
            base_url: "http://localhost:8080/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8080");
        assert_eq!(
            transport.url_for("/api/users/42"),
            "http://localhost:8080/api/users/42"
        );
        assert_eq!(
            transport.url_for("api/users"),
            "http://localhost:8080/api/users"
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let err = HttpTransport::new(&HttpTransportConfig {
            base_url: "not a url".into(),
            ..Default::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));

        let err = normalize_base_url("ftp://example.com").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unsupported URL scheme 'ftp' \
             (field: base_url, expected: http or https, in: http_transport)"
        );
        let ctx = err.context().unwrap();
        assert_eq!(ctx.component.as_deref(), Some("http_transport"));
    }

    #[test]
    fn test_default_config() {
        let cfg = HttpTransportConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.proxy_url.is_none());
    }
}
