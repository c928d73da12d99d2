//! 传输层模块：定义可注入的传输能力及基于 reqwest 的 HTTP 实现。
//!
//! # Transport Module
//!
//! The request normalizer never talks to the network directly. It hands a fully built
//! [`TransportRequest`] to an injected [`Transport`] and receives either a completed
//! [`TransportResponse`] (any status code) or a [`TransportError`] when the exchange could
//! not be completed.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Transport`] | Injected capability that performs one exchange |
//! | [`HttpTransport`] | Default implementation backed by `reqwest` |
//! | [`HttpTransportConfig`] | Base URL, timeout, pool and proxy settings |

pub mod http;

pub use http::{HttpTransport, HttpTransportConfig};

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::str::FromStr;

/// HTTP method used by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            other => Err(crate::Error::validation_with_context(
                format!("Unsupported HTTP method '{}'", other),
                crate::ErrorContext::new()
                    .with_details("one of GET, POST, PUT, DELETE")
                    .with_component("method_parser"),
            )),
        }
    }
}

/// One outgoing exchange, fully prepared by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// Server-relative endpoint, e.g. `/api/users/42` or `/api/orders?user_id=7`.
    pub endpoint: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A completed exchange. Any status code counts as completed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Injected request capability.
///
/// Implementations must return `Ok` for every exchange that completed, whatever the
/// status, and `Err` only when no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}
