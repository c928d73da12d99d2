//! 交互式请求控制台：文档页面 “Try it out” 表单的等价实现。
//!
//! # Request Console
//!
//! Describes a request the way the API documentation page does: a method, an endpoint
//! template with `{param}` placeholders, path and query fields, and raw JSON body text.
//! The request goes through the normal [`ApiClient`] so the outcome is a
//! [`NormalizedResult`], which [`ResponseView`] renders as a status line plus a
//! pretty-printed body. Server failures show the JSON body the server returned.
//!
//! ```rust,no_run
//! use ms_demo_client::console::TryItRequest;
//! use ms_demo_client::{ApiClient, Method};
//!
//! # async fn demo() -> ms_demo_client::Result<()> {
//! let client = ApiClient::new()?;
//! let view = TryItRequest::new(Method::Put, "/api/orders/{order_id}/status")
//!     .path_param("order_id", "9")
//!     .body_text(r#"{"status": "shipped"}"#)
//!     .send(&client)
//!     .await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

pub mod template;
pub mod view;

pub use template::EndpointTemplate;
pub use view::ResponseView;

use crate::transport::Method;
use crate::ApiClient;
use serde_json::Value;
use std::collections::HashMap;
use url::form_urlencoded;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
}

/// One "Try it out" submission.
#[derive(Debug, Clone)]
pub struct TryItRequest {
    pub method: Method,
    pub endpoint: EndpointTemplate,
    pub path_params: HashMap<String, String>,
    /// Query fields in form order; empty values are skipped.
    pub query_params: Vec<(String, String)>,
    pub body_text: Option<String>,
}

impl TryItRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: EndpointTemplate::new(endpoint),
            path_params: HashMap::new(),
            query_params: Vec::new(),
            body_text: None,
        }
    }

    pub fn path_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(name.into(), value.into());
        self
    }

    pub fn query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    /// Rendered endpoint plus the query string built from non-empty fields.
    pub fn url(&self) -> String {
        let mut url = self.endpoint.render(&self.path_params);
        let parts: Vec<String> = self
            .query_params
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect();
        if !parts.is_empty() {
            url.push('?');
            url.push_str(&parts.join("&"));
        }
        url
    }

    /// Parsed JSON body. GET and DELETE never carry one, and blank text means no body.
    pub fn body(&self) -> Result<Option<Value>, ConsoleError> {
        if !self.method.allows_body() {
            return Ok(None);
        }
        match self.body_text.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(ConsoleError::InvalidJson),
        }
    }

    /// Issue the request. An invalid JSON body is rejected before anything is sent.
    pub async fn send(&self, client: &ApiClient) -> crate::Result<ResponseView> {
        let body = self.body()?;
        let url = self.url();
        tracing::debug!(method = %self.method, url = %url, "try-it request");
        let exchange = client.exchange(self.method, &url, body).await;
        Ok(ResponseView::from_exchange(&exchange))
    }
}

/// Percent-encode a query value the way `encodeURIComponent` does for the characters
/// that matter to a query string.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_with_path_and_query() {
        let req = TryItRequest::new(Method::Get, "/api/orders")
            .query_param("user_id", "7")
            .query_param("empty", "");
        assert_eq!(req.url(), "/api/orders?user_id=7");

        let req = TryItRequest::new(Method::Get, "/api/users/{user_id}")
            .path_param("user_id", "42");
        assert_eq!(req.url(), "/api/users/42");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let req = TryItRequest::new(Method::Get, "/api/orders").query_param("q", "a b+c&d");
        assert_eq!(req.url(), "/api/orders?q=a%20b%2Bc%26d");
    }

    #[test]
    fn test_body_rules() {
        let get = TryItRequest::new(Method::Get, "/api/users").body_text("{\"x\":1}");
        assert!(get.body().unwrap().is_none());

        let blank = TryItRequest::new(Method::Post, "/api/users").body_text("   ");
        assert!(blank.body().unwrap().is_none());

        let post = TryItRequest::new(Method::Post, "/api/users").body_text("{\"x\":1}");
        assert_eq!(post.body().unwrap(), Some(json!({"x": 1})));

        let bad = TryItRequest::new(Method::Put, "/api/users/1").body_text("{x:1}");
        assert!(matches!(bad.body(), Err(ConsoleError::InvalidJson(_))));
    }
}
