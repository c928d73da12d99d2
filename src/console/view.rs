use crate::client::Exchange;
use crate::types::NormalizedResult;
use serde_json::Value;
use reqwest::StatusCode;
use std::fmt;

/// Display form of a result: a status line and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseView {
    pub success: bool,
    pub status_line: String,
    pub body: String,
}

impl ResponseView {
    pub fn from_result(result: &NormalizedResult) -> Self {
        let body = if result.success {
            pretty(&result.data().cloned().unwrap_or_default())
        } else {
            result.error().unwrap_or_default().to_string()
        };

        Self {
            success: result.success,
            status_line: status_line(result.status),
            body,
        }
    }

    /// Like [`from_result`](Self::from_result), but a failure that came with a JSON body
    /// shows that body as the server sent it.
    pub fn from_exchange(exchange: &Exchange) -> Self {
        match &exchange.server_body {
            Some(body) if !exchange.result.success => Self {
                success: false,
                status_line: status_line(exchange.result.status),
                body: pretty(body),
            },
            _ => Self::from_result(&exchange.result),
        }
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `"200 OK"`, `"404 Not Found"`, or `"Error"` when no response was received.
pub fn status_line(status: u16) -> String {
    if status == 0 {
        return "Error".to_string();
    }
    match StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

impl fmt::Display for ResponseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status_line)?;
        write!(f, "{}", self.body)
    }
}

impl From<&NormalizedResult> for ResponseView {
    fn from(result: &NormalizedResult) -> Self {
        Self::from_result(result)
    }
}

impl From<&Exchange> for ResponseView {
    fn from(exchange: &Exchange) -> Self {
        Self::from_exchange(exchange)
    }
}
