//! Shaping of transport outcomes into [`NormalizedResult`].
//!
//! Non-JSON bodies:
//! - an empty or whitespace-only body parses as `null` (e.g. `204 No Content`);
//! - a failure status with an undecodable body keeps the server status and uses the
//!   generic fallback message;
//! - a success status with an undecodable body is reported as a transport-level failure
//!   (status 0), since no usable payload was obtained.

use crate::transport::TransportError;
use crate::types::NormalizedResult;
use serde_json::Value;

pub const UNKNOWN_ERROR_FALLBACK: &str = "Unknown error occurred";
pub const NETWORK_ERROR_FALLBACK: &str = "Network error occurred";

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Shape a completed exchange.
pub fn normalize_response(status: u16, body: &[u8]) -> NormalizedResult {
    let parsed = parse_body(body);

    if !is_success_status(status) {
        let message = parsed
            .ok()
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| UNKNOWN_ERROR_FALLBACK.to_string());
        return NormalizedResult::app_failure(status, message);
    }

    match parsed {
        Ok(data) => NormalizedResult::ok(status, data),
        Err(e) => NormalizedResult::transport_failure(format!(
            "Invalid JSON in response body (HTTP {}): {}",
            status, e
        )),
    }
}

/// Shape an exchange that never completed.
pub fn normalize_transport_error(err: &TransportError) -> NormalizedResult {
    let message = err.to_string();
    if message.trim().is_empty() {
        NormalizedResult::transport_failure(NETWORK_ERROR_FALLBACK)
    } else {
        NormalizedResult::transport_failure(message)
    }
}

/// Parsed JSON of a completed failure response, for callers that display it as sent.
///
/// `None` for success statuses and for empty or undecodable bodies.
pub fn failure_body(status: u16, body: &[u8]) -> Option<Value> {
    if is_success_status(status) {
        return None;
    }
    match parse_body(body) {
        Ok(Value::Null) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

fn parse_body(body: &[u8]) -> serde_json::Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
}

/// Error message supplied by the server, if any.
///
/// Accepts `{"error": "..."}` and `{"error": {"message": "..."}}`. Blank strings count
/// as absent.
pub fn server_message(body: &Value) -> Option<String> {
    let message = match body.get("error")? {
        Value::String(s) => Some(s.as_str()),
        Value::Object(obj) => obj.get("message").and_then(Value::as_str),
        _ => None,
    }?;
    if message.trim().is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
