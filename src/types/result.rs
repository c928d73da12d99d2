//! The uniform envelope returned by every request operation.

use crate::client::UNKNOWN_ERROR_FALLBACK;
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform success/failure envelope.
///
/// - `success` is true iff the exchange completed with a 2xx status.
/// - `status` is the server status, or `0` when the exchange never completed.
/// - Exactly one of `data` / `error` is populated.
///
/// Deserialization restores that invariant from the wire form: a success always gets
/// `data` (JSON `null` stays `Some(Value::Null)`), a failure always gets `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireResult")]
pub struct NormalizedResult {
    pub success: bool,
    pub status: u16,
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize)]
struct WireResult {
    success: bool,
    status: u16,
    #[serde(default, deserialize_with = "present_value")]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// `"data": null` is a present value; only a missing key is `None`.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl From<WireResult> for NormalizedResult {
    fn from(wire: WireResult) -> Self {
        if wire.success {
            Self::ok(wire.status, wire.data.unwrap_or(Value::Null))
        } else {
            Self::app_failure(
                wire.status,
                wire.error.unwrap_or_else(|| UNKNOWN_ERROR_FALLBACK.to_string()),
            )
        }
    }
}

impl NormalizedResult {
    pub fn ok(status: u16, data: Value) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            error: None,
        }
    }

    /// The server answered with a non-success status.
    pub fn app_failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            data: None,
            error: Some(message.into()),
        }
    }

    /// The exchange never completed.
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::app_failure(0, message)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_transport_failure(&self) -> bool {
        !self.success && self.status == 0
    }

    pub fn is_app_failure(&self) -> bool {
        !self.success && self.status != 0
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn failure_error(&self) -> Error {
        Error::Api {
            status: self.status,
            message: self
                .error
                .clone()
                .unwrap_or_else(|| UNKNOWN_ERROR_FALLBACK.to_string()),
        }
    }

    /// Convert into a plain `Result`, turning failures into [`Error::Api`].
    pub fn into_result(self) -> Result<Value> {
        if !self.success {
            return Err(self.failure_error());
        }
        Ok(self.data.unwrap_or(Value::Null))
    }

    /// Deserialize the whole payload into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.success {
            return Err(self.failure_error());
        }
        let data = self.data.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Deserialize one top-level field of the payload into `T`.
    ///
    /// The demo server wraps records, e.g. `{"success": true, "user": {...}}`.
    pub fn decode_field<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        if !self.success {
            return Err(self.failure_error());
        }
        let field = self
            .data
            .as_ref()
            .and_then(|d| d.get(key))
            .cloned()
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Response payload has no '{}' field", key),
                    ErrorContext::new()
                        .with_field_path(format!("data.{}", key))
                        .with_component("result_decoder"),
                )
            })?;
        Ok(serde_json::from_value(field)?)
    }
}
