use crate::console::ConsoleError;
use crate::transport::TransportError;
use thiserror::Error;

/// Where a construction or decoding fault was found.
///
/// `field_path` is a builder setting (`base_url`, `proxy_url`) or a payload path
/// (`data.user`). `component` names the part of the crate that rejected the input:
/// `http_transport`, `method_parser` or `result_decoder`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub field_path: Option<String>,
    /// What was expected instead, e.g. `http or https`.
    pub details: Option<String>,
    pub component: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }
}

/// Crate-level error type.
///
/// Facade and normalizer operations never return this: they fold every outcome into a
/// [`NormalizedResult`](crate::NormalizedResult). It is used for client construction,
/// typed decoding of results and the request console.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

/// ` (field: base_url, in: http_transport)`, or nothing for an empty context.
fn format_context(ctx: &ErrorContext) -> String {
    let labeled = [
        ("field", &ctx.field_path),
        ("expected", &ctx.details),
        ("in", &ctx.component),
    ];
    let parts: Vec<String> = labeled
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| format!("{}: {}", label, v)))
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!(" ({})", parts.join(", "))
}

impl Error {
    /// A builder setting was rejected.
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }

    /// HTTP status carried by the error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
