//! # ms-demo-client
//!
//! 微服务演示 API 的客户端层：统一结果信封、资源门面以及交互式请求控制台。
//!
//! Client layer for the microservice demo API (users, products, orders).
//!
//! ## Overview
//!
//! Every operation is a single request/response round trip that always yields a
//! [`NormalizedResult`]: a uniform envelope with `success`, `status`, `data` and `error`.
//! Transport faults (status `0`) and server errors (the server's status) are folded into
//! that envelope at the [`ApiClient`] boundary, so callers never handle raw transport
//! errors or unparsed responses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ms_demo_client::services::{orders, users};
//! use ms_demo_client::types::NewUser;
//! use ms_demo_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> ms_demo_client::Result<()> {
//!     let client = ApiClient::builder()
//!         .base_url("http://localhost:5000")
//!         .build()?;
//!
//!     let created = users::create_user(&client, &NewUser::new("ada", "ada@example.com")).await;
//!     if !created.success {
//!         eprintln!("HTTP {}: {}", created.status, created.error().unwrap_or_default());
//!     }
//!
//!     let mine = orders::get_all_orders(&client, Some("7")).await;
//!     println!("{}", serde_json::to_string_pretty(&mine).unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request normalizer and its builder |
//! | [`transport`] | Injected transport capability and the `reqwest` implementation |
//! | [`services`] | Users, products and orders facades |
//! | [`types`] | Result envelope and typed resource models |
//! | [`console`] | "Try it out" request console and response rendering |

pub mod client;
pub mod console;
pub mod services;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, ApiClientBuilder, Exchange};
pub use transport::{HttpTransport, Method, Transport, TransportError};
pub use types::NormalizedResult;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
