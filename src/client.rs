//! Request normalizer for the demo API.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod normalize;

pub use builder::ApiClientBuilder;
pub use core::{ApiClient, Exchange};
pub use normalize::{NETWORK_ERROR_FALLBACK, UNKNOWN_ERROR_FALLBACK};
