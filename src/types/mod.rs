//! 类型模块：统一结果信封与资源模型。
//!
//! # Types Module
//!
//! | Type | Description |
//! |------|-------------|
//! | [`NormalizedResult`] | Uniform success/failure envelope returned by every request |
//! | [`User`], [`Product`], [`Order`] | Typed server records |
//! | [`NewUser`], [`NewProduct`], [`NewOrder`] | Creation payloads |
//! | [`OrderStatus`] | Order lifecycle values |
//!
//! ## Example
//!
//! ```rust
//! use ms_demo_client::types::{NormalizedResult, User};
//! use serde_json::json;
//!
//! let result = NormalizedResult::ok(200, json!({
//!     "success": true,
//!     "user": {"id": "1", "username": "ada", "email": "ada@example.com"}
//! }));
//! let user: User = result.decode_field("user").unwrap();
//! assert_eq!(user.username, "ada");
//! ```

pub mod models;
pub mod result;

pub use models::{
    NewOrder, NewOrderItem, NewProduct, NewUser, Order, OrderItem, OrderStatus, Product,
    ProductUpdate, User, UserUpdate,
};
pub use result::NormalizedResult;
