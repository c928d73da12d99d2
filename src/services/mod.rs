//! 资源门面模块：用户、商品、订单三组薄封装。
//!
//! # Resource Facades
//!
//! Each submodule is a fixed set of one-line adapters: build a resource path and delegate
//! to the [`ApiClient`](crate::ApiClient) with the matching method. No client-side
//! validation happens; the server's error response comes back through
//! [`NormalizedResult::error`](crate::NormalizedResult::error).
//!
//! | Module | Collection |
//! |--------|------------|
//! | [`users`] | `/api/users` |
//! | [`products`] | `/api/products` |
//! | [`orders`] | `/api/orders` |
//!
//! ```rust,no_run
//! use ms_demo_client::{services::{orders, users}, ApiClient};
//!
//! # async fn demo() -> ms_demo_client::Result<()> {
//! let client = ApiClient::builder().base_url("http://localhost:5000").build()?;
//! let user = users::get_user(&client, "42").await;
//! let shipped = orders::update_order_status(&client, "9", "shipped").await;
//! println!("{} {}", user.status, shipped.success);
//! # Ok(())
//! # }
//! ```

pub mod orders;
pub mod paths;
pub mod products;
pub mod users;
