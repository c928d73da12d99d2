//! Resource path construction.
//!
//! Identifiers are substituted verbatim; the `user_id` filter value is form-urlencoded.

use url::form_urlencoded;

pub const USERS: &str = "/api/users";
pub const PRODUCTS: &str = "/api/products";
pub const ORDERS: &str = "/api/orders";

pub fn user(id: &str) -> String {
    format!("{}/{}", USERS, id)
}

pub fn product(id: &str) -> String {
    format!("{}/{}", PRODUCTS, id)
}

pub fn order(id: &str) -> String {
    format!("{}/{}", ORDERS, id)
}

pub fn order_status(id: &str) -> String {
    format!("{}/{}/status", ORDERS, id)
}

/// Order listing, filtered by owner only when a non-empty id is supplied.
pub fn orders(user_id: Option<&str>) -> String {
    match user_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("user_id", id)
                .finish();
            format!("{}?{}", ORDERS, query)
        }
        None => ORDERS.to_string(),
    }
}
