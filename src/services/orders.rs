//! Order service operations. Orders have no delete endpoint.

use super::paths;
use crate::{ApiClient, NormalizedResult};
use serde::Serialize;
use serde_json::json;

/// List orders, optionally restricted to one owner.
pub async fn get_all_orders(client: &ApiClient, user_id: Option<&str>) -> NormalizedResult {
    client.get(&paths::orders(user_id)).await
}

pub async fn get_order(client: &ApiClient, order_id: &str) -> NormalizedResult {
    client.get(&paths::order(order_id)).await
}

pub async fn create_order<B>(client: &ApiClient, order: &B) -> NormalizedResult
where
    B: Serialize + ?Sized,
{
    client.post(paths::ORDERS, order).await
}

/// Partial update of the `status` sub-resource; only the new status is sent.
pub async fn update_order_status(
    client: &ApiClient,
    order_id: &str,
    status: impl AsRef<str>,
) -> NormalizedResult {
    let body = json!({ "status": status.as_ref() });
    client.put(&paths::order_status(order_id), &body).await
}
