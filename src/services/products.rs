//! Product service operations.

use super::paths;
use crate::{ApiClient, NormalizedResult};
use serde::Serialize;

pub async fn get_all_products(client: &ApiClient) -> NormalizedResult {
    client.get(paths::PRODUCTS).await
}

pub async fn get_product(client: &ApiClient, product_id: &str) -> NormalizedResult {
    client.get(&paths::product(product_id)).await
}

pub async fn create_product<B>(client: &ApiClient, product: &B) -> NormalizedResult
where
    B: Serialize + ?Sized,
{
    client.post(paths::PRODUCTS, product).await
}

pub async fn update_product<B>(client: &ApiClient, product_id: &str, product: &B) -> NormalizedResult
where
    B: Serialize + ?Sized,
{
    client.put(&paths::product(product_id), product).await
}

pub async fn delete_product(client: &ApiClient, product_id: &str) -> NormalizedResult {
    client.delete(&paths::product(product_id)).await
}
