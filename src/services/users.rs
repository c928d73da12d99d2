//! User service operations.

use super::paths;
use crate::{ApiClient, NormalizedResult};
use serde::Serialize;

pub async fn get_all_users(client: &ApiClient) -> NormalizedResult {
    client.get(paths::USERS).await
}

pub async fn get_user(client: &ApiClient, user_id: &str) -> NormalizedResult {
    client.get(&paths::user(user_id)).await
}

pub async fn create_user<B>(client: &ApiClient, user: &B) -> NormalizedResult
where
    B: Serialize + ?Sized,
{
    client.post(paths::USERS, user).await
}

pub async fn update_user<B>(client: &ApiClient, user_id: &str, user: &B) -> NormalizedResult
where
    B: Serialize + ?Sized,
{
    client.put(&paths::user(user_id), user).await
}

pub async fn delete_user(client: &ApiClient, user_id: &str) -> NormalizedResult {
    client.delete(&paths::user(user_id)).await
}
