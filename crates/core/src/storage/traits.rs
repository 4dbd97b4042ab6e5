use async_trait::async_trait;

use crate::user::User;

use super::Result;

/// Single-table storage for user records, keyed by `user_id`.
///
/// Every method maps to exactly one storage operation. Faults are returned
/// as-is; implementations never retry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a user, overwriting any record with the same `user_id`.
    async fn put_user(&self, user: &User) -> Result<()>;

    /// Gets a user by id. Returns `Ok(None)` when the key is absent.
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Deletes a user by id. Deleting an absent key is not an error.
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
