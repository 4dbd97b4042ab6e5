//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use userstore_core::storage::{Result, UserRepository};
use userstore_core::user::User;

/// In-memory storage backend.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn put_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        users.insert(user.user_id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).cloned())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let mut users = self.users.write().await;
        users.remove(user_id);
        Ok(())
    }
}
