//! User API operations.

use super::UserstoreClient;
use crate::error::Result;
use userstore_core::user::{CreateUserRequest, CreateUserResponse, MessageResponse, User};

impl UserstoreClient {
    /// Create a new user. The server assigns the id.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<CreateUserResponse> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(&CreateUserRequest::new(name, email))
            .send()
            .await?;
        self.handle_response(response, "User").await
    }

    /// Get user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let response = self.client.get(self.user_url(user_id)?).send().await?;
        self.handle_response(response, &format!("User {user_id}"))
            .await
    }

    /// Delete user by ID. Succeeds even if the user did not exist.
    pub async fn delete_user(&self, user_id: &str) -> Result<MessageResponse> {
        let response = self.client.delete(self.user_url(user_id)?).send().await?;
        self.handle_response(response, &format!("User {user_id}"))
            .await
    }
}
