//! DynamoDB repository implementation.
//!
//! Implements [`UserRepository`] with one DynamoDB call per operation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use userstore_core::storage::{Result, UserRepository, ATTR_USER_ID};
use userstore_core::user::User;

use super::conversions::{item_to_user, user_key, user_to_item};
use super::error::{map_delete_item_error, map_get_item_error, map_put_item_error};
use crate::config::Config;

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Uses the AWS SDK default credential chain. The region and optional
    /// endpoint override come from `config`.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()));

        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn put_user(&self, user: &User) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_USER_ID, user_key(user_id))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_USER_ID, user_key(user_id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
