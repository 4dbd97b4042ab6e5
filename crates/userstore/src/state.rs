//! Application state with repository-based storage.
//!
//! The storage client is built once at startup and shared with every handler
//! through axum's `State` extractor. The backend is chosen at compile time via
//! feature flags.

use std::sync::Arc;

use userstore_core::storage::UserRepository;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request. Holds no mutable data of its own.
#[derive(Clone)]
pub struct AppState {
    /// User repository (the storage client).
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn with_repository(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for local development without any external dependencies.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;

            tracing::info!(
                table = %repo.table_name(),
                region = %config.aws_region,
                endpoint = ?config.aws_endpoint_url,
                "Using DynamoDB storage"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::InMemoryRepository::new()))
    }
}
