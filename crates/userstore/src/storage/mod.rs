//! Storage backend implementations.
//!
//! Concrete implementations of [`userstore_core::storage::UserRepository`],
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): `HashMap` storage, lost on restart
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p userstore --no-default-features --features dynamodb
//! ```

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
