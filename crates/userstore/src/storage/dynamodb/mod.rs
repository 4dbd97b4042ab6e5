//! DynamoDB storage backend implementation.
//!
//! One table, partition key `user_id` (S), attributes `name` and `email`.
//! No sort key and no secondary indexes.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
