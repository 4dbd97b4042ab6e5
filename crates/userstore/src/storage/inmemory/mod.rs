//! In-memory storage backend.
//!
//! Stores users in a `HashMap` wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; useful for tests and local development.
//!
//! # Example
//!
//! ```rust,ignore
//! use userstore::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
