//! Core library for the userstore service.
//!
//! Pure data types, validation and storage contracts shared by the server,
//! the HTTP client and the developer tasks. Nothing in this crate performs I/O.

pub mod storage;
pub mod user;
