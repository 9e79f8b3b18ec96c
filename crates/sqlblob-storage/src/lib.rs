//! Storage layer for sqlblob
//!
//! This crate provides:
//! - `SqlBackend`, path-keyed object CRUD over a relational table
//! - MySQL (networked) and SQLite (embedded) constructors for the same engine
//! - The `ObjectStore` trait consumed by registry layers
//! - Schema bootstrap

pub mod backend;
pub mod codec;
pub mod dsn;
pub mod error;
pub mod models;
pub mod mysql;
pub mod schema;
pub mod sqlite;
pub mod store;

pub use backend::SqlBackend;
pub use error::{Result, StorageError};
pub use sqlblob_core::{Object, StoreKind};
pub use store::ObjectStore;
