//! SQLite storage implementation for the stock market app.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the listing cache trait defined in `stockmarket-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that serializes every write
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! `core` is database-agnostic and works with [`ListingStoreTrait`].
//!
//! ```text
//!            core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! [`ListingStoreTrait`]: stockmarket_core::listings::ListingStoreTrait

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod listings;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use listings::ListingRepository;

// Re-export from stockmarket-core for convenience
pub use stockmarket_core::errors::{DatabaseError, Error, Result};
