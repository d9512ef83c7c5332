//! SQLite storage implementation for Quoteshelf.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `quoteshelf-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - The quote repository implementation
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Everything else is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod quotes;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, write_actor, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from quoteshelf-core for convenience
pub use quoteshelf_core::errors::{DatabaseError, Error, Result};
