//! SQLite storage implementation for the forex converter.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the ledger repository trait defined in
//! `forex-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The conversion ledger repository
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `forex-core` is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod conversions;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from forex-core for convenience
pub use forex_core::errors::{DatabaseError, Error, Result};
