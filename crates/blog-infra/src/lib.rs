//! # Blog Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, file and in-memory stores only
//! - `database` - PostgreSQL and MySQL support via SeaORM

pub mod database;
pub mod store;

// Re-exports - always available
pub use database::{DatabaseConfig, DatabaseDriver};
pub use store::{InMemoryPostStore, JsonFilePostStore};

// Re-exports - Database
#[cfg(feature = "database")]
pub use database::{DatabaseConnection, SeaOrmPostStore};
