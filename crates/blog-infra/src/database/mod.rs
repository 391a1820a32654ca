//! Relational post storage (PostgreSQL and MySQL) via SeaORM.

mod connections;

#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod post_store;

pub use connections::{DatabaseConfig, DatabaseDriver, DatabaseParts};

#[cfg(feature = "database")]
pub use connections::connect;
#[cfg(feature = "database")]
pub use post_store::SeaOrmPostStore;
#[cfg(feature = "database")]
pub use sea_orm::DatabaseConnection;

#[cfg(feature = "database")]
#[cfg(test)]
mod tests;
