//! # Blog Core
//!
//! The domain layer of the class blog.
//! This crate contains the post model, the metadata deriver and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Author, NewPost, Post};
pub use error::{DomainError, StoreError};
pub use ports::PostStore;
