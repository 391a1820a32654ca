//! # Blog Shared
//!
//! Wire types shared between the API server and the client crate.

pub mod dto;
pub mod response;

pub use dto::{DeletePostResponse, HealthResponse};
pub use response::ErrorResponse;
