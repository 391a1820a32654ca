//! Data Transfer Objects - response bodies that are not a post.

use serde::{Deserialize, Serialize};

/// Body returned by `DELETE /api/posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub success: bool,
    pub message: String,
}

impl DeletePostResponse {
    pub fn deleted() -> Self {
        Self {
            success: true,
            message: "Post deleted successfully".to_string(),
        }
    }
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub backend: String,
    pub database: String,
    pub version: String,
    pub timestamp: String,
}
