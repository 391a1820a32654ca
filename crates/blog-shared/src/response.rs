//! Error body returned by every failing API call: `{"error": "..."}`.

use serde::{Deserialize, Serialize};

/// Short, client-safe error message. Internal details are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn post_not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn invalid_post_id() -> Self {
        Self::new("Invalid post ID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let json = serde_json::to_string(&ErrorResponse::post_not_found()).unwrap();
        assert_eq!(json, r#"{"error":"Post not found"}"#);
    }
}
