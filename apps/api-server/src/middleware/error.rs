//! Error handling - maps domain and store failures to `{"error": ...}` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::{DomainError, StoreError};
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type rendered as an `ErrorResponse` body.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// A store failure. `context` is the only text the client sees.
    Store {
        context: &'static str,
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with the client-facing message for this operation.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| match source {
            StoreError::Constraint(_) => {
                AppError::Conflict("A post with this slug already exists".to_string())
            }
            source => AppError::Store { context, source },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Store { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail)
            | AppError::BadRequest(detail)
            | AppError::Conflict(detail) => ErrorResponse::new(detail),
            AppError::Store { context, source } => {
                // Log store failures, never leak them
                tracing::error!(error = %source, "{}", context);
                ErrorResponse::new(*context)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_store_error_does_not_leak_detail() {
        let err = AppError::store("Failed to fetch posts")(StoreError::Io(
            "/var/data/posts.json: permission denied".to_string(),
        ));
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Failed to fetch posts"}));
    }

    #[actix_web::test]
    async fn test_constraint_becomes_conflict() {
        let err = AppError::store("Failed to create post")(StoreError::Constraint(
            "slug 'x' already exists".to_string(),
        ));
        let (status, _) = body_of(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_validation_is_bad_request() {
        let err: AppError = DomainError::Validation("title is required".to_string()).into();
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "title is required");
    }
}
