//! Health check endpoint.

use actix_web::{HttpResponse, web};
use blog_shared::HealthResponse;

use crate::state::AppState;

/// Health check endpoint - returns server status and store connectivity.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let reachable = match state.posts.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: post store unreachable");
            false
        }
    };

    let response = HealthResponse {
        status: if reachable { "ok" } else { "degraded" }.to_string(),
        environment: state.environment.clone(),
        backend: state.posts.backend().to_string(),
        database: if reachable { "connected" } else { "unreachable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if reachable {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
