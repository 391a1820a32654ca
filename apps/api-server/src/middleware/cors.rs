//! CORS policy for the front end.

use actix_cors::Cors;
use actix_web::http::header;

/// Only the configured front-end origin may call the API from a browser.
pub fn cors_policy(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
