//! Post handlers - list, fetch by slug, create, delete.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use blog_core::{DomainError, NewPost};
use blog_shared::{DeletePostResponse, ErrorResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(AppError::store("Failed to fetch posts"))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = slug.into_inner();
    let post = state
        .posts
        .get_by_slug(&slug)
        .await
        .map_err(AppError::store("Failed to fetch post"))?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            key: slug,
        })?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner();
    new_post.validate()?;

    let post = state
        .posts
        .create(new_post)
        .await
        .map_err(AppError::store("Failed to create post"))?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post created");
    Ok(HttpResponse::Created().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Ok(id) = id.trim().parse::<i64>() else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::invalid_post_id()));
    };

    let deleted = state
        .posts
        .delete_by_id(id)
        .await
        .map_err(AppError::store("Failed to delete post"))?;

    if !deleted {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::post_not_found()));
    }

    tracing::info!(post_id = id, "Post deleted");
    Ok(HttpResponse::Ok().json(DeletePostResponse::deleted()))
}

/// Body parse failures on create are reported like any other create failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::error!(error = %err, "Malformed post body");
        let response = HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Failed to create post"));
        InternalError::from_response(err, response).into()
    })
}
