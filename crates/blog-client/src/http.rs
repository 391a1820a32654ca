//! `PostStore` over the blog's REST API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use blog_core::{NewPost, Post, PostStore, StoreError};
use blog_shared::{DeletePostResponse, ErrorResponse};

/// Remote post store talking to `{base}/posts` and `{base}/health`.
#[derive(Debug, Clone)]
pub struct HttpPostStore {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpPostStore {
    /// Create a store for the API rooted at `base_url` (e.g. `http://localhost:3001/api`).
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Connection(format!("invalid API URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Connection(format!(
                "invalid API URL '{base_url}'"
            )));
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

/// A misconfigured endpoint (e.g. a front-end host answering with its HTML
/// error page) must not be mistaken for an API response.
fn ensure_json(response: &Response) -> Result<(), StoreError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.contains("json") {
        Ok(())
    } else {
        Err(StoreError::Unavailable(format!(
            "expected JSON from {}, got '{}'",
            response.url(),
            content_type
        )))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    ensure_json(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Turn a non-success response into a `StoreError`, keeping the server's message if any.
async fn failure(response: Response) -> StoreError {
    let status = response.status();
    let message = match read_json::<ErrorResponse>(response).await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };

    match status {
        StatusCode::CONFLICT => StoreError::Constraint(message),
        _ => StoreError::Query(format!("API responded {status}: {message}")),
    }
}

#[async_trait]
impl PostStore for HttpPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let response = self
            .http
            .get(self.endpoint(&["posts"]))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }
        read_json(response).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let response = self
            .http
            .get(self.endpoint(&["posts", slug]))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => read_json(response).await.map(Some),
            _ => Err(failure(response).await),
        }
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let response = self
            .http
            .post(self.endpoint(&["posts"]))
            .json(&new_post)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response).await);
        }
        read_json(response).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let response = self
            .http
            .delete(self.endpoint(&["posts", &id.to_string()]))
            .send()
            .await
            .map_err(transport_error)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => {
                let body: DeletePostResponse = read_json(response).await?;
                Ok(body.success)
            }
            _ => Err(failure(response).await),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let response = self
            .http
            .get(self.endpoint(&["health"]))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            ensure_json(&response)
        } else {
            Err(StoreError::Unavailable(format!(
                "health check responded {}",
                response.status()
            )))
        }
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}
