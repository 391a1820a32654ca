//! Front-end facing client facade.

use reqwest::Url;

use blog_core::{DomainError, NewPost, Post, PostStore, StoreError};

use crate::config::ClientConfig;
use crate::fallback::FallbackPostStore;
use crate::http::HttpPostStore;

/// Client-side submission and transport errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid source URL: {0}")]
    InvalidSource(String),

    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Blog API client. Reads always produce something to render; writes report
/// failure instead of raising it to the page.
pub struct BlogClient<S = HttpPostStore> {
    store: FallbackPostStore<S>,
}

impl BlogClient<HttpPostStore> {
    /// Build a client from configuration. An unset, placeholder or unparseable
    /// API URL puts the client in sample-data mode.
    pub fn new(config: &ClientConfig) -> Self {
        let Some(url) = config.configured_url() else {
            tracing::warn!("API URL not configured, serving sample data");
            return Self::from_store(FallbackPostStore::samples_only());
        };

        match HttpPostStore::new(url) {
            Ok(http) => Self::from_store(FallbackPostStore::new(http)),
            Err(e) => {
                tracing::warn!(error = %e, "Unusable API URL, serving sample data");
                Self::from_store(FallbackPostStore::samples_only())
            }
        }
    }

    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }
}

impl<S: PostStore> BlogClient<S> {
    pub fn from_store(store: FallbackPostStore<S>) -> Self {
        Self { store }
    }

    /// Whether reads are served from the built-in sample set.
    pub fn is_fallback(&self) -> bool {
        self.store.is_fallback()
    }

    /// All posts, newest first.
    pub async fn posts(&self) -> Vec<Post> {
        match self.store.list_all().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching posts");
                Vec::new()
            }
        }
    }

    /// One post by slug, `None` when missing.
    pub async fn post(&self, slug: &str) -> Option<Post> {
        match self.store.get_by_slug(slug).await {
            Ok(post) => post,
            Err(e) => {
                tracing::error!(slug, error = %e, "Error fetching post");
                None
            }
        }
    }

    /// Validate and submit a new article.
    pub async fn submit(&self, new_post: NewPost) -> Result<Post, ClientError> {
        validate_source(&new_post.source)?;
        new_post.validate()?;

        self.store.create(new_post).await.map_err(|e| {
            tracing::error!(error = %e, "Error creating post");
            ClientError::Store(e)
        })
    }

    /// Delete a post. `false` when nothing was deleted, for any reason.
    pub async fn delete(&self, id: i64) -> bool {
        match self.store.delete_by_id(id).await {
            Ok(deleted) => deleted,
            Err(e) => {
                tracing::error!(post_id = id, error = %e, "Error deleting post");
                false
            }
        }
    }
}

/// The source must be an absolute URL.
fn validate_source(source: &str) -> Result<(), ClientError> {
    Url::parse(source.trim())
        .map(|_| ())
        .map_err(|_| ClientError::InvalidSource(source.to_string()))
}
