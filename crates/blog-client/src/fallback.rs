//! Sample-data fallback decorator.

use async_trait::async_trait;

use blog_core::domain::sample::sample_posts;
use blog_core::{NewPost, Post, PostStore, StoreError};

/// Wraps a primary store and serves the built-in sample posts whenever the
/// primary is missing or a read from it fails.
///
/// The sample set is read-only: without a primary, `create` fails with
/// [`StoreError::ReadOnly`] and `delete_by_id` removes nothing. Write errors
/// from a configured primary are passed through unchanged.
pub struct FallbackPostStore<S> {
    primary: Option<S>,
    /// Newest first, matching the store contract.
    samples: Vec<Post>,
}

impl<S> FallbackPostStore<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary: Some(primary),
            samples: Self::sorted_samples(),
        }
    }

    /// No primary at all: every read is served from the sample set.
    pub fn samples_only() -> Self {
        Self {
            primary: None,
            samples: Self::sorted_samples(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.primary.is_none()
    }

    fn sorted_samples() -> Vec<Post> {
        let mut samples = sample_posts();
        samples.sort_by(|a, b| b.id.cmp(&a.id));
        samples
    }

    fn sample_by_slug(&self, slug: &str) -> Option<Post> {
        self.samples.iter().find(|p| p.slug == slug).cloned()
    }
}

#[async_trait]
impl<S: PostStore> PostStore for FallbackPostStore<S> {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let Some(primary) = &self.primary else {
            return Ok(self.samples.clone());
        };

        match primary.list_all().await {
            Ok(posts) => Ok(posts),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching posts, serving sample data");
                Ok(self.samples.clone())
            }
        }
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let Some(primary) = &self.primary else {
            return Ok(self.sample_by_slug(slug));
        };

        match primary.get_by_slug(slug).await {
            Ok(post) => Ok(post),
            Err(e) => {
                tracing::warn!(slug, error = %e, "Error fetching post, serving sample data");
                Ok(self.sample_by_slug(slug))
            }
        }
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        match &self.primary {
            Some(primary) => primary.create(new_post).await,
            None => {
                tracing::warn!("Cannot create posts while serving sample data");
                Err(StoreError::ReadOnly)
            }
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        match &self.primary {
            Some(primary) => primary.delete_by_id(id).await,
            None => {
                tracing::warn!(post_id = id, "Cannot delete posts while serving sample data");
                Ok(false)
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match &self.primary {
            Some(primary) => primary.ping().await,
            None => Err(StoreError::Unavailable("no API configured".to_string())),
        }
    }

    fn backend(&self) -> &'static str {
        match &self.primary {
            Some(primary) => primary.backend(),
            None => "sample",
        }
    }
}
