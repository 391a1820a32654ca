use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::StoreError;

/// Post store - abstraction over the persistence backends (JSON file,
/// in-memory, relational database, remote REST API).
///
/// Every backend honours the same contract: listing is newest-first, a missing
/// slug or id is not an error, and `create` assigns `id`, `slug`, `date` and
/// `readTime` itself.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, newest first.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// The post with this slug, if any.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError>;

    /// Persist a new post and return the stored record.
    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError>;

    /// Remove a post. Returns `false` when no post had this id.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Check that the backing medium is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Short backend name, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
