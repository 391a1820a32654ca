//! In-memory post store - used for tests, demos, and as the fallback when the
//! database is unreachable at startup.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::metadata::{self, PostMetadata};
use blog_core::domain::sample::sample_posts;
use blog_core::{NewPost, Post, PostStore, StoreError};

#[derive(Default)]
struct Records {
    by_id: BTreeMap<i64, Post>,
    /// Secondary unique index: slug -> id.
    slugs: HashMap<String, i64>,
    /// Last id handed out. Never decreases, so ids are not reused after a delete.
    last_id: i64,
}

impl Records {
    fn insert(&mut self, post: Post) {
        self.last_id = self.last_id.max(post.id);
        self.slugs.insert(post.slug.clone(), post.id);
        self.by_id.insert(post.id, post);
    }
}

/// In-memory post store keyed by id, with slug as a secondary unique index.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    records: RwLock<Records>,
}

impl InMemoryPostStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records::default()),
        }
    }

    /// A store pre-loaded with the given posts.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut records = Records::default();
        for post in posts {
            records.insert(post);
        }
        Self {
            records: RwLock::new(records),
        }
    }

    /// A store pre-loaded with the built-in sample dataset.
    pub fn with_samples() -> Self {
        Self::with_posts(sample_posts())
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let records = self.records.read().await;
        Ok(records.by_id.values().rev().cloned().collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .slugs
            .get(slug)
            .and_then(|id| records.by_id.get(id))
            .cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let metadata = PostMetadata::derive(&new_post, metadata::today());

        // Slug check and id allocation happen under one write lock
        let mut records = self.records.write().await;
        if records.slugs.contains_key(&metadata.slug) {
            return Err(StoreError::Constraint(format!(
                "slug '{}' already exists",
                metadata.slug
            )));
        }

        let id = records.last_id + 1;
        let post = new_post.into_post(id, metadata);
        records.insert(post.clone());

        tracing::debug!(post_id = id, slug = %post.slug, "Post created in memory");
        Ok(post)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.by_id.remove(&id) {
            Some(post) => {
                records.slugs.remove(&post.slug);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::Author;

    fn submission(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            excerpt: None,
            category: "Development".to_string(),
            author: Author {
                name: "Grace".to_string(),
                avatar: String::new(),
            },
            student_name: "GH2024".to_string(),
            source: "https://example.com".to_string(),
            content: "x".repeat(2500),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_metadata() {
        let store = InMemoryPostStore::new();
        let post = store.create(submission("Hello, World!")).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.read_time, "3 min read");
    }

    #[tokio::test]
    async fn test_create_then_get_by_slug() {
        let store = InMemoryPostStore::with_samples();
        let created = store.create(submission("Round Trip")).await.unwrap();

        let fetched = store.get_by_slug("round-trip").await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_new_id_exceeds_existing() {
        let store = InMemoryPostStore::with_samples();
        let post = store.create(submission("Third")).await.unwrap();
        assert_eq!(post.id, 3);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryPostStore::new();
        let first = store.create(submission("First")).await.unwrap();
        assert!(store.delete_by_id(first.id).await.unwrap());

        let second = store.create(submission("Second")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryPostStore::with_samples();
        store.create(submission("Newest")).await.unwrap();

        let slugs: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(
            slugs,
            vec!["newest", "mastering-tailwind-css", "getting-started-with-nextjs"]
        );
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let store = InMemoryPostStore::new();
        store.create(submission("Same Title")).await.unwrap();
        let err = store.create(submission("Same  Title")).await.unwrap_err();

        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id() {
        let store = InMemoryPostStore::with_samples();
        assert!(!store.delete_by_id(99).await.unwrap());
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_slug() {
        let store = InMemoryPostStore::with_samples();
        assert_eq!(store.get_by_slug("never-created").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_frees_slug() {
        let store = InMemoryPostStore::with_samples();
        assert!(store.delete_by_id(1).await.unwrap());
        assert_eq!(
            store.get_by_slug("getting-started-with-nextjs").await.unwrap(),
            None
        );
    }
}
