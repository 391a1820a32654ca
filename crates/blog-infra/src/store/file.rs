//! JSON file post store - a single pretty-printed array of wire-shaped posts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use blog_core::domain::metadata::{self, PostMetadata, excerpt_from};
use blog_core::domain::sample::sample_posts;
use blog_core::{Author, NewPost, Post, PostStore, StoreError};

/// A post as stored on disk. Older files may lack `excerpt` or hold `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostRecord {
    id: i64,
    slug: String,
    title: String,
    #[serde(default)]
    excerpt: Option<String>,
    date: String,
    read_time: String,
    category: String,
    author: Author,
    student_name: String,
    source: String,
    content: String,
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        let excerpt = match record.excerpt {
            Some(excerpt) => excerpt,
            None => excerpt_from(&record.content),
        };

        Self {
            id: record.id,
            slug: record.slug,
            title: record.title,
            excerpt,
            date: record.date,
            read_time: record.read_time,
            category: record.category,
            author: record.author,
            student_name: record.student_name,
            source: record.source,
            content: record.content,
        }
    }
}

/// Post store persisted to a JSON file.
///
/// Every create and delete is a full read-modify-write of the file. Writes
/// within this process are serialized by `write_lock`; separate processes
/// sharing the file are not coordinated.
pub struct JsonFilePostStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePostStore {
    /// Open the store at `path`, creating the parent directory and seeding the
    /// sample dataset if the file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        if !fs::try_exists(&store.path).await? {
            tracing::info!(path = %store.path.display(), "Posts file missing, seeding sample posts");
            store.write_posts(&sample_posts()).await?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_posts(&self) -> Result<Vec<Post>, StoreError> {
        let bytes = fs::read(&self.path).await?;
        let records: Vec<PostRecord> = serde_json::from_slice(&bytes)?;
        Ok(records.into_iter().map(Post::from).collect())
    }

    /// Overwrite the file via a synced temporary sibling and a rename.
    async fn write_posts(&self, posts: &[Post]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(posts)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp).await?;
        file.write_all(&json).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&tmp, &self.path).await?;

        // Make the rename itself durable
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = fs::File::open(parent).await {
                let _ = dir.sync_all().await;
            }
        }
        Ok(())
    }
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.id.cmp(&a.id));
    posts
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.read_posts().await.inspect_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Error reading posts");
        })?;
        Ok(newest_first(posts))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        let posts = self.read_posts().await?;
        Ok(posts.into_iter().find(|p| p.slug == slug))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.read_posts().await?;
        let metadata = PostMetadata::derive(&new_post, metadata::today());
        if posts.iter().any(|p| p.slug == metadata.slug) {
            return Err(StoreError::Constraint(format!(
                "slug '{}' already exists",
                metadata.slug
            )));
        }

        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = new_post.into_post(id, metadata);
        posts.push(post.clone());
        self.write_posts(&posts).await?;

        tracing::debug!(post_id = id, slug = %post.slug, "Post written to file");
        Ok(post)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.read_posts().await?;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Ok(false);
        }

        self.write_posts(&posts).await?;
        Ok(true)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        fs::metadata(&self.path).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
