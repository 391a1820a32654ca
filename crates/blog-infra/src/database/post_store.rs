//! Relational post store, shared by the PostgreSQL and MySQL backends.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use blog_core::domain::metadata::{self, PostMetadata};
use blog_core::domain::sample::sample_posts;
use blog_core::{NewPost, Post, PostStore, StoreError};

use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by the `posts` table.
pub struct SeaOrmPostStore {
    db: DatabaseConnection,
}

impl SeaOrmPostStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert the sample dataset when the table is empty. Returns how many rows were seeded.
    pub async fn seed_if_empty(&self) -> Result<usize, StoreError> {
        let count = PostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)?;
        if count > 0 {
            return Ok(0);
        }

        let samples = sample_posts();
        let seeded = samples.len();
        for sample in samples {
            let active: post::ActiveModel = sample.into();
            active.insert(&self.db).await.map_err(write_error)?;
        }

        tracing::info!(seeded, "Posts table seeded with sample posts");
        Ok(seeded)
    }
}

fn query_error(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

fn write_error(err: DbErr) -> StoreError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("Duplicate") || err_str.contains("unique")
    {
        StoreError::Constraint("post already exists".to_string())
    } else {
        query_error(err)
    }
}

#[async_trait]
impl PostStore for SeaOrmPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Post>, StoreError> {
        tracing::debug!(slug, "Finding post by slug");

        let row = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, StoreError> {
        let metadata = PostMetadata::derive(&new_post, metadata::today());
        // id is assigned by the database; the placeholder never reaches the row
        let active: post::ActiveModel = new_post.into_post(0, metadata).into();

        let model = active.insert(&self.db).await.map_err(write_error)?;
        tracing::debug!(post_id = model.id, slug = %model.slug, "Post inserted");

        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await.map_err(query_error)
    }

    fn backend(&self) -> &'static str {
        match self.db.get_database_backend() {
            DatabaseBackend::Postgres => "postgres",
            DatabaseBackend::MySql => "mysql",
            _ => "sqlite",
        }
    }
}
