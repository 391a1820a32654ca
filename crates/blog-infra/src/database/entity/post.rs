//! Post entity for SeaORM - one row per post, author flattened into columns.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::metadata::excerpt_from;
use blog_core::{Author, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    pub date: String,
    pub read_time: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub author_name: String,
    #[sea_orm(column_type = "Text")]
    pub author_avatar: String,
    #[sea_orm(column_type = "Text")]
    pub student_name: String,
    #[sea_orm(column_type = "Text")]
    pub source: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the wire-shaped domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        let excerpt = match model.excerpt {
            Some(excerpt) => excerpt,
            None => excerpt_from(&model.content),
        };

        Self {
            id: model.id,
            slug: model.slug,
            title: model.title,
            excerpt,
            date: model.date,
            read_time: model.read_time,
            category: model.category,
            author: Author {
                name: model.author_name,
                avatar: model.author_avatar,
            },
            student_name: model.student_name,
            source: model.source,
            content: model.content,
        }
    }
}

/// Conversion from a domain Post to an insertable ActiveModel.
///
/// The id is left unset so the database's identity column assigns it.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: NotSet,
            slug: Set(post.slug),
            title: Set(post.title),
            excerpt: Set(Some(post.excerpt)),
            date: Set(post.date),
            read_time: Set(post.read_time),
            category: Set(post.category),
            author_name: Set(post.author.name),
            author_avatar: Set(post.author.avatar),
            student_name: Set(post.student_name),
            source: Set(post.source),
            content: Set(post.content),
            created_at: Set(chrono::Utc::now()),
        }
    }
}
