use serde::{Deserialize, Serialize};

use super::metadata::{PostMetadata, slugify};
use crate::error::DomainError;

/// Avatar used when a submission leaves `author.avatar` blank.
pub const DEFAULT_AVATAR: &str = "/placeholder.svg?height=80&width=80";

/// Author block embedded in every post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// Post entity - a student article, in its wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub author: Author,
    pub student_name: String,
    pub source: String,
    pub content: String,
}

/// A submitted article: every post field except the server-assigned ones
/// (`id`, `slug`, `date`, `readTime`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub content: String,
}

impl NewPost {
    /// Check that every required field is present.
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("title", &self.title),
            ("content", &self.content),
            ("category", &self.category),
            ("author.name", &self.author.name),
            ("studentName", &self.student_name),
            ("source", &self.source),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{field} is required")));
            }
        }

        if slugify(&self.title).is_empty() {
            return Err(DomainError::Validation(
                "title must contain at least one letter or digit".to_string(),
            ));
        }

        Ok(())
    }

    /// Assemble the stored record from this submission, a store-assigned id and
    /// the derived metadata.
    pub fn into_post(self, id: i64, metadata: PostMetadata) -> Post {
        let avatar = if self.author.avatar.trim().is_empty() {
            DEFAULT_AVATAR.to_string()
        } else {
            self.author.avatar
        };

        Post {
            id,
            slug: metadata.slug,
            title: self.title,
            excerpt: metadata.excerpt,
            date: metadata.date,
            read_time: metadata.read_time,
            category: self.category,
            author: Author {
                name: self.author.name,
                avatar,
            },
            student_name: self.student_name,
            source: self.source,
            content: self.content,
        }
    }
}
