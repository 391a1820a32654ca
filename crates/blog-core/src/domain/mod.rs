//! Domain entities - the core business objects.

pub mod metadata;
mod post;
pub mod sample;

pub use metadata::PostMetadata;
pub use post::{Author, DEFAULT_AVATAR, NewPost, Post};
