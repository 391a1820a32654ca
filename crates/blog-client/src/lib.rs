//! # Blog Client
//!
//! What a front end uses to talk to the blog API. Reads never fail: when the
//! API is unconfigured or unreachable the built-in sample posts are served
//! instead. Writes in that mode are refused.

mod client;
mod config;
mod fallback;
mod http;

pub use client::{BlogClient, ClientError};
pub use config::{API_URL_ENV, ClientConfig, PLACEHOLDER_API_URL};
pub use fallback::FallbackPostStore;
pub use http::HttpPostStore;
