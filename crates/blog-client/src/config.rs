//! Client configuration loaded from environment variables.

use std::env;

/// Environment variable holding the API base URL, e.g. `http://localhost:3001/api`.
pub const API_URL_ENV: &str = "BLOG_API_URL";

/// Value shipped in example env files. Treated the same as "unset".
pub const PLACEHOLDER_API_URL: &str = "https://your-api-url.example.com/api";

/// Client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub api_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var(API_URL_ENV).ok(),
        }
    }

    /// The API base URL, unless it is unset, blank, or still the placeholder.
    pub fn configured_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .filter(|url| url.trim_end_matches('/') != PLACEHOLDER_API_URL)
    }
}
