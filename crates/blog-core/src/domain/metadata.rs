//! Server-assigned post metadata: slug, display date, read time and excerpt.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use super::post::NewPost;

/// Characters kept in a slug besides whitespace (ASCII word characters).
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s]").expect("static regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Characters per "minute" of reading time.
const CHARS_PER_MINUTE: usize = 1000;

/// Maximum excerpt length, in UTF-16 code units, before the ellipsis.
pub const EXCERPT_LEN: usize = 150;

/// Metadata derived from a submission at creation time. Never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMetadata {
    pub slug: String,
    pub date: String,
    pub read_time: String,
    pub excerpt: String,
}

impl PostMetadata {
    /// Derive all server-assigned fields for `post`, dated `today`.
    pub fn derive(post: &NewPost, today: NaiveDate) -> Self {
        let excerpt = match post.excerpt.as_deref() {
            Some(excerpt) if !excerpt.trim().is_empty() => excerpt.to_string(),
            _ => excerpt_from(&post.content),
        };

        Self {
            slug: slugify(&post.title),
            date: format_date(today),
            read_time: read_time(&post.content),
            excerpt,
        }
    }
}

/// URL-safe slug: lowercase, non-word characters stripped, whitespace runs
/// collapsed to a single hyphen.
///
/// `"Hello, World!"` becomes `"hello-world"`.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    WHITESPACE.replace_all(&stripped, "-").into_owned()
}

/// Long-form display date, e.g. `"May 15, 2023"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Crude read-time estimate from the content length, floored at one minute.
///
/// Length is measured in UTF-16 code units, the unit browsers report for string length.
pub fn read_time(content: &str) -> String {
    let minutes = content.encode_utf16().count().div_ceil(CHARS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Plain-text excerpt of an HTML body: tags removed, cut at [`EXCERPT_LEN`]
/// UTF-16 code units, always followed by `...`.
///
/// Whitespace is kept as-is. A character that would straddle the cut is dropped.
pub fn excerpt_from(content: &str) -> String {
    let text = HTML_TAG.replace_all(content, "");

    let mut units = 0;
    let mut excerpt: String = text
        .chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= EXCERPT_LEN
        })
        .collect();
    excerpt.push_str("...");
    excerpt
}

/// Today's date on the server's local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
