//! Post - Core content model
//!
//! A post is one piece of published content as the engine sees it.
//! All field defaulting happens here, at ingestion: the pipeline
//! never has to deal with missing values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::remote::RawPost;

/// Title used when the API returns a post without one
pub const UNTITLED: &str = "Untitled Post";

/// Thumbnail used when the API returns a post without one
pub const DEFAULT_THUMBNAIL: &str = "/default-thumbnail.jpg";

/// Category used when the API returns a post without one
pub const UNCATEGORIZED: &str = "uncategorized";

/// A post - one piece of published content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, stable for the post's lifetime
    pub id: String,

    /// Display title, primary search field
    pub title: String,

    /// Body/summary text, secondary search field
    pub summary: String,

    /// Single category tag, used for filtering
    pub category: String,

    /// View count, used for the "popular" sort
    pub views: u64,

    /// Publication instant, used for the "newest" sort
    pub date_added: DateTime<Utc>,

    /// Display asset reference, unused by the engine itself
    pub thumbnail: String,
}

impl Post {
    /// Build a post from a raw API record, applying defaults.
    ///
    /// - missing id: a fresh ULID (the record is still displayable)
    /// - missing title: [`UNTITLED`]
    /// - missing date: ingestion time
    /// - present but unparsable date: Unix epoch, so it sorts last
    ///   under "newest"
    pub fn from_raw(raw: RawPost) -> Self {
        let date_added = match raw.date_added() {
            None => Utc::now(),
            Some(s) => parse_date(&s).unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH),
        };

        Self {
            id: raw
                .id()
                .unwrap_or_else(|| Ulid::new().to_string().to_lowercase()),
            title: raw.title().unwrap_or_else(|| UNTITLED.to_string()),
            summary: raw.summary().unwrap_or_default(),
            category: raw
                .category()
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            views: raw.views().unwrap_or(0),
            date_added,
            thumbnail: raw
                .thumbnail()
                .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string()),
        }
    }
}

/// Ingest a raw post collection, defaulting every record
pub fn ingest(raw: Vec<RawPost>) -> Vec<Post> {
    raw.into_iter().map(Post::from_raw).collect()
}

/// Parse an API timestamp (RFC 3339, with a date-only fallback)
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Some records carry bare dates like "2024-05-01"
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: serde_json::Value) -> RawPost {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_defaults_for_empty_record() {
        let post = Post::from_raw(raw(serde_json::json!({})));
        assert_eq!(post.title, UNTITLED);
        assert_eq!(post.summary, "");
        assert_eq!(post.category, UNCATEGORIZED);
        assert_eq!(post.views, 0);
        assert_eq!(post.thumbnail, DEFAULT_THUMBNAIL);
        assert!(!post.id.is_empty());
        // Missing date defaults to ingestion time, not epoch
        assert!(post.date_added > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_field_fallback_chain() {
        let post = Post::from_raw(raw(serde_json::json!({
            "postId": 42,
            "postTitle": "Morning Routines",
            "postContent": "Why mornings matter",
            "category": "Lifestyle",
            "viewCount": 1200,
            "postCreatedOn": "2024-03-10T08:00:00Z",
            "imageUrl": "/img/morning.jpg"
        })));
        assert_eq!(post.id, "42");
        assert_eq!(post.title, "Morning Routines");
        assert_eq!(post.summary, "Why mornings matter");
        assert_eq!(post.views, 1200);
        assert_eq!(post.thumbnail, "/img/morning.jpg");
    }

    #[test]
    fn test_unparsable_date_sorts_as_epoch() {
        let post = Post::from_raw(raw(serde_json::json!({
            "postId": "a", "dateAdded": "not-a-date"
        })));
        assert_eq!(post.date_added, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_date_only_fallback() {
        let post = Post::from_raw(raw(serde_json::json!({
            "postId": "a", "dateAdded": "2024-05-01"
        })));
        assert_eq!(post.date_added.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Post::from_raw(raw(serde_json::json!({})));
        let b = Post::from_raw(raw(serde_json::json!({})));
        assert_ne!(a.id, b.id);
    }
}
