//! Core module - The content engine
//!
//! Pure, framework-free logic: post ingestion, category
//! normalization, relevance scoring, the query pipeline, pagination
//! and the debounce gate. Nothing in here touches the network or the
//! terminal.

pub mod category;
pub mod debounce;
pub mod page;
pub mod pipeline;
pub mod post;
pub mod score;

#[cfg(test)]
pub(crate) mod test_posts {
    use chrono::{DateTime, Utc};

    use super::post::Post;

    /// Build a post with a fixed date for pipeline tests
    pub fn post(id: &str, title: &str, summary: &str, category: &str, views: u64) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            category: category.to_string(),
            views,
            date_added: DateTime::<Utc>::UNIX_EPOCH,
            thumbnail: "/default-thumbnail.jpg".to_string(),
        }
    }

    /// Build a minimal post with a given RFC 3339 date
    pub fn post_dated(id: &str, rfc3339: &str) -> Post {
        Post {
            date_added: DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
            ..post(id, id, "", "misc", 0)
        }
    }
}
