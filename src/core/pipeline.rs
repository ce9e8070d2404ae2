//! Query pipeline - filter, score, sort
//!
//! One deterministic function of (posts, sort mode, search tokens).
//! Steps run in a fixed order: category filter, then relevance
//! scoring when a query is active, otherwise the selected sort.
//! The input collection is never mutated; every evaluation builds a
//! fresh ordering. All sorts are stable, so ties keep their original
//! relative order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::post::Post;
use super::score;

/// Active sort/filter selector.
///
/// `Popular` and `Newest` are the two fixed sorts; any other selector
/// value is a category slug. An active search query supersedes all
/// three orderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending by view count
    #[default]
    Popular,
    /// Descending by publication date
    Newest,
    /// Category filter (slug), sorted by views within the category
    Category(String),
}

impl From<&str> for SortMode {
    fn from(s: &str) -> Self {
        match s {
            "popular" => SortMode::Popular,
            "newest" => SortMode::Newest,
            slug => SortMode::Category(slug.to_string()),
        }
    }
}

impl FromStr for SortMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortMode::from(s))
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Popular => write!(f, "popular"),
            SortMode::Newest => write!(f, "newest"),
            SortMode::Category(slug) => write!(f, "{}", slug),
        }
    }
}

/// Retain posts whose category contains the slug as a substring.
///
/// Substring containment (not exact equality) is deliberate: it is
/// the platform's observed behavior, and partial slug matches are
/// allowed. Order-preserving.
pub fn filter_by_category(posts: &[Post], slug: &str) -> Vec<Post> {
    let slug = slug.to_lowercase();
    posts
        .iter()
        .filter(|p| p.category.to_lowercase().contains(&slug))
        .cloned()
        .collect()
}

/// Evaluate the pipeline: filter, then score-or-sort.
///
/// Pure: the output is always a permutation-subset of `posts`, and
/// evaluating twice with identical arguments yields identical output.
pub fn evaluate(posts: &[Post], sort: &SortMode, tokens: &[String]) -> Vec<Post> {
    let mut filtered = match sort {
        SortMode::Category(slug) => filter_by_category(posts, slug),
        _ => posts.to_vec(),
    };

    if !tokens.is_empty() {
        // Relevance mode: drop non-matches, order by score descending.
        let mut scored: Vec<(u32, Post)> = filtered
            .into_iter()
            .map(|p| (score::score(&p, tokens), p))
            .filter(|(s, _)| *s > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        return scored.into_iter().map(|(_, p)| p).collect();
    }

    match sort {
        SortMode::Newest => filtered.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
        // Popular is also the within-category default
        SortMode::Popular | SortMode::Category(_) => {
            filtered.sort_by(|a, b| b.views.cmp(&a.views))
        }
    }
    filtered
}

/// Feed view state: the three pieces of user-visible state that must
/// stay mutually consistent between one action and the next render.
#[derive(Debug, Clone)]
pub struct FeedState {
    pub sort: SortMode,
    pub query: String,
    pub page: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            sort: SortMode::Popular,
            query: String::new(),
            page: 1,
        }
    }
}

impl FeedState {
    /// Change the search query; resets to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Change the sort mode; resets to the first page
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Run the pipeline for the current state
    pub fn evaluate(&self, posts: &[Post]) -> Vec<Post> {
        evaluate(posts, &self.sort, &score::tokenize(&self.query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::tokenize;
    use crate::core::test_posts::{post, post_dated};

    fn pets_dataset() -> Vec<Post> {
        vec![
            post("0", "Cats and Dogs", "pets", "animals", 10),
            post("1", "Dog Training", "", "animals", 50),
        ]
    }

    #[test]
    fn test_sort_mode_parsing() {
        assert_eq!("popular".parse::<SortMode>().unwrap(), SortMode::Popular);
        assert_eq!("newest".parse::<SortMode>().unwrap(), SortMode::Newest);
        assert_eq!(
            "world-news".parse::<SortMode>().unwrap(),
            SortMode::Category("world-news".to_string())
        );
    }

    #[test]
    fn test_search_ties_keep_original_order() {
        // Both titles contain "dog": scores 3 and 3, so input order wins.
        let result = evaluate(&pets_dataset(), &SortMode::Popular, &tokenize("dog"));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "0");
        assert_eq!(result[1].id, "1");
    }

    #[test]
    fn test_popular_sort_without_query() {
        let result = evaluate(&pets_dataset(), &SortMode::Popular, &[]);
        assert_eq!(result[0].id, "1"); // 50 views
        assert_eq!(result[1].id, "0"); // 10 views
    }

    #[test]
    fn test_newest_sort_without_query() {
        let posts = vec![
            post_dated("old", "2023-01-01T00:00:00Z"),
            post_dated("new", "2024-06-01T00:00:00Z"),
        ];
        let result = evaluate(&posts, &SortMode::Newest, &[]);
        assert_eq!(result[0].id, "new");
        assert_eq!(result[1].id, "old");
    }

    #[test]
    fn test_query_overrides_selected_sort() {
        let posts = vec![
            post("a", "alpha dog dog", "dog", "misc", 1),
            post("b", "beta dog", "", "misc", 9999),
        ];
        // Under "popular" b would win; the query puts a first (score 5 vs 3).
        let result = evaluate(&posts, &SortMode::Popular, &tokenize("dog"));
        assert_eq!(result[0].id, "a");
    }

    #[test]
    fn test_zero_score_posts_are_dropped() {
        let result = evaluate(&pets_dataset(), &SortMode::Popular, &tokenize("spaceship"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_filter_is_substring_containment() {
        let posts = vec![
            post("0", "Breaking", "", "world-news", 5),
            post("1", "Quiet", "", "sports", 3),
        ];
        // Partial slug still matches: "new" is contained in "world-news".
        let result = evaluate(&posts, &SortMode::Category("new".to_string()), &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "0");
    }

    #[test]
    fn test_category_filter_then_search() {
        let posts = vec![
            post("0", "Dog parks", "", "animals", 5),
            post("1", "Dog stocks", "", "finance", 50),
        ];
        let result = evaluate(&posts, &SortMode::Category("animals".to_string()), &tokenize("dog"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "0");
    }

    #[test]
    fn test_category_without_query_sorts_by_views() {
        let posts = vec![
            post("0", "A", "", "animals", 5),
            post("1", "B", "", "animals", 50),
        ];
        let result = evaluate(&posts, &SortMode::Category("animals".to_string()), &[]);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn test_empty_dataset_is_not_an_error() {
        assert!(evaluate(&[], &SortMode::Popular, &tokenize("dog")).is_empty());
        assert!(evaluate(&[], &SortMode::Newest, &[]).is_empty());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let posts = pets_dataset();
        let a = evaluate(&posts, &SortMode::Popular, &tokenize("dog"));
        let b = evaluate(&posts, &SortMode::Popular, &tokenize("dog"));
        let ids = |v: &[Post]| v.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_output_is_permutation_subset_of_input() {
        let posts = pets_dataset();
        let result = evaluate(&posts, &SortMode::Popular, &tokenize("dog"));
        let mut seen = std::collections::HashSet::new();
        for p in &result {
            assert!(posts.iter().any(|src| src.id == p.id));
            assert!(seen.insert(p.id.clone()), "duplicate id in output");
        }
    }

    #[test]
    fn test_input_is_never_mutated() {
        let posts = vec![
            post("0", "A", "", "x", 1),
            post("1", "B", "", "x", 2),
        ];
        let _ = evaluate(&posts, &SortMode::Popular, &[]);
        assert_eq!(posts[0].id, "0");
        assert_eq!(posts[1].id, "1");
    }

    #[test]
    fn test_feed_state_resets_page_on_change() {
        let mut state = FeedState::default();
        state.set_page(4);
        state.set_query("dogs");
        assert_eq!(state.page, 1);

        state.set_page(3);
        state.set_sort(SortMode::Newest);
        assert_eq!(state.page, 1);
    }
}
