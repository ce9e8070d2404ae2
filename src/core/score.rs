//! Relevance scoring for free-text search
//!
//! Weighted substring matching: a token is worth 3 in the title, 2 in
//! the summary, 1 in the category, and contributions sum across tokens
//! and fields. No stemming, no fuzzy matching. Score 0 means "no
//! match" and the pipeline drops such posts.

use super::post::Post;

/// Token weight for a title hit
pub const TITLE_WEIGHT: u32 = 3;

/// Token weight for a summary hit
pub const SUMMARY_WEIGHT: u32 = 2;

/// Token weight for a category hit
pub const CATEGORY_WEIGHT: u32 = 1;

/// Split a query into lowercase tokens, discarding empties
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score one post against tokenized query terms.
///
/// Case-insensitive, pure. An empty token list scores 0 for every
/// post.
pub fn score(post: &Post, tokens: &[String]) -> u32 {
    if tokens.is_empty() {
        return 0;
    }

    let title = post.title.to_lowercase();
    let summary = post.summary.to_lowercase();
    let category = post.category.to_lowercase();

    let mut total = 0;
    for token in tokens {
        if title.contains(token.as_str()) {
            total += TITLE_WEIGHT;
        }
        if summary.contains(token.as_str()) {
            total += SUMMARY_WEIGHT;
        }
        if category.contains(token.as_str()) {
            total += CATEGORY_WEIGHT;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_posts::post;

    #[test]
    fn test_tokenize_splits_and_lowercases() {
        assert_eq!(tokenize("  Dog   Training "), vec!["dog", "training"]);
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   "), Vec::<String>::new());
    }

    #[test]
    fn test_title_summary_category_weights() {
        let p = post("1", "Cats and Dogs", "pets", "animals", 10);
        assert_eq!(score(&p, &tokenize("cats")), 3);
        assert_eq!(score(&p, &tokenize("pets")), 2);
        assert_eq!(score(&p, &tokenize("animals")), 1);
    }

    #[test]
    fn test_token_may_match_multiple_fields() {
        let p = post("1", "Rust news", "rust weekly", "rust", 0);
        // 3 + 2 + 1 for the single token
        assert_eq!(score(&p, &tokenize("rust")), 6);
    }

    #[test]
    fn test_tokens_sum_independently() {
        let p = post("1", "Cats and Dogs", "pets", "animals", 10);
        // "cats" hits title (3), "pets" hits summary (2)
        assert_eq!(score(&p, &tokenize("cats pets")), 5);
    }

    #[test]
    fn test_case_insensitive() {
        let p = post("1", "Dog Training", "", "animals", 50);
        assert_eq!(score(&p, &tokenize("DOG")), 3);
    }

    #[test]
    fn test_empty_tokens_score_zero() {
        let p = post("1", "Anything", "body", "cat", 0);
        assert_eq!(score(&p, &[]), 0);
    }

    #[test]
    fn test_substring_not_word_match() {
        let p = post("1", "Dogged persistence", "", "", 0);
        assert_eq!(score(&p, &tokenize("dog")), 3);
    }
}
