//! Category - Normalized category tags
//!
//! The API returns display labels ("Machine Learning"); the engine
//! filters on slugs ("machine-learning"). The slug is derived
//! deterministically from the label. Two labels may normalize to the
//! same slug; the engine does not resolve such collisions.

use serde::{Deserialize, Serialize};

/// A category as a (slug, label) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Normalized slug, used as filter selector
    pub value: String,

    /// Original display name
    pub label: String,
}

impl Category {
    /// Build a category from its display label
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: slugify(&label),
            label,
        }
    }
}

/// Lowercase a label and collapse whitespace runs into `-`
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalize a raw label list into categories, dropping blank labels
pub fn from_labels<I, S>(labels: I) -> Vec<Category>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .map(Into::into)
        .filter(|l: &String| !l.trim().is_empty())
        .map(Category::from_label)
        .collect()
}
