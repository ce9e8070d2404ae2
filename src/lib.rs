//! disco - Terminal client for the Wake & Participate content platform
//!
//! Everything the platform's landing page does with the content feed,
//! in the terminal: fetch posts from the HTTP API, filter by
//! category, rank by relevance, sort by popularity or recency, and
//! page through results.
//!
//! ## Key Concepts
//!
//! - **Pure engine**: `core` holds the filter/score/sort/paginate
//!   pipeline as framework-free functions over immutable input
//! - **Ingestion defaults**: missing API fields are defaulted once,
//!   at ingestion, so the pipeline never sees undefined values
//! - **Debounced input**: rapid query changes coalesce behind a quiet
//!   window before they reach the pipeline

pub mod cli;
pub mod config;
pub mod core;
pub mod remote;

pub use crate::core::category::Category;
pub use crate::core::debounce::DebounceGate;
pub use crate::core::pipeline::{evaluate, FeedState, SortMode};
pub use crate::core::post::Post;
pub use crate::remote::{ApiClient, ApiError};
