//! CLI utility functions
//!
//! Common helper functions shared across CLI commands: client
//! construction, compact view-count formatting, and display
//! truncation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::remote::ApiClient;

/// Build an API client, letting a `--api-url` flag override config
pub fn api_client(config: &Config, api_url: Option<&str>) -> Result<ApiClient> {
    match api_url {
        Some(url) => ApiClient::new(url, config.api.timeout_secs),
        None => ApiClient::from_config(&config.api),
    }
    .context("Failed to create API client")
}

/// Format a count the way the platform renders it: 1234 -> "1.2k",
/// 5600000 -> "5.6m", 2100000000 -> "2.1b".
pub fn format_count(value: u64, decimal_places: usize) -> String {
    const K: f64 = 1_000.0;
    const M: f64 = 1_000_000.0;
    const B: f64 = 1_000_000_000.0;

    let value_f = value as f64;
    if value_f >= B {
        format!("{:.*}b", decimal_places, value_f / B)
    } else if value_f >= M {
        format!("{:.*}m", decimal_places, value_f / M)
    } else if value_f >= K {
        format!("{:.*}k", decimal_places, value_f / K)
    } else {
        value.to_string()
    }
}

/// Render a post date for tables
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Truncate a string for table display, appending an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
