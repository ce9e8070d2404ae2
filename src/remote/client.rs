//! Platform API HTTP client
//!
//! Async client for the content platform's admin API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::types::*;
use crate::config::ApiConfig;

/// Errors from one API call.
///
/// Every failure is local to the call that produced it; nothing here
/// aborts the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("failed to reach the content API: {0}")]
    Connect(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to parse API response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the content platform API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from API config
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.timeout_secs)
    }

    /// Create a new client with explicit parameters
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build a URL for an endpoint
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }

    // ============== Posts ==============

    /// Fetch all published posts
    pub async fn fetch_posts(&self) -> Result<Vec<RawPost>, ApiError> {
        let url = self.url("/admin/get-post")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ============== Advertisements ==============

    /// Fetch the advertisement collection (sidebar channels, banners)
    pub async fn fetch_advertisements(&self) -> Result<Vec<RawAdvertisement>, ApiError> {
        let url = self.url("/admin/get-advertise")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ============== Categories ==============

    /// Fetch raw category labels
    pub async fn fetch_categories(&self) -> Result<Vec<RawCategory>, ApiError> {
        let url = self.url("/admin/get-post-category")?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    // ============== View Tracking ==============

    /// Record one view of a post. Fire-and-forget on the caller side;
    /// the platform deduplicates.
    pub async fn track_view(&self, post_id: &str) -> Result<(), ApiError> {
        let url = self.url("/admin/posts/views")?;
        let req = TrackViewRequest {
            post_id: post_id.to_string(),
        };

        let resp = self.client.post(url).json(&req).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = self.extract_error(resp).await;
            return Err(ApiError::Status { status, message });
        }

        Ok(())
    }

    // ============== Helpers ==============

    /// Handle response and deserialize
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = resp.status();

        if !status.is_success() {
            let message = self.extract_error(resp).await;
            return Err(ApiError::Status { status, message });
        }

        resp.json().await.map_err(ApiError::Decode)
    }

    /// Extract error message from response
    async fn extract_error(&self, resp: reqwest::Response) -> String {
        if let Ok(err) = resp.json::<ApiErrorResponse>().await {
            match err.details {
                Some(details) => format!("{} ({})", err.error, details),
                None => err.error,
            }
        } else {
            "Unknown error".to_string()
        }
    }
}
