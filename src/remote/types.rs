//! Platform API types
//!
//! DTOs for the content API. The backend has gone through a few
//! schema revisions, so most post fields exist under more than one
//! name; the accessors encode the fallback order the platform's web
//! client uses.

use serde::{Deserialize, Serialize};

// ============== Post Types ==============

/// Post identifier as the API sends it (string or number)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Str(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Num(n) => write!(f, "{}", n),
            RawId::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A post record as returned by `/admin/get-post`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(default)]
    pub post_id: Option<RawId>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<RawId>,

    #[serde(default)]
    pub post_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub view_count: Option<u64>,

    #[serde(default)]
    pub post_created_on: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub post_content: Option<String>,
    #[serde(default)]
    pub post_summary: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl RawPost {
    pub fn id(&self) -> Option<String> {
        self.post_id
            .as_ref()
            .or(self.mongo_id.as_ref())
            .map(|id| id.to_string())
    }

    pub fn title(&self) -> Option<String> {
        self.post_title.clone().or_else(|| self.title.clone())
    }

    pub fn thumbnail(&self) -> Option<String> {
        self.thumbnail_url
            .clone()
            .or_else(|| self.thumbnail.clone())
            .or_else(|| self.image_url.clone())
    }

    pub fn views(&self) -> Option<u64> {
        self.views.or(self.view_count)
    }

    pub fn date_added(&self) -> Option<String> {
        self.post_created_on
            .clone()
            .or_else(|| self.date_added.clone())
            .or_else(|| self.created_at.clone())
    }

    pub fn summary(&self) -> Option<String> {
        self.post_content
            .clone()
            .or_else(|| self.post_summary.clone())
            .or_else(|| self.summary.clone())
    }

    pub fn category(&self) -> Option<String> {
        self.category.clone()
    }
}

// ============== Advertisement Types ==============

/// An advertisement record from `/admin/get-advertise`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdvertisement {
    #[serde(default)]
    pub advertise_type: Option<String>,
    #[serde(default)]
    pub youtube_channel_name: Option<String>,
    #[serde(default)]
    pub youtube_channel_url: Option<String>,
    #[serde(default)]
    pub redirection_url: Option<String>,
}

// ============== Category Types ==============

/// A category record from `/admin/get-post-category`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategory {
    pub category_name: String,
}

// ============== View Tracking ==============

/// Request body for `/admin/posts/views`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackViewRequest {
    pub post_id: String,
}

// ============== Error Types ==============

/// API error response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}
