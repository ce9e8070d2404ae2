//! Remote API module
//!
//! HTTP client and DTOs for the content platform API. The JSON shape
//! is an external contract consumed as-is; all tolerance for schema
//! drift lives in the DTO accessors.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::*;
