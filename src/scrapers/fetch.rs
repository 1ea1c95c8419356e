//! Page fetching seam used by the scrapers.

use async_trait::async_trait;

use crate::error::ScrapeResult;

/// Per-request header options layered over the browser profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Value for the Referer header.
    pub referer: Option<String>,
    /// Mark the request as XMLHttpRequest.
    pub ajax: bool,
    /// Replaces the profile's Accept header.
    pub accept: Option<String>,
}

impl FetchOptions {
    /// Plain page navigation.
    pub fn page() -> Self {
        Self::default()
    }

    /// In-page AJAX call issued from `referer`.
    pub fn ajax(referer: impl Into<String>) -> Self {
        Self {
            referer: Some(referer.into()),
            ajax: true,
            accept: None,
        }
    }

    /// JSON API call.
    pub fn json() -> Self {
        Self {
            accept: Some("application/json".to_string()),
            ..Self::default()
        }
    }
}

/// Fetches a URL and returns the body of a successful response.
///
/// Non-success statuses and transport failures surface as
/// [`ScrapeError::Transport`](crate::error::ScrapeError::Transport).
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> ScrapeResult<String>;
}
