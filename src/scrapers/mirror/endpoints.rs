//! Endpoint URLs derived from one effective base.

use url::Url;

use crate::error::{ScrapeError, ScrapeResult};

/// Fully-qualified endpoints for a single mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    pub base: String,
    pub home: String,
    pub search: String,
    pub genre: String,
    pub ajax: String,
}

impl EndpointSet {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            home: format!("{}/home", base),
            search: format!("{}/search", base),
            genre: format!("{}/genre", base),
            ajax: format!("{}/ajax", base),
        }
    }

    /// Detail page for an anime slug, resolved relative to the base.
    pub fn detail_url(&self, slug: &str) -> ScrapeResult<String> {
        let base = Url::parse(&format!("{}/", self.base.trim_end_matches('/')))
            .map_err(|e| ScrapeError::Validation(format!("invalid base {}: {}", self.base, e)))?;
        base.join(slug)
            .map(String::from)
            .map_err(|e| ScrapeError::Validation(format!("invalid anime slug {}: {}", slug, e)))
    }

    /// Watch page for an anime slug; used as the Referer of AJAX calls.
    pub fn watch_url(&self, slug: &str) -> String {
        format!("{}/watch/{}", self.base, slug)
    }

    /// AJAX fragment listing the episodes of a site-internal id.
    pub fn episode_list_url(&self, id: &str) -> String {
        format!("{}/v2/episode/list/{}", self.ajax, id)
    }

    /// First page of the A-Z listing.
    pub fn az_list_url(&self) -> String {
        format!("{}/az-list", self.base)
    }
}
