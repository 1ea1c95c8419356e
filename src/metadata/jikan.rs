//! Jikan (unofficial MyAnimeList REST API) client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::StaffProvider;
use crate::error::ScrapeResult;
use crate::scrapers::{FetchOptions, PageFetcher};

/// Thin Jikan client; responses are relayed without reshaping.
pub struct JikanClient {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl JikanClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn staff_url(&self, mal_id: i64) -> String {
        format!("{}/anime/{}/staff", self.base_url, mal_id)
    }
}

#[async_trait]
impl StaffProvider for JikanClient {
    async fn get_staff(&self, mal_id: i64) -> ScrapeResult<Value> {
        let url = self.staff_url(mal_id);
        debug!("Fetching staff from {}", url);
        let body = self.fetcher.fetch(&url, &FetchOptions::json()).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
