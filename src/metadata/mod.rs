//! External anime metadata services.

mod jikan;

pub use jikan::JikanClient;

use async_trait::async_trait;

use crate::error::ScrapeResult;

/// Source of staff listings keyed by MyAnimeList id.
#[async_trait]
pub trait StaffProvider: Send + Sync {
    async fn get_staff(&self, mal_id: i64) -> ScrapeResult<serde_json::Value>;
}
