//! Anime detail and listing handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use super::super::AppState;
use super::helpers::ApiError;
use crate::models::{AnimeResponse, AzListPages};

/// Scrape the detail page and episode list for one anime slug.
pub async fn get_anime(
    State(state): State<AppState>,
    Path(anime): Path<String>,
) -> Result<Json<AnimeResponse>, ApiError> {
    info!("Scraping anime {}", anime);
    let response = state.scraper.fetch_about(&anime).await?;
    Ok(Json(response))
}

/// Last page number of the A-Z listing.
pub async fn az_list_pages(State(state): State<AppState>) -> Result<Json<AzListPages>, ApiError> {
    Ok(Json(state.scraper.fetch_az_pages().await?))
}
