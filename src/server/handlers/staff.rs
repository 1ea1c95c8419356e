//! Staff passthrough to the metadata service.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use super::super::AppState;
use super::helpers::error_body;
use crate::error::ScrapeError;

/// Parse the path segment as a MyAnimeList id.
fn parse_mal_id(raw: &str) -> Result<i64, ScrapeError> {
    raw.trim()
        .parse()
        .map_err(|_| ScrapeError::Validation("Invalid anime_mal_id".to_string()))
}

/// Relay the staff listing for a MyAnimeList id.
///
/// The id is validated before any outbound call is made.
pub async fn get_staff(State(state): State<AppState>, Path(anime): Path<String>) -> Response {
    let mal_id = match parse_mal_id(&anime) {
        Ok(id) => id,
        Err(e) => return error_body(StatusCode::BAD_REQUEST, &e.public_message()),
    };

    match state.staff.get_staff(mal_id).await {
        Ok(staff) => Json(staff).into_response(),
        Err(e) => {
            warn!("Staff lookup for {} failed: {}", mal_id, e);
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}
