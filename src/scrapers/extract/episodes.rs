//! Episode-list extraction from the AJAX fragment.

use scraper::Html;
use serde::Deserialize;

use super::parse_selector;
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::{Episode, SubOrDub};

const FILLER_CLASS: &str = "ssl-item-filler";

/// JSON envelope the episode-list endpoint wraps its HTML in.
#[derive(Debug, Deserialize)]
struct EpisodeEnvelope {
    html: String,
}

/// Unwrap the HTML fragment from the episode-list response body.
pub fn parse_episode_envelope(body: &str) -> ScrapeResult<String> {
    let envelope: EpisodeEnvelope = serde_json::from_str(body)
        .map_err(|e| ScrapeError::Extraction(format!("episode list envelope: {}", e)))?;
    Ok(envelope.html)
}

/// Build the episode id from an anchor href such as `/watch/slug-1?ep=2`.
///
/// Takes the third `/`-separated segment, swaps the `?ep=` marker for
/// `$episode$` and appends the mode, so the same episode gets a different
/// id under `sub` and `dub`.
pub fn synthesize_episode_id(href: &str, sub_or_dub: SubOrDub) -> Option<String> {
    let segment = href.split('/').nth(2)?;
    Some(format!(
        "{}${}",
        segment.replacen("?ep=", "$episode$", 1),
        sub_or_dub
    ))
}

/// Extract every row matching `row_selector`, in document order.
pub fn extract_episodes(
    document: &Html,
    row_selector: &str,
    sub_or_dub: SubOrDub,
) -> ScrapeResult<Vec<Episode>> {
    let row_sel = parse_selector(row_selector)?;

    let episodes = document
        .select(&row_sel)
        .map(|row| {
            let element = row.value();
            Episode {
                title: element
                    .attr("title")
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
                episode_no: element
                    .attr("data-number")
                    .and_then(|n| n.trim().parse().ok()),
                id: element
                    .attr("href")
                    .and_then(|href| synthesize_episode_id(href, sub_or_dub)),
                is_filler: element.classes().any(|c| c == FILLER_CLASS),
            }
        })
        .collect();

    Ok(episodes)
}
