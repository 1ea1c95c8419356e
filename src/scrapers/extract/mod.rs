//! Structured extraction from scraped HTML.
//!
//! All extractors are synchronous and work on an already parsed document.
//! Missing widgets resolve to `None` or a sentinel; only content that cannot
//! be interpreted at all becomes a [`ScrapeError::Extraction`].

mod about;
mod az_list;
mod episodes;
mod extra;
mod stats;

pub use about::{extract_about, UNKNOWN_DESCRIPTION, UNKNOWN_IMAGE, UNKNOWN_TITLE};
pub use az_list::{extract_last_page, DEFAULT_AZ_LAST_PAGE};
pub use episodes::{extract_episodes, parse_episode_envelope, synthesize_episode_id};
pub use extra::{extract_extra, normalize_label};
pub use stats::{parse_stats_row, StatsRow};

use scraper::{ElementRef, Selector};

use crate::error::{ScrapeError, ScrapeResult};

/// Parse a CSS selector, reporting failures as extraction errors.
pub(crate) fn parse_selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css)
        .map_err(|e| ScrapeError::Extraction(format!("invalid selector '{}': {}", css, e)))
}

/// Concatenated, trimmed text of every element matching `selector` under
/// `scope`. `None` when nothing matches.
pub(crate) fn select_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let mut matched = false;
    let mut text = String::new();
    for element in scope.select(selector) {
        matched = true;
        text.extend(element.text());
    }
    matched.then(|| text.trim().to_string())
}

/// Like [`select_text`] but empty text counts as absent.
pub(crate) fn select_non_empty_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    select_text(scope, selector).filter(|t| !t.is_empty())
}

/// Trimmed attribute of the first element matching `selector`.
pub(crate) fn select_attr(
    scope: ElementRef<'_>,
    selector: &Selector,
    attr: &str,
) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
}

/// Whole text of one element, trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
