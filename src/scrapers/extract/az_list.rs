//! Pagination of the A-Z listing.

use scraper::Html;

use super::parse_selector;
use crate::error::ScrapeResult;

/// Page count reported when the pagination bar cannot be read.
pub const DEFAULT_AZ_LAST_PAGE: u16 = 212;

const LAST_PAGE_LINK: &str = ".pre-pagination nav ul li:last-child a";

/// Page number carried by the last pagination link (`?page=N`).
pub fn extract_last_page(document: &Html) -> ScrapeResult<u16> {
    let selector = parse_selector(LAST_PAGE_LINK)?;

    let page = document
        .select(&selector)
        .last()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| href.rsplit('=').next())
        .and_then(|n| n.trim().parse::<u16>().ok());

    Ok(page.unwrap_or(DEFAULT_AZ_LAST_PAGE))
}
