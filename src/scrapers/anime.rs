//! Anime detail aggregation: mirror resolution, fetches, extraction, merge.

use std::sync::Arc;

use scraper::Html;
use tracing::{debug, warn};

use super::extract::{
    extract_about, extract_episodes, extract_extra, extract_last_page, parse_episode_envelope,
};
use super::fetch::{FetchOptions, PageFetcher};
use super::mirror::MirrorResolver;
use crate::error::ScrapeResult;
use crate::models::{AnimeResponse, AzListPages};

/// Content root of the detail page.
pub const DETAIL_ROOT_SELECTOR: &str = "#ani_detail .container .anis-content";

/// Episode anchors inside the episode-list fragment.
pub const EPISODE_ROW_SELECTOR: &str = ".detail-infor-content .ss-list a";

/// Site-internal id carried by a slug such as `naruto-677`: its last
/// dash-separated token.
pub fn slug_id_suffix(slug: &str) -> &str {
    slug.rsplit('-').next().unwrap_or(slug)
}

/// Parse both pages and merge them into the public response shape.
pub fn build_anime_response(detail_html: &str, episodes_html: &str) -> ScrapeResult<AnimeResponse> {
    let detail = Html::parse_document(detail_html);
    let about = extract_about(&detail, DETAIL_ROOT_SELECTOR)?;
    let extra = extract_extra(&detail, DETAIL_ROOT_SELECTOR)?;

    let fragment = Html::parse_document(episodes_html);
    let episodes = extract_episodes(&fragment, EPISODE_ROW_SELECTOR, about.sub_or_dub)?;

    AnimeResponse::merge(about, extra, episodes)
}

/// Scrapes anime details from whichever mirror is live.
pub struct AnimeScraper {
    resolver: Arc<MirrorResolver>,
    fetcher: Arc<dyn PageFetcher>,
}

impl AnimeScraper {
    pub fn new(resolver: Arc<MirrorResolver>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { resolver, fetcher }
    }

    pub fn resolver(&self) -> &MirrorResolver {
        &self.resolver
    }

    /// Fetch, extract and merge everything known about `slug`.
    ///
    /// The detail page and the episode list are fetched concurrently;
    /// episode ids are only built once the detail page's sub/dub mode is
    /// known. When both fetches fail, the detail page's error is returned.
    pub async fn fetch_about(&self, slug: &str) -> ScrapeResult<AnimeResponse> {
        let endpoints = self.resolver.resolve().await;

        let detail_url = endpoints.detail_url(slug)?;
        let episodes_url = endpoints.episode_list_url(slug_id_suffix(slug));
        let episodes_options = FetchOptions::ajax(endpoints.watch_url(slug));
        let page_options = FetchOptions::page();

        debug!("Fetching {} and {}", detail_url, episodes_url);
        let (detail, episodes) = tokio::join!(
            self.fetcher.fetch(&detail_url, &page_options),
            self.fetcher.fetch(&episodes_url, &episodes_options),
        );
        // The detail page's failure is reported even when both fail.
        let detail_html = detail?;
        let episodes_body = episodes?;

        let result = parse_episode_envelope(&episodes_body)
            .and_then(|episodes_html| build_anime_response(&detail_html, &episodes_html));

        if let Err(ref e) = result {
            warn!("Extraction failed for {}: {}", slug, e);
        }
        result
    }

    /// Read the last page number of the A-Z listing.
    pub async fn fetch_az_pages(&self) -> ScrapeResult<AzListPages> {
        let endpoints = self.resolver.resolve().await;
        let html = self
            .fetcher
            .fetch(&endpoints.az_list_url(), &FetchOptions::page())
            .await?;

        let last_page = extract_last_page(&Html::parse_document(&html))?;
        Ok(AzListPages { last_page })
    }
}
