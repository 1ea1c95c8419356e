//! Summary extraction from the anime detail page.

use scraper::Html;
use serde::Deserialize;

use super::stats::parse_stats_row;
use super::{parse_selector, select_attr, select_non_empty_text, select_text};
use crate::error::{ScrapeError, ScrapeResult};
use crate::models::{AboutInfo, SubOrDub};

pub const UNKNOWN_TITLE: &str = "UNKNOWN ANIME";
pub const UNKNOWN_DESCRIPTION: &str = "UNKNOWN ANIME DESCRIPTION";
pub const UNKNOWN_IMAGE: &str = "UNKNOWN";

/// Element holding the JSON blob with external ids.
const SYNC_DATA: &str = "#syncData";
const SUB_BADGE: &str = "div.film-stats div.tick div.tick-item.tick-sub";
const DUB_BADGE: &str = "div.film-stats div.tick div.tick-item.tick-dub";

const PLAY_LINK: &str = ".anisc-detail .film-buttons a.btn-play";
const TITLE: &str = ".anisc-detail .film-name.dynamic-name";
const POSTER: &str = ".film-poster .film-poster-img";
const RATING: &str = ".film-stats .tick .tick-pg";
const QUALITY: &str = ".film-stats .tick .tick-quality";
const SUB_COUNT: &str = ".film-stats .tick .tick-sub";
const DUB_COUNT: &str = ".film-stats .tick .tick-dub";
const TOTAL_COUNT: &str = ".film-stats .tick .tick-eps";
const STATS_ROW: &str = ".film-stats .tick";
const DESCRIPTION: &str = ".anisc-detail .film-description .text";

/// An id in the sync blob; the site emits both strings and numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExternalId {
    Number(i64),
    Float(f64),
    Text(String),
}

impl ExternalId {
    fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            Self::Float(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SyncData {
    #[serde(default)]
    mal_id: Option<ExternalId>,
    #[serde(default)]
    anilist_id: Option<ExternalId>,
}

/// Read the external ids from the embedded sync blob.
fn parse_sync_data(document: &Html) -> ScrapeResult<(Option<i64>, Option<i64>)> {
    let selector = parse_selector(SYNC_DATA)?;
    let blob = select_text(document.root_element(), &selector)
        .ok_or_else(|| ScrapeError::Extraction("sync data blob missing".to_string()))?;

    let data: SyncData = serde_json::from_str(&blob)?;
    Ok((
        data.mal_id.as_ref().and_then(ExternalId::as_i64),
        data.anilist_id.as_ref().and_then(ExternalId::as_i64),
    ))
}

/// Numeric id from a link's last path segment, after its last dash.
pub(crate) fn id_from_href(href: &str) -> Option<u64> {
    href.split('/')
        .next_back()?
        .split('-')
        .next_back()?
        .trim()
        .parse()
        .ok()
}

/// Episode counter badge; zero and unparsable both read as absent.
fn parse_count(text: Option<String>) -> Option<u32> {
    text?.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Extract the summary from the first element matching `root_selector`.
///
/// A missing root yields an all-null record with the default `sub` mode.
/// A missing or malformed sync blob is an extraction failure.
pub fn extract_about(document: &Html, root_selector: &str) -> ScrapeResult<AboutInfo> {
    let root_sel = parse_selector(root_selector)?;
    let Some(root) = document.select(&root_sel).next() else {
        return Ok(AboutInfo::default());
    };

    let (mal_id, al_id) = parse_sync_data(document)?;

    let doc_root = document.root_element();
    let has_sub = doc_root.select(&parse_selector(SUB_BADGE)?).next().is_some();
    let has_dub = doc_root.select(&parse_selector(DUB_BADGE)?).next().is_some();

    let id = select_attr(root, &parse_selector(PLAY_LINK)?, "href")
        .as_deref()
        .and_then(id_from_href);

    let title = select_non_empty_text(root, &parse_selector(TITLE)?)
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string());
    let image = select_attr(root, &parse_selector(POSTER)?, "src")
        .unwrap_or_else(|| UNKNOWN_IMAGE.to_string());
    let description = select_non_empty_text(root, &parse_selector(DESCRIPTION)?)
        .unwrap_or_else(|| UNKNOWN_DESCRIPTION.to_string());

    let stats = parse_stats_row(&select_text(root, &parse_selector(STATS_ROW)?).unwrap_or_default());

    Ok(AboutInfo {
        id,
        mal_id,
        al_id,
        title: Some(title),
        image: Some(image),
        rating: select_non_empty_text(root, &parse_selector(RATING)?),
        total_episodes: parse_count(select_text(root, &parse_selector(TOTAL_COUNT)?)),
        sub_episodes: parse_count(select_text(root, &parse_selector(SUB_COUNT)?)),
        dub_episodes: parse_count(select_text(root, &parse_selector(DUB_COUNT)?)),
        category: stats.category,
        quality: select_non_empty_text(root, &parse_selector(QUALITY)?),
        description: Some(description),
        sub_or_dub: SubOrDub::from_badges(has_sub, has_dub),
    })
}
