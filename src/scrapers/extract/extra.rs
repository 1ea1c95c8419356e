//! Label/value side-table extraction from the detail page.

use scraper::Html;

use super::{element_text, parse_selector, select_text};
use crate::error::ScrapeResult;
use crate::models::ExtraInfo;

const ROW: &str = ".item-title";
const ROW_LABEL: &str = ".item-head";
const ROW_VALUE: &str = ".name";
const ROW_LINK: &str = "a";
const GENRE_LINK: &str = ".item-list a";

/// Where a row's content goes instead of the generic key/value path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Producers,
    Genres,
    JapaneseTitle,
    Dropped,
}

/// Rows intercepted before the generic path, by normalized label.
const SPECIAL_ROWS: &[(&str, Route)] = &[
    ("producers", Route::Producers),
    ("genres", Route::Genres),
    ("japanese", Route::JapaneseTitle),
    ("overview", Route::Dropped),
];

fn route_for(key: &str) -> Option<Route> {
    SPECIAL_ROWS
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, route)| *route)
}

/// Turn a row label such as "MAL Score:" into a key such as "mal_score".
pub fn normalize_label(label: &str) -> String {
    label
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Extract the side-table under the first element matching `root_selector`.
///
/// `genres` and `producers` are always present, comma-joined, possibly empty.
pub fn extract_extra(document: &Html, root_selector: &str) -> ScrapeResult<ExtraInfo> {
    let root_sel = parse_selector(root_selector)?;
    let row_sel = parse_selector(ROW)?;
    let label_sel = parse_selector(ROW_LABEL)?;
    let value_sel = parse_selector(ROW_VALUE)?;
    let link_sel = parse_selector(ROW_LINK)?;
    let genre_sel = parse_selector(GENRE_LINK)?;

    let mut info = ExtraInfo::new();
    let mut genres: Vec<String> = Vec::new();
    let mut producers: Vec<String> = Vec::new();

    if let Some(root) = document.select(&root_sel).next() {
        for row in root.select(&row_sel) {
            let key = normalize_label(&select_text(row, &label_sel).unwrap_or_default());
            if key.is_empty() {
                continue;
            }
            let value = select_text(row, &value_sel).unwrap_or_default();

            match route_for(&key) {
                Some(Route::Producers) => producers.extend(row.select(&link_sel).map(element_text)),
                Some(Route::Genres) => genres.extend(row.select(&link_sel).map(element_text)),
                Some(Route::JapaneseTitle) => info.insert("japanese_title", value),
                Some(Route::Dropped) => {}
                None => info.insert(key, value),
            }
        }

        genres.extend(root.select(&genre_sel).map(element_text));
    }

    info.insert("genres", genres.join(","));
    info.insert("producers", producers.join(","));

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "#ani_detail .container .anis-content";

    const PAGE: &str = r#"<html><body>
<div id="ani_detail"><div class="container"><div class="anis-content">
<div class="anisc-info">
  <div class="item item-title w-hide">
    <span class="item-head">Overview:</span>
    <div class="text">Long synopsis text</div>
  </div>
  <div class="item item-title">
    <span class="item-head">Japanese:</span> <span class="name">ナルト</span>
  </div>
  <div class="item item-title">
    <span class="item-head">Synonyms:</span> <span class="name">NARUTO</span>
  </div>
  <div class="item item-title">
    <span class="item-head">Aired:</span> <span class="name">Oct 3, 2002 to Feb 8, 2007</span>
  </div>
  <div class="item item-title">
    <span class="item-head">MAL Score:</span> <span class="name">8.0</span>
  </div>
  <div class="item item-list">
    <span class="item-head">Genres:</span>
    <a href="/genre/action">Action</a>
    <a href="/genre/adventure">Adventure</a>
  </div>
  <div class="item item-title">
    <span class="item-head">Studios:</span> <a class="name" href="/producer/pierrot">Pierrot</a>
  </div>
  <div class="item item-title">
    <span class="item-head">Producers:</span>
    <a class="name" href="/producer/tv-tokyo">TV Tokyo</a>,
    <a class="name" href="/producer/aniplex">Aniplex</a>
  </div>
</div>
</div></div></div>
</body></html>"#;

    #[test]
    fn test_extracts_rows() {
        let info = extract_extra(&Html::parse_document(PAGE), ROOT).unwrap();

        assert_eq!(info.get("japanese_title"), Some("ナルト"));
        assert_eq!(info.get("synonyms"), Some("NARUTO"));
        assert_eq!(info.get("aired"), Some("Oct 3, 2002 to Feb 8, 2007"));
        assert_eq!(info.get("mal_score"), Some("8.0"));
        assert_eq!(info.get("studios"), Some("Pierrot"));
        assert_eq!(info.get("genres"), Some("Action,Adventure"));
        assert_eq!(info.get("producers"), Some("TV Tokyo,Aniplex"));
    }

    #[test]
    fn test_special_rows_skip_generic_path() {
        let info = extract_extra(&Html::parse_document(PAGE), ROOT).unwrap();

        assert_eq!(info.get("overview"), None);
        assert_eq!(info.get("japanese"), None);
        assert_eq!(info.len(), 7);
    }

    #[test]
    fn test_genre_row_in_title_list_is_routed() {
        let html = r#"<div id="ani_detail"><div class="container"><div class="anis-content">
  <div class="item item-title"><span class="item-head">Genres:</span>
    <a href="/genre/drama">Drama</a></div>
  <div class="item item-list"><a href="/genre/comedy">Comedy</a></div>
</div></div></div>"#;
        let info = extract_extra(&Html::parse_document(html), ROOT).unwrap();
        assert_eq!(info.get("genres"), Some("Drama,Comedy"));
    }

    #[test]
    fn test_missing_root_has_empty_lists() {
        let info = extract_extra(&Html::parse_document("<p>nothing</p>"), ROOT).unwrap();
        assert_eq!(info.len(), 2);
        assert_eq!(info.get("genres"), Some(""));
        assert_eq!(info.get("producers"), Some(""));
    }

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Aired:"), "aired");
        assert_eq!(normalize_label("MAL Score:"), "mal_score");
        assert_eq!(normalize_label(" Date aired here: x"), "date_aired_here");
        assert_eq!(normalize_label("Status"), "status");
        assert_eq!(normalize_label(""), "");
    }
}
