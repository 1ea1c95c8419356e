//! Public response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{AboutInfo, Episode, ExtraInfo};
use crate::error::ScrapeResult;

/// Flat merge of about fields, extra fields and the episode list.
///
/// Later sources overwrite earlier ones on key collision: extra keys win
/// over about keys, and `episodes` wins over both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeResponse(Map<String, Value>);

impl AnimeResponse {
    pub fn merge(about: AboutInfo, extra: ExtraInfo, episodes: Vec<Episode>) -> ScrapeResult<Self> {
        let mut map = match serde_json::to_value(about)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        for (key, value) in extra {
            map.insert(key, Value::String(value));
        }

        map.insert("episodes".to_string(), serde_json::to_value(episodes)?);

        Ok(Self(map))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

/// Pagination summary of the A-Z listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzListPages {
    pub last_page: u16,
}
