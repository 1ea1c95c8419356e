//! Normalized anime summary scraped from a detail page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio availability of an anime, derived from the sub/dub badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubOrDub {
    #[default]
    Sub,
    Dub,
    Both,
}

impl SubOrDub {
    /// Resolve from badge presence. Neither badge still means `Sub`.
    pub fn from_badges(has_sub: bool, has_dub: bool) -> Self {
        match (has_sub, has_dub) {
            (true, true) => Self::Both,
            (false, true) => Self::Dub,
            _ => Self::Sub,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sub => "sub",
            Self::Dub => "dub",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for SubOrDub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary fields read from the detail page's content root.
///
/// Every optional field is `None` when the page lacked that widget; that is
/// a normal outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    /// Site-internal numeric id, from the play button's link.
    pub id: Option<u64>,
    /// MyAnimeList id from the embedded sync blob.
    pub mal_id: Option<i64>,
    /// AniList id from the embedded sync blob.
    pub al_id: Option<i64>,
    pub title: Option<String>,
    pub image: Option<String>,
    /// Age rating label, e.g. "PG-13".
    pub rating: Option<String>,
    pub total_episodes: Option<u32>,
    pub sub_episodes: Option<u32>,
    pub dub_episodes: Option<u32>,
    /// Format label such as "TV" or "Movie".
    pub category: Option<String>,
    /// Quality label such as "HD".
    pub quality: Option<String>,
    pub description: Option<String>,
    pub sub_or_dub: SubOrDub,
}
