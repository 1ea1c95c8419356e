//! Episode records parsed from the episode-list fragment.

use serde::{Deserialize, Serialize};

/// A single episode of an anime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: Option<String>,
    /// Episode number from the row; `None` when the row's number is unparsable.
    pub episode_no: Option<i64>,
    /// Synthesized id, unique per (anime, sub/dub mode) pair.
    pub id: Option<String>,
    pub is_filler: bool,
}
