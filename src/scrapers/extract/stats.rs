//! Positional parse of the label-free stats row.
//!
//! The row renders as a run of badges with no labels, e.g.
//! `PG-13 HD 12 12 TV • 24m`. Category and duration are read by position
//! from the end, which is the only stable anchor in that markup.

/// Fields recovered from the stats row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsRow {
    /// Second-to-last token.
    pub category: Option<String>,
    /// Last token, the episode runtime. Read positionally like `category`
    /// but not carried into the summary record.
    pub duration: Option<String>,
}

/// Collapse whitespace, split on spaces, read fields from fixed positions.
pub fn parse_stats_row(text: &str) -> StatsRow {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let n = tokens.len();

    StatsRow {
        category: n.checked_sub(2).map(|i| tokens[i].to_string()),
        duration: tokens.last().map(|t| t.to_string()),
    }
}
