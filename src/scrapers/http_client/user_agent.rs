//! Browser header profile for outbound requests.
//!
//! The mirrors sit behind anti-bot checks that reject obvious clients, so
//! every request presents itself as a desktop Firefox.

pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0";

pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";

/// Resolve user agent from config value.
/// - None => default browser user agent
/// - other => custom user agent string
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        None | Some("") => USER_AGENT.to_string(),
        Some(custom) => custom.to_string(),
    }
}
