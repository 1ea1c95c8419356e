//! Scraping of the mirrored anime site.

pub mod anime;
pub mod extract;
pub mod fetch;
mod http_client;
pub mod mirror;

pub use anime::AnimeScraper;
pub use fetch::{FetchOptions, PageFetcher};
pub use http_client::{HttpClient, ACCEPT, ACCEPT_ENCODING, USER_AGENT};
pub use mirror::{EndpointSet, HttpProber, MirrorResolver, MirrorSet, Prober};
