//! Data models for scraped anime metadata.

mod anime;
mod episode;
mod extra;
mod response;

pub use anime::{AboutInfo, SubOrDub};
pub use episode::Episode;
pub use extra::ExtraInfo;
pub use response::{AnimeResponse, AzListPages};
