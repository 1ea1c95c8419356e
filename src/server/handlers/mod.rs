//! HTTP request handlers for the web server.

mod anime;
mod api;
mod helpers;
mod staff;

// Re-export handlers for use by the router
pub use anime::{az_list_pages, get_anime};
pub use api::health;
pub use staff::get_staff;
