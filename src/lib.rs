//! animirror - anime metadata scraper with mirror failover.
//!
//! Scrapes anime detail pages and episode lists from whichever clone of the
//! source site currently answers, normalizes them into a flat JSON record,
//! and serves the result over HTTP.

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod scrapers;
pub mod server;
