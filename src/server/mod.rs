//! HTTP API serving scraped anime metadata.
//!
//! Provides:
//! - Anime details merged from the detail page and the episode list
//! - Staff listings relayed from the metadata service
//! - A-Z listing pagination

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::metadata::{JikanClient, StaffProvider};
use crate::scrapers::{AnimeScraper, HttpClient, HttpProber, MirrorResolver, PageFetcher};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<AnimeScraper>,
    pub staff: Arc<dyn StaffProvider>,
}

impl AppState {
    /// Wire real HTTP clients from settings.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let user_agent = settings.user_agent.as_deref();
        let fetch_client = HttpClient::with_user_agent(settings.request_timeout(), user_agent)?;
        let probe_client = HttpClient::with_user_agent(settings.probe_timeout(), user_agent)?;

        let resolver = Arc::new(MirrorResolver::new(
            settings.site.mirror_set()?,
            Arc::new(HttpProber::new(probe_client)),
        ));
        let fetcher: Arc<dyn PageFetcher> = Arc::new(fetch_client);

        Ok(Self::from_parts(
            Arc::new(AnimeScraper::new(resolver, fetcher.clone())),
            Arc::new(JikanClient::new(fetcher, &settings.jikan_api_url)),
        ))
    }

    pub fn from_parts(scraper: Arc<AnimeScraper>, staff: Arc<dyn StaffProvider>) -> Self {
        Self { scraper, staff }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!(
        "Starting server at http://{} (primary mirror {})",
        addr,
        settings.site.base
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
