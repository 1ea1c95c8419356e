//! HTTP client presenting a browser header profile.

mod response;
mod user_agent;

pub use response::{HeadResponse, HttpResponse};
pub use user_agent::{ACCEPT, ACCEPT_ENCODING, USER_AGENT};

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use reqwest::Client;
use tracing::debug;

use super::fetch::{FetchOptions, PageFetcher};
use crate::error::{ScrapeError, ScrapeResult};
use user_agent::resolve_user_agent;

/// HTTP client with a fixed browser header profile.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default browser user agent.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, None)
    }

    /// Create a new HTTP client with custom user agent configuration.
    /// - None: Use the default browser user agent
    /// - Some(custom): Use custom user agent string
    pub fn with_user_agent(
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        Ok(Self { client, user_agent })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Make a GET request with the browser headers plus `options`.
    pub async fn get(
        &self,
        url: &str,
        options: &FetchOptions,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut request = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(header::ACCEPT_ENCODING, ACCEPT_ENCODING)
            .header(
                header::ACCEPT,
                options.accept.as_deref().unwrap_or(ACCEPT),
            );

        if options.ajax {
            request = request.header("X-Requested-With", "XMLHttpRequest");
        }
        if let Some(ref referer) = options.referer {
            request = request.header(header::REFERER, referer);
        }

        let start = Instant::now();
        let response = request.send().await?;
        debug!(
            "GET {} -> {} in {:?}",
            url,
            response.status(),
            start.elapsed()
        );

        Ok(HttpResponse {
            status: response.status(),
            response,
        })
    }

    /// Get page content as text, failing on non-success status.
    pub async fn get_text(&self, url: &str, options: &FetchOptions) -> ScrapeResult<String> {
        let response = self.get(url, options).await?;
        if !response.is_success() {
            return Err(ScrapeError::from_status(response.status));
        }
        Ok(response.text().await?)
    }

    /// Make a HEAD request to check reachability without downloading content.
    pub async fn head(&self, url: &str) -> Result<HeadResponse, reqwest::Error> {
        let start = Instant::now();
        let response = self.client.head(url).send().await?;
        debug!(
            "HEAD {} -> {} in {:?}",
            url,
            response.status(),
            start.elapsed()
        );

        Ok(HeadResponse {
            status: response.status(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> ScrapeResult<String> {
        self.get_text(url, options).await
    }
}
