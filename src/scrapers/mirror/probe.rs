//! Reachability probing of candidate mirrors.

use async_trait::async_trait;
use tracing::debug;

use super::super::HttpClient;

/// Reports whether a URL currently answers successfully.
///
/// Implementations never fail: any transport error, timeout or non-success
/// status is simply `false`.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> bool;
}

/// Probes with a single HEAD request, no retries.
#[derive(Clone)]
pub struct HttpProber {
    client: HttpClient,
}

impl HttpProber {
    /// The client's timeout bounds each probe.
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> bool {
        match self.client.head(url).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                debug!("Probe of {} failed: {}", url, e);
                false
            }
        }
    }
}
