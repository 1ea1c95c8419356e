//! Mirror selection and failover.
//!
//! The scraped site rotates between interchangeable clone domains. Before
//! every scrape the resolver probes the candidates in declared order and
//! settles on the first one that answers. When none answer, the last mirror
//! that worked stays in effect so the real fetch surfaces the real error.

mod endpoints;
mod probe;

pub use endpoints::EndpointSet;
pub use probe::{HttpProber, Prober};

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Ordered, non-empty list of candidate base URLs for one logical site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSet {
    candidates: Vec<String>,
}

impl MirrorSet {
    /// Build from candidate URLs, dropping blanks and trailing slashes.
    /// Returns `None` when no candidate remains.
    pub fn new<I, S>(urls: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates: Vec<String> = urls
            .into_iter()
            .map(|u| u.as_ref().trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(Self { candidates })
        }
    }

    /// The primary mirror.
    pub fn primary(&self) -> &str {
        &self.candidates[0]
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Return the first candidate the prober reports reachable.
pub async fn first_reachable<'a>(prober: &dyn Prober, candidates: &'a [String]) -> Option<&'a str> {
    for candidate in candidates {
        if prober.probe(candidate).await {
            return Some(candidate.as_str());
        }
        debug!("Mirror {} unreachable", candidate);
    }
    None
}

/// Picks a live mirror and remembers the last one that worked.
///
/// Concurrent resolutions may race on the remembered base; the last writer
/// wins, which only changes which live mirror is used.
pub struct MirrorResolver {
    mirrors: MirrorSet,
    effective: RwLock<String>,
    prober: Arc<dyn Prober>,
}

impl MirrorResolver {
    pub fn new(mirrors: MirrorSet, prober: Arc<dyn Prober>) -> Self {
        let effective = RwLock::new(mirrors.primary().to_string());
        Self {
            mirrors,
            effective,
            prober,
        }
    }

    pub fn mirrors(&self) -> &MirrorSet {
        &self.mirrors
    }

    /// Base URL currently in effect.
    pub async fn effective_base(&self) -> String {
        self.effective.read().await.clone()
    }

    /// Probe candidates and derive the endpoints for this request.
    ///
    /// Never fails: with no reachable mirror the previous base is kept.
    pub async fn resolve(&self) -> EndpointSet {
        match first_reachable(self.prober.as_ref(), self.mirrors.candidates()).await {
            Some(base) => {
                let mut effective = self.effective.write().await;
                if *effective != base {
                    info!("Switching mirror from {} to {}", *effective, base);
                    *effective = base.to_string();
                }
                EndpointSet::new(base)
            }
            None => {
                let effective = self.effective.read().await;
                warn!(
                    "No mirror reachable out of {}; keeping {}",
                    self.mirrors.len(),
                    *effective
                );
                EndpointSet::new(&effective)
            }
        }
    }

    /// Probe every candidate, in order, for diagnostics.
    pub async fn probe_all(&self) -> Vec<(String, bool)> {
        let mut results = Vec::with_capacity(self.mirrors.len());
        for candidate in self.mirrors.candidates() {
            let reachable = self.prober.probe(candidate).await;
            results.push((candidate.clone(), reachable));
        }
        results
    }
}
