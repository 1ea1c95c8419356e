//! Configuration management for animirror.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then command-line overrides applied by the CLI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scrapers::mirror::MirrorSet;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "animirror.toml";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default Jikan REST endpoint.
pub const DEFAULT_JIKAN_API_URL: &str = "https://api.jikan.moe/v4";

/// A named group of interchangeable clone domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneGroup {
    pub name: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// One logical site: its primary base URL plus known clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub base: String,
    /// Clone groups, probed in declared order after `base`.
    #[serde(default)]
    pub clones: Vec<CloneGroup>,
}

impl SiteConfig {
    /// Flatten into the ordered candidate list: primary first, then clones.
    pub fn candidates(&self) -> Vec<String> {
        std::iter::once(self.base.clone())
            .chain(self.clones.iter().flat_map(|g| g.urls.iter().cloned()))
            .collect()
    }

    /// Build the mirror set for this site.
    pub fn mirror_set(&self) -> anyhow::Result<MirrorSet> {
        MirrorSet::new(self.candidates())
            .ok_or_else(|| anyhow::anyhow!("site '{}' has no mirror URLs", self.name))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "AniWatch".to_string(),
            base: "https://aniwatchtv.to".to_string(),
            clones: vec![CloneGroup {
                name: "HiAnime".to_string(),
                urls: vec![
                    "https://hianime.to".to_string(),
                    "https://hianime.nz".to_string(),
                    "https://hianime.sx".to_string(),
                ],
            }],
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Timeout for page and API fetches, in seconds.
    pub request_timeout_secs: u64,
    /// Timeout for a single mirror probe, in seconds.
    pub probe_timeout_secs: u64,
    /// Overrides the User-Agent of the browser header profile.
    pub user_agent: Option<String>,
    /// Base URL of the Jikan API used for staff lookups.
    pub jikan_api_url: String,
    /// Mirrored site scraped for anime details.
    pub site: SiteConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: 15,
            probe_timeout_secs: 5,
            user_agent: None,
            jikan_api_url: DEFAULT_JIKAN_API_URL.to_string(),
            site: SiteConfig::default(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable lookup.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|p| !p.is_empty()) {
            self.port = port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{}'", port))?;
        }
        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            self.host = host;
        }
        if let Some(url) = lookup("JIKAN_API_URL").filter(|u| !u.is_empty()) {
            self.jikan_api_url = url;
        }
        if let Some(ua) = lookup("ANIMIRROR_USER_AGENT").filter(|u| !u.is_empty()) {
            self.user_agent = Some(ua);
        }
        Ok(())
    }

    /// Reject settings the rest of the system cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mirrors = self.site.mirror_set()?;
        for candidate in mirrors.candidates() {
            url::Url::parse(candidate)
                .map_err(|e| anyhow::anyhow!("invalid mirror URL '{}': {}", candidate, e))?;
        }
        url::Url::parse(&self.jikan_api_url)
            .map_err(|e| anyhow::anyhow!("invalid jikan_api_url '{}': {}", self.jikan_api_url, e))?;
        Ok(())
    }
}

/// Options controlling where settings are loaded from.
#[derive(Debug, Default)]
pub struct LoadOptions {
    /// Explicit config file path. Must exist when given.
    pub config_path: Option<PathBuf>,
}

/// Load settings from defaults, config file and environment.
pub fn load_settings(options: LoadOptions) -> anyhow::Result<Settings> {
    let mut settings = match options.config_path {
        Some(path) => read_config_file(&path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                Settings::default()
            }
        }
    };

    settings.apply_env()?;
    settings.validate()?;
    Ok(settings)
}

fn read_config_file(path: &Path) -> anyhow::Result<Settings> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))?;
    tracing::debug!("Loaded config from {}", path.display());
    Settings::from_toml(&text)
}
