//! Error taxonomy shared by the scraping pipeline and the HTTP surface.

use thiserror::Error;

/// Message used when a transport failure carries no usable status.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Something went wrong";

/// Message exposed for any extraction failure.
pub const EXTRACTION_PUBLIC_MESSAGE: &str = "Internal server error";

/// Errors that can occur while scraping and normalizing a page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Outbound call failed: non-success status, DNS, connect or timeout.
    #[error("Transport error ({status}): {message}")]
    Transport { status: u16, message: String },

    /// Response arrived but its content could not be interpreted.
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Caller supplied an unusable parameter.
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ScrapeError {
    /// Transport error for a remote that answered with a non-success status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Transport {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or(TRANSPORT_FALLBACK_MESSAGE)
                .to_string(),
        }
    }

    /// Transport error for a call that never produced a response.
    pub fn unreachable() -> Self {
        Self::Transport {
            status: 500,
            message: TRANSPORT_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> u16 {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Extraction(_) => 500,
            Self::Validation(_) => 400,
        }
    }

    /// Human-readable message safe to show to clients.
    pub fn public_message(&self) -> String {
        match self {
            Self::Transport { message, .. } => message.clone(),
            Self::Extraction(_) => EXTRACTION_PUBLIC_MESSAGE.to_string(),
            Self::Validation(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::from_status(status),
            None => Self::unreachable(),
        }
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Extraction(err.to_string())
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
