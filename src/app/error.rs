use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum IconhoundError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<IconhoundError>,
    },

    #[error("Invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },

    #[error("Manifest parsing error: {0}")]
    ManifestParse(String),

    #[error("Image decoding error: {0}")]
    ImageDecode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IconhoundError {
    /// Wraps a transport failure for the page at `url` into the fatal class.
    pub fn fetch(url: impl Into<String>, source: IconhoundError) -> Self {
        Self::Fetch {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// True for errors that abort a whole resolution.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidUrl(_) | Self::Fetch { .. })
    }
}

pub type Result<T> = std::result::Result<T, IconhoundError>;
