use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Where an icon candidate was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSource {
    Html,
    Manifest,
    Default,
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            IconSource::Html => "html",
            IconSource::Manifest => "manifest",
            IconSource::Default => "default",
        })
    }
}

/// Decoded properties of an icon's image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Lowercase format token reported by the decoder, e.g. `png` or `ico`
    pub format: String,
    /// Length of the fetched body in bytes
    pub size: usize,
    #[serde(skip)]
    pub buffer: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub url: Url,
    #[serde(rename = "type")]
    pub kind: String,
    pub sizes: String,
    source: IconSource,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<ImageMetadata>,
}

impl Icon {
    pub fn new(url: Url, kind: impl Into<String>, sizes: impl Into<String>, source: IconSource) -> Self {
        Self {
            url,
            kind: kind.into(),
            sizes: sizes.into(),
            source,
            metadata: None,
        }
    }

    /// The conventional `/favicon.ico` placeholder used when nothing else was found.
    pub fn fallback(url: Url) -> Self {
        Self::new(url, "default", "", IconSource::Default)
    }

    pub fn source(&self) -> IconSource {
        self.source
    }

    /// Attach decoded image properties. An icon carries at most one set.
    pub fn with_metadata(mut self, metadata: ImageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
