use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{DescriptionCandidate, Icon, TitleCandidate};

/// Pipeline stage a recoverable failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ExtractTitle,
    ExtractTitles,
    ExtractDescriptions,
    ExtractIcons,
    LocateManifest,
    FetchManifest,
    ParseManifest,
    EnrichMetadata,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::ExtractTitle => "extract_title",
            Step::ExtractTitles => "extract_titles",
            Step::ExtractDescriptions => "extract_descriptions",
            Step::ExtractIcons => "extract_icons",
            Step::LocateManifest => "locate_manifest",
            Step::FetchManifest => "fetch_manifest",
            Step::ParseManifest => "parse_manifest",
            Step::EnrichMetadata => "enrich_metadata",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recoverable failure observed while resolving. Never alters control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationError {
    pub step: Step,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

impl OperationError {
    pub fn new(step: Step, message: impl fmt::Display) -> Self {
        Self {
            step,
            message: message.to_string(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "[{}] {} ({})", self.step, self.message, url),
            None => write!(f, "[{}] {}", self.step, self.message),
        }
    }
}

/// Collects recoverable failures for one resolution.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<OperationError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, error: OperationError) {
        tracing::warn!("{}", error);
        self.errors.push(error);
    }

    /// Unwrap a step's outcome, recording the failure and substituting the default.
    pub fn recover<T: Default>(&mut self, step: Step, result: crate::app::Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.record(OperationError::new(step, e));
                T::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `None` when nothing was recorded.
    pub fn into_errors(self) -> Option<Vec<OperationError>> {
        (!self.errors.is_empty()).then_some(self.errors)
    }
}

/// Merged outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// Final page URL after redirects
    pub url: Url,
    /// Text of the first `<title>`, or empty
    pub title: String,
    pub titles: Vec<TitleCandidate>,
    pub descriptions: Vec<DescriptionCandidate>,
    pub icons: Vec<Icon>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub errors: Option<Vec<OperationError>>,
}

impl FetchResult {
    /// Best title: the first candidate, falling back to the `<title>` text.
    pub fn display_title(&self) -> &str {
        self.titles
            .first()
            .map(|t| t.value.as_str())
            .unwrap_or(&self.title)
    }

    pub fn errors(&self) -> &[OperationError] {
        self.errors.as_deref().unwrap_or(&[])
    }
}
