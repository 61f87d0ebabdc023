use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::fetcher::parallel::DEFAULT_WORKERS;

/// Default timeout applied to every network call, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Options recognised by a single resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Fetch and decode every resolved icon (default: false)
    pub include_metadata: bool,

    /// Timeout for the page, manifest and icon fetches in milliseconds (default: 10000)
    pub timeout_ms: u64,

    /// Replaces the default browser User-Agent when set
    pub user_agent: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_metadata: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

impl ResolveOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Settings for the metadata enrichment stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Maximum concurrent icon fetches (default: 10)
    pub workers: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}
