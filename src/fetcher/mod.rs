pub mod http_fetcher;
pub mod parallel;

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::app::Result;
use crate::config::ResolveOptions;

/// Per-request knobs shared by every fetch of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl From<&ResolveOptions> for RequestOptions {
    fn from(options: &ResolveOptions) -> Self {
        Self {
            timeout: options.timeout(),
            user_agent: options.user_agent.clone(),
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        (&ResolveOptions::default()).into()
    }
}

/// A successfully fetched resource.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// Final URL after redirects
    pub url: Url,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Fetched {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait Fetcher {
    /// Fetch `url`, following redirects. Statuses outside 2xx-3xx are errors.
    async fn fetch(&self, url: &Url, options: &RequestOptions) -> Result<Fetched>;
}
