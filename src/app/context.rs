use std::sync::Arc;

use crate::app::error::Result;
use crate::config::{Config, ResolveOptions};
use crate::domain::FetchResult;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::resolver::Resolver;

pub struct AppContext {
    pub config: Config,
    pub resolver: Resolver,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new()?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Build a context around any transport, e.g. a stub in tests.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let resolver = Resolver::with_workers(fetcher, config.enrich.workers);

        Self { config, resolver }
    }

    /// Resolve `url` with the configured request options.
    pub async fn resolve(&self, url: &str) -> Result<FetchResult> {
        self.resolve_with(url, &self.config.request).await
    }

    pub async fn resolve_with(&self, url: &str, options: &ResolveOptions) -> Result<FetchResult> {
        self.resolver.resolve(url, options).await
    }
}
