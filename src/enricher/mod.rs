//! Optional decoding of icon image bytes.
//!
//! Every icon is fetched concurrently and probed on its own. An icon whose bytes
//! cannot be fetched or decoded is returned without metadata, never dropped, and the
//! failure is recorded against that icon's URL.

mod probe;

pub use probe::probe_image;

use std::sync::Arc;

use crate::domain::{Diagnostics, Icon, OperationError, Step};
use crate::fetcher::parallel::ParallelFetcher;
use crate::fetcher::{Fetcher, RequestOptions};

#[derive(Clone)]
pub struct MetadataEnricher {
    parallel: ParallelFetcher,
}

impl MetadataEnricher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            parallel: ParallelFetcher::with_workers(fetcher, workers),
        }
    }

    /// Returns `icons` in the same order, with `metadata` set where probing succeeded.
    ///
    /// Each icon that could not be fetched or decoded adds one `enrich_metadata`
    /// error to `diagnostics`.
    pub async fn enrich(
        &self,
        icons: Vec<Icon>,
        options: &RequestOptions,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Icon> {
        let urls = icons.iter().map(|icon| icon.url.clone()).collect();
        let fetched = self.parallel.fetch_all(urls, options).await;

        icons
            .into_iter()
            .zip(fetched)
            .map(|(icon, result)| match result.and_then(|f| probe_image(f.body)) {
                Ok(metadata) => icon.with_metadata(metadata),
                Err(e) => {
                    diagnostics.record(
                        OperationError::new(Step::EnrichMetadata, e).with_url(icon.url.as_str()),
                    );
                    icon
                }
            })
            .collect()
    }
}
