use std::sync::Arc;

use tokio::sync::Semaphore;
use url::Url;

use crate::app::Result;
use crate::fetcher::{Fetched, Fetcher, RequestOptions};

pub const DEFAULT_WORKERS: usize = 10;

/// Fetches many URLs concurrently, returning results in input order.
#[derive(Clone)]
pub struct ParallelFetcher {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    semaphore: Arc<Semaphore>,
}

impl ParallelFetcher {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            fetcher,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Issue every fetch at once and join them.
    ///
    /// One result per URL, in input order. A task that panics fails only its own slot.
    pub async fn fetch_all(&self, urls: Vec<Url>, options: &RequestOptions) -> Vec<Result<Fetched>> {
        let handles: Vec<_> = urls
            .into_iter()
            .map(|url| {
                let fetcher = self.fetcher.clone();
                let semaphore = self.semaphore.clone();
                let options = options.clone();

                tokio::spawn(async move {
                    let _permit = semaphore.acquire_owned().await.ok();
                    fetcher.fetch(&url, &options).await
                })
            })
            .collect();

        futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.unwrap_or_else(|e| {
                    tracing::error!("Task join error: {}", e);
                    Err(e.into())
                })
            })
            .collect()
    }
}
