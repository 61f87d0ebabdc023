//! Web App Manifest fetching and parsing.
//!
//! A manifest is optional: every failure here is recorded and resolution continues
//! as if the page declared none.

mod document;

pub use document::{ManifestDocument, ManifestIcon};

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::app::{IconhoundError, Result};
use crate::domain::{Diagnostics, OperationError, Step};
use crate::fetcher::{Fetcher, RequestOptions};

/// Decode `body` as UTF-8 JSON and require an object at the root.
pub fn parse_manifest(body: &[u8]) -> Result<ManifestDocument> {
    let text = std::str::from_utf8(body)
        .map_err(|e| IconhoundError::ManifestParse(format!("not UTF-8: {e}")))?;
    let value: Value = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;

    ManifestDocument::from_value(&value)
        .ok_or_else(|| IconhoundError::ManifestParse("root is not a JSON object".into()))
}

#[derive(Clone)]
pub struct ManifestResolver {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
}

impl ManifestResolver {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse the manifest at `url`.
    ///
    /// Failures are recorded in `diagnostics` under `fetch_manifest` or `parse_manifest`
    /// and yield `None`.
    pub async fn resolve(
        &self,
        url: &Url,
        options: &RequestOptions,
        diagnostics: &mut Diagnostics,
    ) -> Option<ManifestDocument> {
        let fetched = match self.fetcher.fetch(url, options).await {
            Ok(fetched) => fetched,
            Err(e) => {
                diagnostics.record(OperationError::new(Step::FetchManifest, e).with_url(url.as_str()));
                return None;
            }
        };

        match parse_manifest(&fetched.body) {
            Ok(document) => {
                tracing::debug!("Parsed manifest {}", fetched.url);
                Some(document)
            }
            Err(e) => {
                diagnostics.record(OperationError::new(Step::ParseManifest, e).with_url(url.as_str()));
                None
            }
        }
    }
}
