//! The resolution pipeline.
//!
//! ```text
//! Start → HtmlFetched → Extracted → ManifestResolved → Merged → (Enriched) → Done
//! ```
//!
//! Only an invalid URL or a failed page fetch ends a resolution early. Every later
//! stage degrades: its failure is recorded in the result's `errors` and the pipeline
//! continues with whatever was gathered.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::app::{IconhoundError, Result};
use crate::config::ResolveOptions;
use crate::domain::{Diagnostics, FetchResult, Icon};
use crate::enricher::MetadataEnricher;
use crate::extractor::{manifest, HtmlSources};
use crate::fetcher::parallel::DEFAULT_WORKERS;
use crate::fetcher::{Fetcher, RequestOptions};
use crate::manifest::ManifestResolver;
use crate::normalizer::{default_favicon_url, normalize_url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    HtmlFetched,
    Extracted,
    ManifestResolved,
    Merged,
    Enriched,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::HtmlFetched => "html_fetched",
            Stage::Extracted => "extracted",
            Stage::ManifestResolved => "manifest_resolved",
            Stage::Merged => "merged",
            Stage::Enriched => "enriched",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage, url: &Url) {
    tracing::debug!("[{}] {}", stage, url);
}

#[derive(Clone)]
pub struct Resolver {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    manifests: ManifestResolver,
    enricher: MetadataEnricher,
}

impl Resolver {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: Arc<dyn Fetcher + Send + Sync>, workers: usize) -> Self {
        Self {
            manifests: ManifestResolver::new(fetcher.clone()),
            enricher: MetadataEnricher::new(fetcher.clone(), workers),
            fetcher,
        }
    }

    /// Resolve icons, titles and descriptions for the page at `input`.
    ///
    /// Fails only if `input` is not an absolute http(s) URL, or if the page itself
    /// cannot be fetched. The returned icon list is never empty.
    pub async fn resolve(&self, input: &str, options: &ResolveOptions) -> Result<FetchResult> {
        let url = normalize_url(input)?;
        enter(Stage::Start, &url);

        let request = RequestOptions::from(options);
        let page = self
            .fetcher
            .fetch(&url, &request)
            .await
            .map_err(|e| IconhoundError::fetch(input, e))?;
        let page_url = page.url.clone();
        enter(Stage::HtmlFetched, &page_url);

        let mut diagnostics = Diagnostics::new();
        let html = HtmlSources::extract(&page.text(), &page_url, &mut diagnostics);
        enter(Stage::Extracted, &page_url);

        let mut icons = html.icons;
        let mut titles = html.titles;
        let mut descriptions = html.descriptions;

        if let Some(manifest_url) = &html.manifest_url {
            if let Some(document) = self
                .manifests
                .resolve(manifest_url, &request, &mut diagnostics)
                .await
            {
                icons.extend(manifest::extract_icons(&document, &page_url));
                titles.extend(manifest::extract_titles(&document));
                descriptions.extend(manifest::extract_descriptions(&document));
            }
            enter(Stage::ManifestResolved, manifest_url);
        }

        if icons.is_empty() {
            let fallback = default_favicon_url(&page_url)?;
            tracing::debug!("No icons declared, falling back to {}", fallback);
            icons.push(Icon::fallback(fallback));
        }
        enter(Stage::Merged, &page_url);

        if options.include_metadata {
            icons = self
                .enricher
                .enrich(icons, &request, &mut diagnostics)
                .await;
            enter(Stage::Enriched, &page_url);
        }

        tracing::info!(
            "Resolved {} icons, {} titles, {} descriptions for {}",
            icons.len(),
            titles.len(),
            descriptions.len(),
            page_url
        );
        enter(Stage::Done, &page_url);

        Ok(FetchResult {
            url: page_url,
            title: html.title,
            titles,
            descriptions,
            icons,
            errors: diagnostics.into_errors(),
        })
    }
}
