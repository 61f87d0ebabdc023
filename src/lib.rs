//! # iconhound
//!
//! Discovers a web site's icons, titles and descriptions from a single page.
//!
//! ## Architecture
//!
//! ```text
//! Normalizer → Fetcher → HTML extractors → Manifest resolver → Merge → Enricher
//! ```
//!
//! Sources are visited in a fixed priority order (page markup, then the Web App
//! Manifest, then the `/favicon.ico` convention) and concatenated, never deduplicated.
//! Apart from an invalid URL or a failed page fetch, every step may fail without
//! aborting: failures are collected in [`FetchResult::errors`](domain::FetchResult).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn run() -> iconhound::app::Result<()> {
//! use iconhound::config::ResolveOptions;
//!
//! let result = iconhound::resolve("https://www.rust-lang.org", &ResolveOptions::default()).await?;
//! for icon in &result.icons {
//!     println!("{} {}", icon.kind, icon.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Request options and config file loading
//! - [`domain`]: Icons, candidates, results
//! - [`enricher`]: Image metadata probing
//! - [`extractor`]: HTML and manifest extractors
//! - [`fetcher`]: HTTP transport
//! - [`manifest`]: Web App Manifest resolution
//! - [`normalizer`]: URL validation and resolution
//! - [`resolver`]: The resolution pipeline

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config, fetcher and resolver.
pub mod app;

/// Command-line interface using clap.
///
/// - `resolve <url>` - Print titles, descriptions and icons
/// - `icons <url>` - Print icons only
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/iconhound/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Icon`](domain::Icon): A resolved icon and optional image metadata
/// - [`TitleCandidate`](domain::TitleCandidate) / [`DescriptionCandidate`](domain::DescriptionCandidate)
/// - [`FetchResult`](domain::FetchResult): The merged result
pub mod domain;

/// Optional per-icon dimension and format probing.
pub mod enricher;

/// Side-effect free extractors over HTML documents and manifests.
pub mod extractor;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for fetching a URL
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ParallelFetcher`](fetcher::parallel::ParallelFetcher): Concurrent fetching with semaphore
pub mod fetcher;

/// Web App Manifest fetching and lenient parsing.
pub mod manifest;

/// URL normalization and relative reference resolution.
pub mod normalizer;

/// The resolution pipeline.
pub mod resolver;

use std::sync::Arc;

use crate::app::Result;
use crate::config::ResolveOptions;
use crate::domain::FetchResult;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::resolver::Resolver;

/// Resolve `url` over HTTP with default concurrency.
pub async fn resolve(url: &str, options: &ResolveOptions) -> Result<FetchResult> {
    let resolver = Resolver::new(Arc::new(HttpFetcher::new()?));
    resolver.resolve(url, options).await
}
