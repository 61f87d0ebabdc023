//! Extractors over a parsed HTML document.
//!
//! Each function is independent and side-effect free. The only failure mode is a
//! selector that fails to compile, which callers record and replace with an empty result.

use scraper::{Html, Selector};
use url::Url;

use crate::app::{IconhoundError, Result};
use crate::domain::{CandidateSource, DescriptionCandidate, Icon, IconSource, TitleCandidate};
use crate::normalizer::resolve_url;

/// `rel` fragments that mark a `<link>` as an icon. Matched as substrings.
pub const ICON_REL_TOKENS: [&str; 5] = [
    "icon",
    "shortcut icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    "mask-icon",
];

const TITLE: &str = "title";
const LINK_WITH_REL: &str = "link[rel]";
const OG_IMAGE: &str = r#"meta[property="og:image"], meta[name="og:image"]"#;

/// (selector, source, property) in priority order.
const TITLE_META: [(&str, CandidateSource, &str); 2] = [
    (
        r#"meta[property="og:title"], meta[name="og:title"]"#,
        CandidateSource::Opengraph,
        "og:title",
    ),
    (
        r#"meta[name="twitter:title"], meta[property="twitter:title"]"#,
        CandidateSource::Twitter,
        "twitter:title",
    ),
];

const DESCRIPTION_META: [(&str, CandidateSource, &str); 3] = [
    (r#"meta[name="description"]"#, CandidateSource::Html, "description"),
    (
        r#"meta[property="og:description"], meta[name="og:description"]"#,
        CandidateSource::Opengraph,
        "og:description",
    ),
    (
        r#"meta[name="twitter:description"], meta[property="twitter:description"]"#,
        CandidateSource::Twitter,
        "twitter:description",
    ),
];

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| IconhoundError::Selector {
        selector: css.to_string(),
        message: format!("{e:?}"),
    })
}

/// `content` of the first element matching `css` that carries one.
fn meta_content(document: &Html, css: &str) -> Result<Option<String>> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .find_map(|element| element.value().attr("content"))
        .map(String::from))
}

/// Trimmed text of the first `<title>`, or an empty string.
pub fn extract_title(document: &Html) -> Result<String> {
    let selector = selector(TITLE)?;
    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}

/// `<title>`, then `og:title`, then `twitter:title`; blanks are skipped.
pub fn extract_titles(document: &Html) -> Result<Vec<TitleCandidate>> {
    let mut titles = Vec::new();

    if let Some(title) = TitleCandidate::new(&extract_title(document)?, CandidateSource::Html, TITLE) {
        titles.push(title);
    }

    for (css, source, property) in TITLE_META {
        if let Some(content) = meta_content(document, css)? {
            titles.extend(TitleCandidate::new(&content, source, property));
        }
    }

    Ok(titles)
}

/// `description`, then `og:description`, then `twitter:description`; blanks are skipped.
pub fn extract_descriptions(document: &Html) -> Result<Vec<DescriptionCandidate>> {
    let mut descriptions = Vec::new();

    for (css, source, property) in DESCRIPTION_META {
        if let Some(content) = meta_content(document, css)? {
            descriptions.extend(DescriptionCandidate::new(&content, source, property));
        }
    }

    Ok(descriptions)
}

pub fn is_icon_rel(rel: &str) -> bool {
    let rel = rel.to_lowercase();
    ICON_REL_TOKENS.iter().any(|token| rel.contains(token))
}

/// Icon `<link>`s in document order.
///
/// When the document has no icon links at all, the `og:image` content stands in.
pub fn extract_icons(document: &Html, base: &Url) -> Result<Vec<Icon>> {
    let links = selector(LINK_WITH_REL)?;
    let mut icons = Vec::new();
    let mut matched = 0usize;

    for element in document.select(&links) {
        let link = element.value();
        let rel = link.attr("rel").unwrap_or_default();
        if !is_icon_rel(rel) {
            continue;
        }
        matched += 1;

        match link.attr("href").and_then(|href| resolve_url(base, href)) {
            Some(url) => icons.push(Icon::new(
                url,
                rel,
                link.attr("sizes").unwrap_or_default(),
                IconSource::Html,
            )),
            None => tracing::debug!("Skipping icon link without usable href (rel={})", rel),
        }
    }

    if matched == 0 {
        if let Some(url) = meta_content(document, OG_IMAGE)?.and_then(|c| resolve_url(base, &c)) {
            icons.push(Icon::new(url, "og:image", "", IconSource::Html));
        }
    }

    Ok(icons)
}

/// Absolute URL of the first `<link rel="manifest">`.
///
/// Only the first manifest link counts. If its href is missing or unusable there is
/// no manifest, even when a later link would resolve.
pub fn locate_manifest(document: &Html, base: &Url) -> Result<Option<Url>> {
    let links = selector(LINK_WITH_REL)?;

    Ok(document
        .select(&links)
        .find(|element| {
            element
                .value()
                .attr("rel")
                .unwrap_or_default()
                .split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("manifest"))
        })
        .and_then(|element| {
            element
                .value()
                .attr("href")
                .and_then(|href| resolve_url(base, href))
        }))
}
