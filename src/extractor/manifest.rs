//! Extractors over a parsed Web App Manifest.

use url::Url;

use crate::domain::{CandidateSource, DescriptionCandidate, Icon, IconSource, TitleCandidate};
use crate::manifest::ManifestDocument;
use crate::normalizer::resolve_url;

const DEFAULT_ICON_TYPE: &str = "manifest-icon";

/// Icons in manifest order. `src` is resolved against the page URL, not the manifest URL.
pub fn extract_icons(manifest: &ManifestDocument, page_url: &Url) -> Vec<Icon> {
    let Some(entries) = &manifest.icons else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let src = entry.src.as_deref().filter(|src| !src.trim().is_empty())?;
            let url = resolve_url(page_url, src)?;
            let kind = entry
                .kind
                .as_deref()
                .filter(|kind| !kind.is_empty())
                .unwrap_or(DEFAULT_ICON_TYPE);

            Some(Icon::new(
                url,
                kind,
                entry.sizes.as_deref().unwrap_or_default(),
                IconSource::Manifest,
            ))
        })
        .collect()
}

/// `name`, then `short_name`.
pub fn extract_titles(manifest: &ManifestDocument) -> Vec<TitleCandidate> {
    [
        (manifest.name.as_deref(), "name"),
        (manifest.short_name.as_deref(), "short_name"),
    ]
    .into_iter()
    .filter_map(|(value, property)| {
        TitleCandidate::new(value?, CandidateSource::Manifest, property)
    })
    .collect()
}

pub fn extract_descriptions(manifest: &ManifestDocument) -> Vec<DescriptionCandidate> {
    manifest
        .description
        .as_deref()
        .and_then(|value| DescriptionCandidate::new(value, CandidateSource::Manifest, "description"))
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_url() -> Url {
        Url::parse("https://example.com/app/index.html").unwrap()
    }

    fn manifest(value: serde_json::Value) -> ManifestDocument {
        ManifestDocument::from_value(&value).unwrap()
    }

    #[test]
    fn test_icons_preserve_order_and_defaults() {
        let doc = manifest(json!({
            "icons": [
                {"src": "/icons/512.png", "type": "image/png", "sizes": "512x512"},
                {"src": "icons/any.svg"},
                {"src": ""},
                {"type": "image/png"}
            ]
        }));
        let icons = extract_icons(&doc, &page_url());

        assert_eq!(icons.len(), 2);
        assert_eq!(icons[0].url.as_str(), "https://example.com/icons/512.png");
        assert_eq!(icons[0].kind, "image/png");
        assert_eq!(icons[0].sizes, "512x512");
        assert_eq!(icons[1].url.as_str(), "https://example.com/app/icons/any.svg");
        assert_eq!(icons[1].kind, "manifest-icon");
        assert_eq!(icons[1].sizes, "");
        assert!(icons.iter().all(|i| i.source() == IconSource::Manifest));
    }

    #[test]
    fn test_icons_not_an_array() {
        let doc = manifest(json!({"icons": "icon.png"}));
        assert!(extract_icons(&doc, &page_url()).is_empty());
    }

    #[test]
    fn test_purpose_is_ignored() {
        let doc = manifest(json!({
            "icons": [
                {"src": "/mono.png", "purpose": "monochrome"},
                {"src": "/mask.png", "purpose": "maskable"}
            ]
        }));
        assert_eq!(extract_icons(&doc, &page_url()).len(), 2);
    }

    #[test]
    fn test_titles_name_then_short_name() {
        let doc = manifest(json!({"short_name": " Ex ", "name": "Example App"}));
        let titles = extract_titles(&doc);

        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].value, "Example App");
        assert_eq!(titles[0].property, "name");
        assert_eq!(titles[1].value, "Ex");
        assert_eq!(titles[1].property, "short_name");
        assert!(titles.iter().all(|t| t.source == CandidateSource::Manifest));
    }

    #[test]
    fn test_blank_or_mistyped_titles_skipped() {
        let doc = manifest(json!({"name": "   ", "short_name": 12}));
        assert!(extract_titles(&doc).is_empty());
    }

    #[test]
    fn test_description() {
        let doc = manifest(json!({"description": "  A fine app "}));
        let descriptions = extract_descriptions(&doc);
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0].value, "A fine app");
        assert_eq!(descriptions[0].property, "description");

        assert!(extract_descriptions(&manifest(json!({}))).is_empty());
    }
}
