pub mod html;
pub mod manifest;

use scraper::Html;
use url::Url;

use crate::domain::{DescriptionCandidate, Diagnostics, Icon, Step, TitleCandidate};

/// Everything read from the page markup.
#[derive(Debug, Default)]
pub struct HtmlSources {
    pub title: String,
    pub titles: Vec<TitleCandidate>,
    pub descriptions: Vec<DescriptionCandidate>,
    pub icons: Vec<Icon>,
    pub manifest_url: Option<Url>,
}

impl HtmlSources {
    /// Run every HTML extractor over `body`, isolating failures per extractor.
    ///
    /// Relative references resolve against `base`, the page's final URL.
    pub fn extract(body: &str, base: &Url, diagnostics: &mut Diagnostics) -> Self {
        let document = Html::parse_document(body);

        Self {
            title: diagnostics.recover(Step::ExtractTitle, html::extract_title(&document)),
            titles: diagnostics.recover(Step::ExtractTitles, html::extract_titles(&document)),
            descriptions: diagnostics
                .recover(Step::ExtractDescriptions, html::extract_descriptions(&document)),
            icons: diagnostics.recover(Step::ExtractIcons, html::extract_icons(&document, base)),
            manifest_url: diagnostics
                .recover(Step::LocateManifest, html::locate_manifest(&document, base)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_sources() {
        let base = Url::parse("https://example.com/").unwrap();
        let mut diagnostics = Diagnostics::new();
        let sources = HtmlSources::extract(
            r#"<title>Home</title>
               <link rel="icon" href="/i.png">
               <link rel="manifest" href="/m.json">
               <meta name="description" content="About us">"#,
            &base,
            &mut diagnostics,
        );

        assert_eq!(sources.title, "Home");
        assert_eq!(sources.titles.len(), 1);
        assert_eq!(sources.descriptions.len(), 1);
        assert_eq!(sources.icons.len(), 1);
        assert_eq!(sources.manifest_url.unwrap().as_str(), "https://example.com/m.json");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_body() {
        let base = Url::parse("https://example.com/").unwrap();
        let mut diagnostics = Diagnostics::new();
        let sources = HtmlSources::extract("", &base, &mut diagnostics);

        assert!(sources.title.is_empty());
        assert!(sources.icons.is_empty());
        assert!(sources.manifest_url.is_none());
        assert!(diagnostics.is_empty());
    }
}
