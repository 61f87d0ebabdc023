use std::fmt::Write;

use crate::app::{AppContext, Result};
use crate::cli::RequestArgs;
use crate::domain::{FetchResult, Icon};

pub async fn resolve(ctx: &AppContext, request: &RequestArgs, json: bool) -> Result<()> {
    let options = request.apply(&ctx.config.request);
    let result = ctx.resolve_with(&request.url, &options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }

    Ok(())
}

pub async fn list_icons(ctx: &AppContext, request: &RequestArgs) -> Result<()> {
    let options = request.apply(&ctx.config.request);
    let result = ctx.resolve_with(&request.url, &options).await?;

    for icon in &result.icons {
        println!("{}", render_icon(icon));
    }

    for error in result.errors() {
        eprintln!("warning: {}", error);
    }

    Ok(())
}

pub fn render_icon(icon: &Icon) -> String {
    let sizes = if icon.sizes.is_empty() { "-" } else { icon.sizes.as_str() };
    let mut line = format!(
        "{:<8}  {:<20}  {:<9}  {}",
        icon.source(),
        icon.kind,
        sizes,
        icon.url
    );

    if let Some(metadata) = &icon.metadata {
        let _ = write!(
            line,
            "  [{} {}x{} {}B]",
            metadata.format, metadata.width, metadata.height, metadata.size
        );
    }

    line
}

pub fn render_result(result: &FetchResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "URL: {}", result.url);
    let _ = writeln!(out, "Title: {}", result.display_title());

    if !result.titles.is_empty() {
        let _ = writeln!(out, "\nTitles:");
        for title in &result.titles {
            let _ = writeln!(out, "  {:<14}  {}", title.property, title.value);
        }
    }

    if !result.descriptions.is_empty() {
        let _ = writeln!(out, "\nDescriptions:");
        for description in &result.descriptions {
            let _ = writeln!(out, "  {:<20}  {}", description.property, description.value);
        }
    }

    let _ = writeln!(out, "\nIcons ({}):", result.icons.len());
    for icon in &result.icons {
        let _ = writeln!(out, "  {}", render_icon(icon));
    }

    if !result.errors().is_empty() {
        let _ = writeln!(out, "\nErrors:");
        for error in result.errors() {
            let _ = writeln!(out, "  {}", error);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CandidateSource, IconSource, ImageMetadata, OperationError, Step, TitleCandidate,
    };
    use url::Url;

    fn sample() -> FetchResult {
        FetchResult {
            url: Url::parse("https://example.com/").unwrap(),
            title: "Example".into(),
            titles: TitleCandidate::new("Example", CandidateSource::Html, "title")
                .into_iter()
                .collect(),
            descriptions: Vec::new(),
            icons: vec![Icon::fallback(
                Url::parse("https://example.com/favicon.ico").unwrap(),
            )],
            errors: Some(vec![OperationError::new(Step::FetchManifest, "HTTP 404")]),
        }
    }

    #[test]
    fn test_render_icon() {
        let icon = Icon::new(
            Url::parse("https://example.com/a.png").unwrap(),
            "icon",
            "32x32",
            IconSource::Html,
        )
        .with_metadata(ImageMetadata {
            width: 32,
            height: 32,
            format: "png".into(),
            size: 120,
            buffer: Vec::new(),
        });

        let line = render_icon(&icon);
        assert!(line.starts_with("html"));
        assert!(line.contains("32x32"));
        assert!(line.contains("https://example.com/a.png"));
        assert!(line.ends_with("[png 32x32 120B]"));
    }

    #[test]
    fn test_render_result() {
        let out = render_result(&sample());
        assert!(out.contains("Title: Example"));
        assert!(out.contains("Icons (1):"));
        assert!(out.contains("default"));
        assert!(out.contains("[fetch_manifest] HTTP 404"));
        assert!(!out.contains("Descriptions:"));
    }
}
