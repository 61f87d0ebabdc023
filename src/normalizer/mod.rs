//! URL validation and resolution.

use url::Url;

use crate::app::{IconhoundError, Result};

/// Parse `input` as an absolute http(s) URL and return its canonical form.
pub fn normalize_url(input: &str) -> Result<Url> {
    let url = Url::parse(input.trim())
        .map_err(|e| IconhoundError::InvalidUrl(format!("{input} ({e})")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(IconhoundError::InvalidUrl(format!(
                "{input} (unsupported scheme {scheme})"
            )))
        }
    }

    Ok(url)
}

/// Resolve `href` against `base`. Blank references and unparseable ones yield `None`.
pub fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok()
}

/// `{scheme}://{host}/favicon.ico` for the page at `base`, port preserved and
/// credentials dropped.
pub fn default_favicon_url(base: &Url) -> Result<Url> {
    let mut url = base
        .join("/favicon.ico")
        .map_err(|e| IconhoundError::InvalidUrl(format!("{base} ({e})")))?;
    // Only fails for cannot-be-a-base URLs, which http(s) never are.
    let _ = url.set_username("");
    let _ = url.set_password(None);
    Ok(url)
}
