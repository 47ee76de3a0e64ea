//! URL handling for pagination links
//!
//! Next-page hrefs come straight out of page markup and may be relative,
//! fragment-only, or point at non-HTTP schemes. This module resolves them
//! against the page's own URL and filters out anything the spider cannot
//! follow.

use url::Url;

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should not be followed:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - hrefs that do not join into a valid HTTP(S) URL
///
/// # Arguments
///
/// * `href` - The raw href attribute value
/// * `base_url` - The URL of the page the href appeared on
///
/// # Examples
///
/// ```
/// use quotewalk::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://quotes.toscrape.com/page/1/").unwrap();
/// let next = resolve_href("/page/2/", &base).unwrap();
/// assert_eq!(next.as_str(), "https://quotes.toscrape.com/page/2/");
/// ```
pub fn resolve_href(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    // Try to resolve the URL
    match base_url.join(href) {
        Ok(absolute_url) => {
            // Only accept HTTP and HTTPS URLs
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
