//! Hyperlink extraction from fetched page content
//!
//! Anchors are pulled from HTML, resolved against the page URL with full
//! URI-resolution semantics, normalized, and filtered through the scope
//! filter before they are yielded. Anything that fails along the way (a
//! malformed href, an out-of-scope host, an excluded extension) is silently
//! dropped; a bad link is not an error. Parsing recovers from malformed
//! markup, so a broken tag costs at most the links inside it.

use crate::url::{NormalizedUrl, ScopeFilter};
use scraper::{Html, Selector};

/// Extracts in-scope candidate links from fetched pages
///
/// Ordering of the returned links carries no guarantee; callers that want
/// set semantics must deduplicate.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    scope: ScopeFilter,
}

impl LinkExtractor {
    /// Creates an extractor that validates candidates against the scope
    pub fn new(scope: ScopeFilter) -> Self {
        Self { scope }
    }

    /// Extracts candidate links from page content
    ///
    /// Non-HTML content yields no links.
    ///
    /// # Arguments
    ///
    /// * `base` - The page's own normalized URL, base for relative hrefs
    /// * `content` - The raw page content
    /// * `content_type` - The Content-Type the server reported
    ///
    /// # Returns
    ///
    /// Normalized, in-scope links found on the page
    pub fn extract_links(
        &self,
        base: &NormalizedUrl,
        content: &[u8],
        content_type: &str,
    ) -> Vec<NormalizedUrl> {
        if !is_html(content_type) {
            return Vec::new();
        }

        let html = String::from_utf8_lossy(content);
        let document = Html::parse_document(&html);

        let Ok(anchor_selector) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        let mut links = Vec::new();
        for element in document.select(&anchor_selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if let Some(link) = self.resolve_candidate(href, base) {
                links.push(link);
            }
        }

        links
    }

    /// Resolves one href into an in-scope normalized URL, or drops it
    fn resolve_candidate(&self, href: &str, base: &NormalizedUrl) -> Option<NormalizedUrl> {
        let href = href.trim();

        if href.is_empty() {
            return None;
        }

        // Non-navigational schemes and same-page anchors.
        if href.starts_with("javascript:")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with("data:")
            || href.starts_with('#')
        {
            return None;
        }

        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("dropping unresolvable href '{}': {}", href, e);
                return None;
            }
        };

        if self.scope.in_scope(&resolved) {
            Some(resolved)
        } else {
            None
        }
    }
}

/// Checks whether a Content-Type denotes an HTML document
fn is_html(content_type: &str) -> bool {
    let content_type = content_type.to_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml+xml")
}
