use crate::UrlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A URL in canonical form, used for all comparisons and set membership
///
/// Two URLs that are semantically identical after normalization compare
/// equal, and normalizing an already-normalized URL is a no-op.
///
/// # Normalization Steps
///
/// 1. Parse the raw string; reject if malformed or missing a host
/// 2. Lowercase the scheme and host
/// 3. Remove the fragment (everything after #)
/// 4. Remove default ports (80 for http, 443 for https)
/// 5. Collapse an empty path to "/"
///
/// Path and query are otherwise left as-is; scheme policy (http/https only)
/// belongs to [`ScopeFilter`](crate::url::ScopeFilter), not to normalization.
///
/// # Examples
///
/// ```
/// use scour::url::NormalizedUrl;
///
/// let url = NormalizedUrl::parse("HTTP://Example.COM:80/page#section").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/page");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedUrl(Url);

impl NormalizedUrl {
    /// Parses and normalizes a raw URL string
    ///
    /// # Arguments
    ///
    /// * `raw` - The URL string to normalize
    ///
    /// # Returns
    ///
    /// * `Ok(NormalizedUrl)` - The canonical form
    /// * `Err(UrlError)` - The string is unparsable or has no host
    pub fn parse(raw: &str) -> Result<Self, UrlError> {
        let mut url = Url::parse(raw).map_err(|e| UrlError::Parse(e.to_string()))?;

        // The url crate already lowercases the scheme; hosts with uppercase
        // ASCII are lowercased here so set membership is case-insensitive.
        match url.host_str() {
            Some(host) => {
                let lowered = host.to_lowercase();
                if lowered != host {
                    url.set_host(Some(&lowered))
                        .map_err(|e| UrlError::Malformed(format!("Failed to set host: {}", e)))?;
                }
            }
            None => return Err(UrlError::MissingHost),
        }

        url.set_fragment(None);

        // Strip default ports. Url::port() already reports None for a
        // default port, but an explicit ":80"/":443" in the raw string must
        // not survive into the canonical form.
        let default_port = match url.scheme() {
            "http" => Some(80),
            "https" => Some(443),
            _ => None,
        };
        if url.port().is_some() && url.port() == default_port {
            url.set_port(None)
                .map_err(|_| UrlError::Malformed("Failed to clear port".to_string()))?;
        }

        if url.path().is_empty() {
            url.set_path("/");
        }

        Ok(Self(url))
    }

    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the lowercase host
    ///
    /// Normalization guarantees a host is present.
    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    /// Returns the lowercase scheme
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the path (never empty; at minimum "/")
    pub fn path(&self) -> &str {
        self.0.path()
    }

    /// Returns the query string, if any
    pub fn query(&self) -> Option<&str> {
        self.0.query()
    }

    /// Resolves a possibly-relative href against this URL and normalizes it
    ///
    /// Full URI-resolution semantics via [`Url::join`], not string
    /// concatenation.
    pub fn join(&self, href: &str) -> Result<Self, UrlError> {
        let joined = self
            .0
            .join(href)
            .map_err(|e| UrlError::Parse(e.to_string()))?;
        Self::parse(joined.as_str())
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
