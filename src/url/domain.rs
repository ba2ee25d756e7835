use crate::url::NormalizedUrl;

/// Returns the lowercase host of a normalized URL as an owned string
///
/// # Examples
///
/// ```
/// use scour::url::{host_of, NormalizedUrl};
///
/// let url = NormalizedUrl::parse("https://sub.example.com/path").unwrap();
/// assert_eq!(host_of(&url), "sub.example.com");
/// ```
pub fn host_of(url: &NormalizedUrl) -> String {
    url.host().to_string()
}

/// Returns the first label of a host
///
/// For "vision.ics.uci.edu" this is "vision"; for a bare domain like
/// "uci.edu" it is "uci". Used for per-subdomain page counting.
///
/// # Examples
///
/// ```
/// use scour::url::first_label;
///
/// assert_eq!(first_label("vision.ics.uci.edu"), "vision");
/// assert_eq!(first_label("ics.uci.edu"), "ics");
/// ```
pub fn first_label(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}
