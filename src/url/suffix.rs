/// Checks if a host falls under a domain suffix
///
/// The comparison is label-aware: the host matches when it equals the suffix
/// or ends with `"." + suffix`. A plain string-suffix comparison would
/// falsely accept hosts whose last label merely ends with the suffix text.
///
/// # Arguments
///
/// * `suffix` - The domain suffix, e.g. "ics.uci.edu" (lowercase)
/// * `host` - The host to check, e.g. "vision.ics.uci.edu" (lowercase)
///
/// # Returns
///
/// * `true` - If the host is the suffix domain or a subdomain of it
/// * `false` - Otherwise
///
/// # Examples
///
/// ```
/// use scour::url::host_matches_suffix;
///
/// assert!(host_matches_suffix("ics.uci.edu", "ics.uci.edu"));
/// assert!(host_matches_suffix("ics.uci.edu", "vision.ics.uci.edu"));
///
/// // "notics.uci.edu" ends with the text "ics.uci.edu" but is a different
/// // domain; the label boundary rejects it.
/// assert!(!host_matches_suffix("ics.uci.edu", "notics.uci.edu"));
/// ```
pub fn host_matches_suffix(suffix: &str, host: &str) -> bool {
    if suffix.is_empty() || host.is_empty() {
        return false;
    }

    host == suffix
        || (host.len() > suffix.len()
            && host.ends_with(suffix)
            && host.as_bytes()[host.len() - suffix.len() - 1] == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(host_matches_suffix("example.com", "example.com"));
        assert!(host_matches_suffix("ics.uci.edu", "ics.uci.edu"));
    }

    #[test]
    fn test_subdomain_match() {
        assert!(host_matches_suffix("example.com", "blog.example.com"));
        assert!(host_matches_suffix("example.com", "api.v2.example.com"));
        assert!(host_matches_suffix("ics.uci.edu", "vision.ics.uci.edu"));
    }

    #[test]
    fn test_label_boundary_rejects_partial_label() {
        assert!(!host_matches_suffix("ics.uci.edu", "notics.uci.edu"));
        assert!(!host_matches_suffix("example.com", "myexample.com"));
        assert!(!host_matches_suffix("example.com", "examplexcom"));
    }

    #[test]
    fn test_different_domain() {
        assert!(!host_matches_suffix("example.com", "example.org"));
        assert!(!host_matches_suffix("example.com", "example.com.org"));
        assert!(!host_matches_suffix("blog.example.com", "example.com"));
    }

    #[test]
    fn test_empty_strings() {
        assert!(!host_matches_suffix("example.com", ""));
        assert!(!host_matches_suffix("", "example.com"));
        assert!(!host_matches_suffix("", ""));
    }

    #[test]
    fn test_multi_label_suffix() {
        assert!(host_matches_suffix("co.uk", "example.co.uk"));
        assert!(host_matches_suffix("co.uk", "blog.example.co.uk"));
        assert!(!host_matches_suffix("co.uk", "co.jp"));
    }
}
