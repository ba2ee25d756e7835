//! Fetch-result collaborator type
//!
//! The network fetch belongs to the host framework; this crate only
//! consumes its outcome. A non-success status or absent content is not an
//! error here; the decision gate recovers it by folding nothing and
//! returning no links.

/// The outcome of a page fetch performed by the host framework
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// HTTP status code of the final response
    pub status_code: u16,

    /// Final URL after redirects
    pub final_url: String,

    /// Response body, absent when the fetch produced none
    pub content: Option<Vec<u8>>,

    /// Content-Type header value (empty when the server sent none)
    pub content_type: String,

    /// Error description for failed fetches
    pub error: Option<String>,
}

impl FetchResult {
    /// Builds a successful HTML fetch result
    pub fn success(status_code: u16, final_url: &str, content: &[u8], content_type: &str) -> Self {
        Self {
            status_code,
            final_url: final_url.to_string(),
            content: Some(content.to_vec()),
            content_type: content_type.to_string(),
            error: None,
        }
    }

    /// Builds a failed fetch result
    pub fn failure(status_code: u16, final_url: &str, error: &str) -> Self {
        Self {
            status_code,
            final_url: final_url.to_string(),
            content: None,
            content_type: String::new(),
            error: Some(error.to_string()),
        }
    }

    /// True when the fetch succeeded (2xx) and produced content
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let result = FetchResult::success(200, "https://example.com/", b"<html></html>", "text/html");
        assert!(result.is_success());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_non_2xx_is_not_success() {
        let result = FetchResult::failure(404, "https://example.com/missing", "not found");
        assert!(!result.is_success());
    }

    #[test]
    fn test_2xx_without_content_is_not_success() {
        let result = FetchResult {
            status_code: 204,
            final_url: "https://example.com/".to_string(),
            content: None,
            content_type: String::new(),
            error: None,
        };
        assert!(!result.is_success());
    }
}
