//! Scope filtering for candidate URLs
//!
//! A URL is in scope when its scheme is allowed, its host falls under one of
//! the configured domain suffixes, and its path does not end in an excluded
//! file extension. Scope filtering assumes normalized input; unparsable URL
//! strings must be rejected before they get here.

use crate::config::ScopeConfig;
use crate::url::{host_matches_suffix, NormalizedUrl};
use std::collections::HashSet;

/// Decides whether a normalized URL is eligible for crawling
///
/// Pure function of the URL and the configuration captured at construction;
/// no side effects, safe to share across workers.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    allowed_schemes: HashSet<String>,
    allowed_host_suffixes: Vec<String>,
    excluded_extensions: HashSet<String>,
}

impl ScopeFilter {
    /// Creates a scope filter from configuration
    ///
    /// Schemes, suffixes, and extensions are lowercased here so membership
    /// checks never need to case-fold again.
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            allowed_schemes: config
                .allowed_schemes
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            allowed_host_suffixes: config
                .allowed_host_suffixes
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            excluded_extensions: config
                .excluded_extensions
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Checks whether a normalized URL is in scope
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL to check
    ///
    /// # Returns
    ///
    /// * `true` - Scheme allowed, host under an allowed suffix, extension
    ///   not excluded
    /// * `false` - Otherwise
    pub fn in_scope(&self, url: &NormalizedUrl) -> bool {
        if !self.allowed_schemes.contains(url.scheme()) {
            return false;
        }

        let host = url.host();
        if !self
            .allowed_host_suffixes
            .iter()
            .any(|suffix| host_matches_suffix(suffix, host))
        {
            return false;
        }

        if let Some(ext) = path_extension(url.path()) {
            if self.excluded_extensions.contains(&ext) {
                return false;
            }
        }

        true
    }
}

/// Extracts the lowercase extension of the final path segment
///
/// Returns None when the last segment has no '.' or the extension is empty
/// ("/archive.tar.gz" yields "gz"; "/dir.d/file" yields None).
fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
