//! Duplicate and trap suppression
//!
//! The guard keeps the set of URLs already accepted for this crawl run and
//! rejects re-submissions. Before the set is consulted, a heuristic
//! predicate screens out trap signatures: URL shapes (calendar pagination,
//! ever-growing query strings, repeating path segments) that generate
//! unbounded crawl targets. Trap URLs are rejected without being inserted,
//! so the predicate keeps catching the whole family instead of admitting
//! each new variation once.

use crate::config::TrapConfig;
use crate::url::NormalizedUrl;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Secondary predicate deciding whether a URL looks like a trap
///
/// Returns `true` when the URL should be rejected as a trap signature.
pub type TrapPredicate = Box<dyn Fn(&NormalizedUrl) -> bool + Send + Sync>;

/// Tracks admitted URLs and rejects duplicates and trap signatures
///
/// The visited set grows monotonically for the duration of a crawl run and
/// is only ever appended to.
pub struct TrapGuard {
    visited: Mutex<HashSet<NormalizedUrl>>,
    predicate: TrapPredicate,
}

impl TrapGuard {
    /// Creates a guard with the built-in heuristics at the given thresholds
    pub fn new(config: &TrapConfig) -> Self {
        let config = config.clone();
        Self::with_predicate(Box::new(move |url| is_trap_shape(url, &config)))
    }

    /// Creates a guard with a custom trap predicate
    ///
    /// The predicate is evaluated before the duplicate check; a URL it
    /// rejects never enters the visited set.
    pub fn with_predicate(predicate: TrapPredicate) -> Self {
        Self {
            visited: Mutex::new(HashSet::new()),
            predicate,
        }
    }

    /// Admits a URL exactly once
    ///
    /// Atomic test-and-insert: under concurrent calls with the same URL,
    /// exactly one caller sees `true`.
    ///
    /// # Returns
    ///
    /// * `true` - First admission of this URL
    /// * `false` - Trap signature, or already admitted
    pub fn admit(&self, url: &NormalizedUrl) -> bool {
        if (self.predicate)(url) {
            tracing::debug!("rejecting trap signature: {}", url);
            return false;
        }

        self.visited.lock().unwrap().insert(url.clone())
    }

    /// Screens a candidate link without consuming an admission
    ///
    /// Used on extracted links before they are enqueued: rejects trap
    /// signatures and URLs that have already been admitted, but does not
    /// insert. The candidate is admitted later, when its fetched page
    /// reaches the decision gate.
    ///
    /// # Returns
    ///
    /// * `true` - The candidate is worth enqueueing
    /// * `false` - Trap signature, or already admitted
    pub fn screen(&self, url: &NormalizedUrl) -> bool {
        if (self.predicate)(url) {
            return false;
        }

        !self.visited.lock().unwrap().contains(url)
    }

    /// Returns the number of URLs admitted so far
    pub fn admitted_count(&self) -> usize {
        self.visited.lock().unwrap().len()
    }

    /// Returns a copy of the visited set for checkpointing
    pub fn export_visited(&self) -> HashSet<NormalizedUrl> {
        self.visited.lock().unwrap().clone()
    }
}

/// The built-in trap heuristics
///
/// A URL is a trap signature when its query has more parameters than
/// `max_query_params`, its path has more segments than `max_path_segments`,
/// or any single path segment repeats more than `max_segment_repeats` times.
fn is_trap_shape(url: &NormalizedUrl, config: &TrapConfig) -> bool {
    let query_params = url.as_url().query_pairs().count();
    if query_params > config.max_query_params {
        return true;
    }

    let mut segment_counts: HashMap<&str, usize> = HashMap::new();
    let mut total_segments = 0usize;
    for segment in url.path().split('/').filter(|s| !s.is_empty()) {
        total_segments += 1;
        let count = segment_counts.entry(segment).or_insert(0);
        *count += 1;
        if *count > config.max_segment_repeats {
            return true;
        }
    }

    total_segments > config.max_path_segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn url(raw: &str) -> NormalizedUrl {
        NormalizedUrl::parse(raw).unwrap()
    }

    fn guard() -> TrapGuard {
        TrapGuard::new(&TrapConfig::default())
    }

    #[test]
    fn test_admit_once() {
        let guard = guard();
        let page = url("https://example.com/page");

        assert!(guard.admit(&page));
        assert!(!guard.admit(&page));
        assert_eq!(guard.admitted_count(), 1);
    }

    #[test]
    fn test_admit_distinguishes_urls() {
        let guard = guard();
        assert!(guard.admit(&url("https://example.com/a")));
        assert!(guard.admit(&url("https://example.com/b")));
        assert_eq!(guard.admitted_count(), 2);
    }

    #[test]
    fn test_fragment_variants_are_duplicates() {
        let guard = guard();
        assert!(guard.admit(&url("https://example.com/a#x")));
        assert!(!guard.admit(&url("https://example.com/a#y")));
    }

    #[test]
    fn test_concurrent_admission_yields_one_true() {
        let guard = Arc::new(guard());
        let page = url("https://example.com/contended");

        let mut handles = Vec::new();
        for _ in 0..16 {
            let guard = Arc::clone(&guard);
            let page = page.clone();
            handles.push(std::thread::spawn(move || guard.admit(&page)));
        }

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        // Exactly one worker wins the test-and-insert.
        assert_eq!(admitted, 1);
        assert_eq!(guard.admitted_count(), 1);
    }

    #[test]
    fn test_query_explosion_rejected() {
        let guard = guard();
        let query: Vec<String> = (0..15).map(|i| format!("p{}={}", i, i)).collect();
        let trap = url(&format!("https://example.com/list?{}", query.join("&")));

        assert!(!guard.admit(&trap));
        // Rejected without insertion; the same signature stays caught.
        assert!(!guard.admit(&trap));
        assert_eq!(guard.admitted_count(), 0);
    }

    #[test]
    fn test_repeating_segments_rejected() {
        let guard = guard();
        let trap = url("https://example.com/cal/2024/cal/2024/cal/2024/cal/2024");
        assert!(!guard.admit(&trap));
        assert_eq!(guard.admitted_count(), 0);
    }

    #[test]
    fn test_deep_path_rejected() {
        let guard = guard();
        let deep = format!(
            "https://example.com/{}",
            (0..25).map(|i| format!("d{}", i)).collect::<Vec<_>>().join("/")
        );
        assert!(!guard.admit(&url(&deep)));
    }

    #[test]
    fn test_reasonable_urls_pass_heuristics() {
        let guard = guard();
        assert!(guard.admit(&url("https://example.com/a/b/c?page=2&sort=asc")));
        assert!(guard.admit(&url("https://example.com/2024/01/15/post-title")));
    }

    #[test]
    fn test_screen_does_not_insert() {
        let guard = guard();
        let page = url("https://example.com/page");

        assert!(guard.screen(&page));
        assert!(guard.screen(&page));
        assert_eq!(guard.admitted_count(), 0);

        // Admission still available after screening.
        assert!(guard.admit(&page));
        assert!(!guard.screen(&page));
    }

    #[test]
    fn test_screen_rejects_traps() {
        let guard = guard();
        let trap = url("https://example.com/a/a/a/a/a");
        assert!(!guard.screen(&trap));
    }

    #[test]
    fn test_custom_predicate() {
        let guard = TrapGuard::with_predicate(Box::new(|url| url.path().contains("/login")));

        assert!(!guard.admit(&url("https://example.com/login?next=/")));
        assert!(guard.admit(&url("https://example.com/docs")));
    }

    #[test]
    fn test_export_visited() {
        let guard = guard();
        let page = url("https://example.com/page");
        guard.admit(&page);

        let exported = guard.export_visited();
        assert!(exported.contains(&page));
        assert_eq!(exported.len(), 1);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let strict = TrapGuard::new(&TrapConfig {
            max_query_params: 1,
            max_path_segments: 2,
            max_segment_repeats: 1,
        });

        assert!(!strict.admit(&url("https://example.com/a?x=1&y=2")));
        assert!(!strict.admit(&url("https://example.com/a/b/c")));
        assert!(!strict.admit(&url("https://example.com/a/a")));
        assert!(strict.admit(&url("https://example.com/a/b?x=1")));
    }
}
