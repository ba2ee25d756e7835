//! Per-page crawl decision orchestration
//!
//! `CrawlDecision` is the entry point the host framework calls once per
//! fetched page. It composes the gates in order (fetch success, duplicate/
//! trap admission, scope) and, for pages that pass, folds statistics and
//! returns the screened candidate links to enqueue.
//!
//! Politeness is a pre-fetch decision: the frontier scheduler consults
//! [`politeness()`](CrawlDecision::politeness) before dispatching a fetch,
//! and `decide` does not re-gate it.

use crate::config::Config;
use crate::crawler::extractor::LinkExtractor;
use crate::crawler::fetch::FetchResult;
use crate::policy::{PolitenessLedger, TrapGuard};
use crate::robots::RobotsInfo;
use crate::stats::{PageRecord, StatsAggregator, StopwordSet};
use crate::url::{NormalizedUrl, ScopeFilter};
use crate::UrlError;

/// The decision core of a crawl run
///
/// Constructed once per run and threaded through every `decide` call; the
/// correctness of duplicate suppression and politeness timing depends on
/// this state living across calls. All methods take `&self` and the inner
/// state is lock-guarded, so one instance is shared across fetch workers.
pub struct CrawlDecision<P> {
    politeness: PolitenessLedger<P>,
    traps: TrapGuard,
    scope: ScopeFilter,
    extractor: LinkExtractor,
    stats: StatsAggregator,
}

impl<P: RobotsInfo> CrawlDecision<P> {
    /// Creates the decision core for a crawl run
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    /// * `provider` - Robots-Info source for crawl-delays
    /// * `stopwords` - Words excluded from frequency statistics
    pub fn new(config: &Config, provider: P, stopwords: StopwordSet) -> Self {
        let scope = ScopeFilter::new(&config.scope);
        Self {
            politeness: PolitenessLedger::new(&config.politeness, provider),
            traps: TrapGuard::new(&config.traps),
            extractor: LinkExtractor::new(scope.clone()),
            scope,
            stats: StatsAggregator::new(config.scope.allowed_host_suffixes.clone(), stopwords),
        }
    }

    /// Decides what to do with one fetched page
    ///
    /// Short-circuiting gates, in order: a failed fetch folds nothing and
    /// yields no links; a duplicate or trap URL is rejected; an out-of-scope
    /// URL is rejected. A page that passes is folded into the statistics,
    /// and its extracted links are screened against the visited set before
    /// being returned for enqueueing.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL that was fetched, as requested
    /// * `fetch` - The outcome of the fetch
    ///
    /// # Returns
    ///
    /// * `Ok(links)` - Candidate URLs to enqueue (possibly empty)
    /// * `Err(UrlError)` - The URL string itself is malformed
    pub fn decide(&self, url: &str, fetch: &FetchResult) -> Result<Vec<NormalizedUrl>, UrlError> {
        let page_url = NormalizedUrl::parse(url)?;

        if !fetch.is_success() {
            tracing::debug!(
                "skipping {}: status {} ({})",
                page_url,
                fetch.status_code,
                fetch.error.as_deref().unwrap_or("no content")
            );
            return Ok(Vec::new());
        }
        // is_success guarantees content is present.
        let Some(content) = fetch.content.as_deref() else {
            return Ok(Vec::new());
        };

        if !self.traps.admit(&page_url) {
            tracing::debug!("skipping {}: already seen or trap", page_url);
            return Ok(Vec::new());
        }

        if !self.scope.in_scope(&page_url) {
            tracing::debug!("skipping {}: out of scope", page_url);
            return Ok(Vec::new());
        }

        let record = PageRecord::from_html(page_url.clone(), content);
        self.stats.fold(&record);

        let links: Vec<NormalizedUrl> = self
            .extractor
            .extract_links(&page_url, content, &fetch.content_type)
            .into_iter()
            .filter(|link| self.traps.screen(link))
            .collect();

        tracing::debug!("{}: {} candidate links", page_url, links.len());
        Ok(links)
    }

    /// The politeness ledger, for the frontier scheduler's pre-fetch gate
    pub fn politeness(&self) -> &PolitenessLedger<P> {
        &self.politeness
    }

    /// The statistics aggregator, for end-of-run reporting
    pub fn stats(&self) -> &StatsAggregator {
        &self.stats
    }

    /// The trap guard, for checkpointing the visited set
    pub fn traps(&self) -> &TrapGuard {
        &self.traps
    }
}
