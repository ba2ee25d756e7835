//! Per-host politeness enforcement
//!
//! The ledger tracks, for every host seen, when it was last fetched and the
//! crawl-delay it requests via robots.txt. Workers share one ledger per
//! crawl run. Crawl-delay resolution performs network I/O through the
//! [`RobotsInfo`] provider and therefore never happens while the state lock
//! is held: resolve off-lock, record under-lock.

use crate::config::PolitenessConfig;
use crate::robots::RobotsInfo;
use crate::state::DomainState;
use crate::url::NormalizedUrl;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Gates fetches so that no host is hit faster than its crawl-delay allows
///
/// The effective delay for a host is the maximum of the configured default
/// and the robots.txt crawl-delay; hosts that specify none get the default,
/// which is validated to be non-zero.
pub struct PolitenessLedger<P> {
    domains: Mutex<HashMap<String, DomainState>>,
    provider: P,
    default_delay: Duration,
}

impl<P: RobotsInfo> PolitenessLedger<P> {
    /// Creates a ledger over the given Robots-Info provider
    pub fn new(config: &PolitenessConfig, provider: P) -> Self {
        Self {
            domains: Mutex::new(HashMap::new()),
            provider,
            default_delay: Duration::from_millis(config.default_delay_ms),
        }
    }

    /// Checks whether a fetch to the URL's host is currently allowed
    ///
    /// On first sight of a host (or when its cached delay has gone stale)
    /// the crawl-delay is resolved through the provider before checking.
    /// Checking never advances the host's clock; only
    /// [`record_fetch`](Self::record_fetch) does.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL whose host is being gated
    /// * `now` - The current time instant
    ///
    /// # Returns
    ///
    /// * `true` - The host has never been fetched or its delay has elapsed
    /// * `false` - The fetch must wait
    pub async fn can_fetch(&self, url: &NormalizedUrl, now: Instant) -> bool {
        let host = url.host().to_string();
        self.ensure_delay(&host).await;

        let domains = self.domains.lock().unwrap();
        domains.get(&host).map(|s| s.can_fetch(now)).unwrap_or(true)
    }

    /// Records that a fetch to the URL's host actually occurred
    ///
    /// Called only after a real fetch, never speculatively; repeated
    /// `can_fetch` checks without a fetch must not reset the clock.
    pub fn record_fetch(&self, url: &NormalizedUrl, now: Instant) {
        let mut domains = self.domains.lock().unwrap();
        domains
            .entry(url.host().to_string())
            .or_insert_with(|| DomainState::new(self.default_delay))
            .record_fetch(now);
    }

    /// Atomically checks and, if allowed, records a fetch
    ///
    /// The check and the record happen in one critical section so that two
    /// workers racing on the same host cannot both pass the check before
    /// either records. This is the operation the frontier scheduler should
    /// call when dispatching a fetch.
    ///
    /// # Returns
    ///
    /// * `true` - The fetch is allowed and has been recorded
    /// * `false` - The host's delay has not elapsed; nothing was recorded
    pub async fn check_and_record(&self, url: &NormalizedUrl, now: Instant) -> bool {
        let host = url.host().to_string();
        self.ensure_delay(&host).await;

        let mut domains = self.domains.lock().unwrap();
        let state = domains
            .entry(host)
            .or_insert_with(|| DomainState::new(self.default_delay));
        if state.can_fetch(now) {
            state.record_fetch(now);
            true
        } else {
            false
        }
    }

    /// Returns how long until the URL's host accepts a fetch, if it must wait
    pub fn time_until_ready(&self, url: &NormalizedUrl, now: Instant) -> Option<Duration> {
        let domains = self.domains.lock().unwrap();
        domains
            .get(url.host())
            .and_then(|s| s.time_until_next_fetch(now))
    }

    /// Returns the number of distinct hosts the ledger has seen
    pub fn domain_count(&self) -> usize {
        self.domains.lock().unwrap().len()
    }

    /// Resolves and caches the host's crawl-delay if unknown or stale
    ///
    /// The provider call blocks on network I/O, so the lock is released
    /// around it; the result is recorded in a second, short critical
    /// section. Two workers may race to resolve the same host, which is
    /// harmless: both compute the same effective delay and the second
    /// record overwrites the first.
    async fn ensure_delay(&self, host: &str) {
        let needs_resolve = {
            let domains = self.domains.lock().unwrap();
            domains.get(host).map(|s| s.is_delay_stale()).unwrap_or(true)
        };
        if !needs_resolve {
            return;
        }

        let resolved = self.provider.crawl_delay(host).await;
        let effective = match resolved {
            Some(seconds) => {
                let robots_delay = Duration::from_secs_f64(seconds);
                std::cmp::max(self.default_delay, robots_delay)
            }
            None => self.default_delay,
        };

        tracing::debug!(
            "crawl-delay for {}: {:?} (robots: {:?})",
            host,
            effective,
            resolved
        );

        let mut domains = self.domains.lock().unwrap();
        domains
            .entry(host.to_string())
            .or_insert_with(|| DomainState::new(self.default_delay))
            .set_delay(effective, Utc::now());
    }
}
