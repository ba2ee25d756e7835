use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Tracks the politeness state of a single host during crawling
///
/// One record exists per distinct host, created on first sight and kept for
/// the lifetime of the crawl run. The record stores the last fetch time, the
/// crawl-delay currently in force, and when that delay was resolved from
/// robots.txt (for cache expiration).
#[derive(Debug, Clone)]
pub struct DomainState {
    /// Timestamp of the last fetch actually made to this host
    pub last_access_at: Option<Instant>,

    /// Minimum time between successive fetches to this host
    pub crawl_delay: Duration,

    /// When the crawl-delay was resolved from robots.txt; None until the
    /// first resolution (the configured default applies in the meantime)
    pub delay_fetched_at: Option<DateTime<Utc>>,
}

impl DomainState {
    /// Creates a new DomainState with the given default delay
    pub fn new(default_delay: Duration) -> Self {
        Self {
            last_access_at: None,
            crawl_delay: default_delay,
            delay_fetched_at: None,
        }
    }

    /// Checks if a fetch to this host is currently allowed
    ///
    /// # Arguments
    ///
    /// * `now` - The current time instant
    ///
    /// # Returns
    ///
    /// * `true` - The host has never been fetched, or the crawl-delay has
    ///   elapsed since the last fetch
    /// * `false` - The fetch must wait
    pub fn can_fetch(&self, now: Instant) -> bool {
        match self.last_access_at {
            Some(last) => now.duration_since(last) >= self.crawl_delay,
            None => true,
        }
    }

    /// Records that a fetch to this host actually occurred
    ///
    /// Updates the last-access timestamp unconditionally. Callers must only
    /// invoke this after a real fetch; checking alone never advances the
    /// clock.
    pub fn record_fetch(&mut self, now: Instant) {
        self.last_access_at = Some(now);
    }

    /// Calculates the time until the next fetch is allowed
    ///
    /// Returns None if a fetch can be made now, or the duration to wait
    /// otherwise.
    pub fn time_until_next_fetch(&self, now: Instant) -> Option<Duration> {
        if let Some(last) = self.last_access_at {
            let elapsed = now.duration_since(last);
            if elapsed < self.crawl_delay {
                return Some(self.crawl_delay - elapsed);
            }
        }
        None
    }

    /// Checks if the resolved crawl-delay is stale (older than 24 hours)
    ///
    /// Site owners change robots.txt; a cached delay is honored for a day
    /// and then re-resolved lazily.
    pub fn is_delay_stale(&self) -> bool {
        match self.delay_fetched_at {
            Some(fetched_at) => Utc::now() - fetched_at > chrono::Duration::hours(24),
            None => true,
        }
    }

    /// Records a freshly resolved crawl-delay
    pub fn set_delay(&mut self, delay: Duration, fetched_at: DateTime<Utc>) {
        self.crawl_delay = delay;
        self.delay_fetched_at = Some(fetched_at);
    }
}
