//! Robots-Info providers
//!
//! The [`PolitenessLedger`](crate::policy::PolitenessLedger) resolves each
//! host's crawl-delay through a [`RobotsInfo`] implementation. The HTTP
//! provider performs the network fetch; the static provider serves a fixed
//! table for tests and offline runs. The ledger caches results, so a
//! provider is asked about a host at most once per cache lifetime.

use crate::config::{PolitenessConfig, UserAgentConfig};
use crate::robots::parser::crawl_delay_from;
use crate::ScourError;
use reqwest::Client;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

/// Source of per-host crawl-delays
///
/// Implementations may perform network I/O and may fail; failure is
/// expressed as `None` ("no crawl-delay specified") and is never an error.
pub trait RobotsInfo: Send + Sync {
    /// Returns the crawl-delay in seconds for the host, if one is specified
    fn crawl_delay(&self, host: &str) -> impl Future<Output = Option<f64>> + Send;
}

/// Fetches robots.txt over HTTP and extracts the crawl-delay
///
/// Tries `https://{host}/robots.txt` first and falls back to plain http.
/// Timeouts, non-2xx statuses, and unparsable bodies all resolve to `None`.
pub struct HttpRobotsInfo {
    client: Client,
    user_agent: String,
}

impl HttpRobotsInfo {
    /// Creates a provider with a bounded-timeout HTTP client
    ///
    /// # Arguments
    ///
    /// * `user_agent` - Crawler identity presented in the request
    /// * `politeness` - Supplies the robots fetch timeout
    ///
    /// # Returns
    ///
    /// * `Ok(HttpRobotsInfo)` - Ready-to-use provider
    /// * `Err(ScourError)` - Failed to build the HTTP client
    pub fn new(
        user_agent: &UserAgentConfig,
        politeness: &PolitenessConfig,
    ) -> Result<Self, ScourError> {
        let user_agent = user_agent.header_value();
        let client = Client::builder()
            .user_agent(user_agent.clone())
            .timeout(Duration::from_secs(politeness.robots_timeout_secs))
            .connect_timeout(Duration::from_secs(politeness.robots_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, user_agent })
    }

    async fn fetch_body(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) if response.status().is_success() => response.text().await.ok(),
            Ok(response) => {
                tracing::debug!("robots.txt at {} returned {}", url, response.status());
                None
            }
            Err(e) => {
                tracing::debug!("robots.txt fetch failed for {}: {}", url, e);
                None
            }
        }
    }
}

impl RobotsInfo for HttpRobotsInfo {
    async fn crawl_delay(&self, host: &str) -> Option<f64> {
        let https_url = format!("https://{}/robots.txt", host);
        let body = match self.fetch_body(&https_url).await {
            Some(body) => Some(body),
            None => {
                let http_url = format!("http://{}/robots.txt", host);
                self.fetch_body(&http_url).await
            }
        }?;

        crawl_delay_from(&body, &self.user_agent)
    }
}

/// Serves crawl-delays from a fixed host table
///
/// Hosts absent from the table have no specified delay.
#[derive(Debug, Clone, Default)]
pub struct StaticRobotsInfo {
    delays: HashMap<String, f64>,
}

impl StaticRobotsInfo {
    /// Creates an empty table (every host resolves to no delay)
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from (host, delay-seconds) pairs
    pub fn with_delays<I>(delays: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            delays: delays.into_iter().collect(),
        }
    }
}

impl RobotsInfo for StaticRobotsInfo {
    async fn crawl_delay(&self, host: &str) -> Option<f64> {
        self.delays.get(host).copied()
    }
}
