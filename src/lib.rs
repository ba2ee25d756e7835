//! Scour: the decision core of a focused web crawler
//!
//! Given an already-fetched page, this crate decides whether the page may be
//! retained, extracts further in-scope URLs to visit, and maintains
//! crawl-wide statistics. It enforces per-domain politeness (robots.txt
//! crawl-delay), suppresses duplicates and crawler traps, and filters URLs
//! against a configured scope. The network fetch, the frontier queue, and
//! the worker pool live in the surrounding framework; this crate only makes
//! the decisions.

pub mod config;
pub mod crawler;
pub mod policy;
pub mod robots;
pub mod state;
pub mod stats;
pub mod url;

use thiserror::Error;

/// Main error type for Scour operations
#[derive(Debug, Error)]
pub enum ScourError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,

    #[error("Malformed URL: {0}")]
    Malformed(String),
}

/// Result type alias for Scour operations
pub type Result<T> = std::result::Result<T, ScourError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlDecision, FetchResult, LinkExtractor};
pub use policy::{PolitenessLedger, TrapGuard};
pub use robots::{HttpRobotsInfo, RobotsInfo, StaticRobotsInfo};
pub use state::DomainState;
pub use stats::{PageRecord, StatsAggregator, StatsSnapshot, StopwordSet};
pub use url::{NormalizedUrl, ScopeFilter};
