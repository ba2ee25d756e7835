//! Crawler decision module
//!
//! This module contains the per-page decision logic:
//! - Consuming fetch results produced by the host framework
//! - Extracting and screening candidate links
//! - Orchestrating the politeness, trap, scope, and statistics components

mod decision;
mod extractor;
mod fetch;

pub use decision::CrawlDecision;
pub use extractor::LinkExtractor;
pub use fetch::FetchResult;
