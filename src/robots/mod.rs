//! Robots.txt crawl-delay handling
//!
//! This module resolves the crawl-delay a host requests via robots.txt.
//! Only the Crawl-delay directive is evaluated; allow/disallow rules and
//! sitemaps are the host framework's concern. Every failure mode (network,
//! HTTP status, unparsable content) is recovered as "no delay specified".

mod parser;
mod provider;

pub use parser::crawl_delay_from;
pub use provider::{HttpRobotsInfo, RobotsInfo, StaticRobotsInfo};
