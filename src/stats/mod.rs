//! Crawl statistics module
//!
//! This module folds accepted pages into running aggregates: unique-page
//! count, longest page by word count, global word frequencies (stopwords
//! excluded), and per-subdomain unique-page counts. Only derived aggregates
//! are retained; page content is dropped as soon as a fold returns.

mod aggregator;
mod stopwords;
mod text;

pub use aggregator::{LongestPage, PageRecord, StatsAggregator, StatsSnapshot};
pub use stopwords::StopwordSet;
pub use text::{html_to_text, tokenize};
