//! Streaming crawl statistics
//!
//! Accepted pages are folded one at a time into running aggregates. The
//! aggregator retains only derived numbers, never page content, so memory
//! is bounded by vocabulary size and page count rather than crawl volume.

use crate::stats::stopwords::StopwordSet;
use crate::stats::text::{html_to_text, tokenize, word_count};
use crate::url::{first_label, host_matches_suffix, NormalizedUrl};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// One accepted page, handed to [`StatsAggregator::fold`]
///
/// Built by the orchestrator per accepted page and dropped as soon as the
/// fold returns; the aggregator never retains the content.
#[derive(Debug, Clone)]
pub struct PageRecord {
    /// The page's normalized (fragment-free) URL
    pub url: NormalizedUrl,

    /// The raw page content as fetched
    pub raw_content: Vec<u8>,

    /// Number of word tokens in the page's visible text (stopwords included)
    pub word_count: u64,
}

impl PageRecord {
    /// Builds a record from fetched HTML content
    ///
    /// The word count is computed over the visible text of the page.
    pub fn from_html(url: NormalizedUrl, content: &[u8]) -> Self {
        let text = html_to_text(&String::from_utf8_lossy(content));
        let word_count = word_count(&text);
        Self {
            url,
            raw_content: content.to_vec(),
            word_count,
        }
    }
}

/// The page with the highest word count seen so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestPage {
    pub url: NormalizedUrl,
    pub word_count: u64,
}

/// A read-consistent copy of the aggregates, for reporting and checkpointing
///
/// Serializes with `NormalizedUrl` in its canonical string form, so a
/// checkpoint round-trip preserves set equality and counter exactness.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Every unique page URL accepted so far (fragment-free)
    pub unique_pages: HashSet<NormalizedUrl>,

    /// The longest page seen, if any page has been folded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_page: Option<LongestPage>,

    /// Word → occurrence count over all folded pages, stopwords excluded
    pub word_frequency: HashMap<String, u64>,

    /// Subdomain → unique-page count, for hosts under the allowed suffixes
    pub subdomain_counts: HashMap<String, u64>,
}

impl StatsSnapshot {
    /// Number of unique pages accepted
    pub fn unique_page_count(&self) -> u64 {
        self.unique_pages.len() as u64
    }
}

#[derive(Debug, Default)]
struct WordEntry {
    count: u64,
    /// Rank of first encounter, for deterministic tie-breaking
    first_seen: u64,
}

#[derive(Debug, Default)]
struct CrawlStats {
    unique_pages: HashSet<NormalizedUrl>,
    longest_page: Option<LongestPage>,
    words: HashMap<String, WordEntry>,
    next_word_rank: u64,
    subdomain_counts: HashMap<String, u64>,
}

/// Folds accepted pages into crawl-wide statistics
///
/// One writer at a time: every fold is a single critical section, so a
/// snapshot taken between folds always reflects a consistent set of pages,
/// never a partially-applied one. Snapshots copy the aggregates out and
/// release the lock immediately; they do not block further folds beyond the
/// copy itself.
pub struct StatsAggregator {
    inner: Mutex<CrawlStats>,
    stopwords: StopwordSet,
    host_suffixes: Vec<String>,
}

impl StatsAggregator {
    /// Creates an aggregator
    ///
    /// # Arguments
    ///
    /// * `host_suffixes` - Allowed domain suffixes; pages on other hosts
    ///   still count toward page/word totals but not subdomain counts
    /// * `stopwords` - Words excluded from the frequency map
    pub fn new(host_suffixes: Vec<String>, stopwords: StopwordSet) -> Self {
        Self {
            inner: Mutex::new(CrawlStats::default()),
            stopwords,
            host_suffixes: host_suffixes.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Folds one accepted page into the aggregates
    ///
    /// Tokenization happens before the lock is taken; every state mutation
    /// for the page then lands in one critical section.
    pub fn fold(&self, record: &PageRecord) {
        let text = html_to_text(&String::from_utf8_lossy(&record.raw_content));
        let tokens: Vec<String> = tokenize(&text)
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        let host = record.url.host().to_string();
        let in_suffixes = self
            .host_suffixes
            .iter()
            .any(|suffix| host_matches_suffix(suffix, &host));

        let mut guard = self.inner.lock().unwrap();
        let stats = &mut *guard;

        let newly_seen = stats.unique_pages.insert(record.url.clone());

        let replace = match &stats.longest_page {
            Some(longest) => record.word_count > longest.word_count,
            None => true,
        };
        if replace {
            stats.longest_page = Some(LongestPage {
                url: record.url.clone(),
                word_count: record.word_count,
            });
        }

        for token in tokens {
            match stats.words.get_mut(&token) {
                Some(entry) => entry.count += 1,
                None => {
                    let first_seen = stats.next_word_rank;
                    stats.next_word_rank += 1;
                    stats.words.insert(token, WordEntry { count: 1, first_seen });
                }
            }
        }

        if newly_seen && in_suffixes {
            let subdomain = first_label(&host).to_string();
            *stats.subdomain_counts.entry(subdomain).or_insert(0) += 1;
        }

        tracing::debug!(
            "folded {} ({} words, {} unique pages)",
            record.url,
            record.word_count,
            stats.unique_pages.len()
        );
    }

    /// Returns a read-consistent copy of the aggregates
    pub fn snapshot(&self) -> StatsSnapshot {
        let stats = self.inner.lock().unwrap();
        StatsSnapshot {
            unique_pages: stats.unique_pages.clone(),
            longest_page: stats.longest_page.clone(),
            word_frequency: stats
                .words
                .iter()
                .map(|(word, entry)| (word.clone(), entry.count))
                .collect(),
            subdomain_counts: stats.subdomain_counts.clone(),
        }
    }

    /// Returns the `n` most frequent words
    ///
    /// Ordered by count descending; ties broken by first encounter, so the
    /// output is deterministic for a given fold order.
    pub fn top_words(&self, n: usize) -> Vec<(String, u64)> {
        let stats = self.inner.lock().unwrap();
        let mut entries: Vec<(&String, &WordEntry)> = stats.words.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .take(n)
            .map(|(word, entry)| (word.clone(), entry.count))
            .collect()
    }

    /// Number of unique pages accepted so far
    pub fn unique_page_count(&self) -> u64 {
        self.inner.lock().unwrap().unique_pages.len() as u64
    }
}
