//! End-to-end tests for the crawl decision core
//!
//! These tests drive the public API the way the host framework does: gate a
//! fetch through the politeness ledger, hand the fetched page to `decide`,
//! and read the statistics back. Robots.txt is served by a wiremock server
//! where the HTTP provider is under test.

use scour::config::{
    Config, PolitenessConfig, ScopeConfig, StopwordConfig, TrapConfig, UserAgentConfig,
};
use scour::{
    CrawlDecision, FetchResult, HttpRobotsInfo, PolitenessLedger, NormalizedUrl, StaticRobotsInfo,
    StopwordSet,
};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Installs a RUST_LOG-gated subscriber for debugging test runs
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Creates a test configuration scoped to the given host suffixes
fn create_test_config(suffixes: &[&str]) -> Config {
    init_tracing();
    Config {
        scope: ScopeConfig {
            allowed_schemes: vec!["http".to_string(), "https".to_string()],
            allowed_host_suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            excluded_extensions: ScopeConfig::default_excluded_extensions(),
        },
        politeness: PolitenessConfig {
            default_delay_ms: 100,
            robots_timeout_secs: 2,
        },
        traps: TrapConfig::default(),
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        stopwords: StopwordConfig::default(),
    }
}

fn decision_for(suffixes: &[&str]) -> CrawlDecision<StaticRobotsInfo> {
    CrawlDecision::new(
        &create_test_config(suffixes),
        StaticRobotsInfo::new(),
        StopwordSet::default_english(),
    )
}

#[test]
fn test_decide_three_anchors_end_to_end() {
    let decision = decision_for(&["ics.uci.edu"]);

    let body = r#"<html><head><title>Index</title></head><body>
        <a href="https://ics.uci.edu/courses">in scope</a>
        <a href="https://unrelated.org/page">out of scope host</a>
        <a href="https://ics.uci.edu/files/archive.zip">excluded extension</a>
    </body></html>"#;
    let fetch = FetchResult::success(200, "https://ics.uci.edu/", body.as_bytes(), "text/html");

    let links = decision.decide("https://ics.uci.edu/", &fetch).unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].as_str(), "https://ics.uci.edu/courses");

    let snapshot = decision.stats().snapshot();
    let own_url = NormalizedUrl::parse("https://ics.uci.edu/").unwrap();
    assert!(snapshot.unique_pages.contains(&own_url));
}

#[test]
fn test_crawl_cycle_over_two_pages() {
    let decision = decision_for(&["ics.uci.edu"]);

    let index = r#"<html><body>machine learning group
        <a href="/projects">projects</a></body></html>"#;
    let fetch = FetchResult::success(200, "https://ics.uci.edu/", index.as_bytes(), "text/html");
    let links = decision.decide("https://ics.uci.edu/", &fetch).unwrap();
    assert_eq!(links.len(), 1);

    // Follow the extracted link, which points back at the index.
    let projects = r#"<html><body>machine learning projects
        <a href="/">home</a></body></html>"#;
    let fetch = FetchResult::success(
        200,
        links[0].as_str(),
        projects.as_bytes(),
        "text/html",
    );
    let next = decision.decide(links[0].as_str(), &fetch).unwrap();

    // The back-link is already admitted; nothing new to enqueue.
    assert!(next.is_empty());

    let snapshot = decision.stats().snapshot();
    assert_eq!(snapshot.unique_page_count(), 2);
    assert_eq!(snapshot.word_frequency.get("machine"), Some(&2));
    assert_eq!(snapshot.word_frequency.get("learning"), Some(&2));
    assert_eq!(snapshot.subdomain_counts.get("ics"), Some(&2));
}

#[test]
fn test_failed_fetch_is_recovered_not_fatal() {
    let decision = decision_for(&["ics.uci.edu"]);

    let fetch = FetchResult::failure(404, "https://ics.uci.edu/gone", "not found");
    let links = decision.decide("https://ics.uci.edu/gone", &fetch).unwrap();

    assert!(links.is_empty());
    assert_eq!(decision.stats().unique_page_count(), 0);
}

#[test]
fn test_malformed_url_is_an_error() {
    let decision = decision_for(&["ics.uci.edu"]);
    let fetch = FetchResult::success(200, "x", b"<html></html>", "text/html");

    assert!(decision.decide("http//broken", &fetch).is_err());
}

#[tokio::test]
async fn test_politeness_gate_with_robots_crawl_delay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nCrawl-delay: 2"))
        .mount(&server)
        .await;

    let server_url = url::Url::parse(&server.uri()).unwrap();
    let host = format!(
        "{}:{}",
        server_url.host_str().unwrap(),
        server_url.port().unwrap()
    );
    let page = NormalizedUrl::parse(&format!("http://{}/page", host)).unwrap();

    let config = create_test_config(&["ics.uci.edu"]);
    let provider = HttpRobotsInfo::new(&config.user_agent, &config.politeness).unwrap();
    let ledger = PolitenessLedger::new(&config.politeness, provider);

    let t0 = Instant::now();
    assert!(ledger.check_and_record(&page, t0).await);

    // The robots crawl-delay of 2s now gates the host.
    assert!(!ledger.can_fetch(&page, t0 + Duration::from_secs(1)).await);
    assert!(ledger.can_fetch(&page, t0 + Duration::from_secs(2)).await);
}

#[tokio::test]
async fn test_politeness_default_when_robots_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let server_url = url::Url::parse(&server.uri()).unwrap();
    let host = format!(
        "{}:{}",
        server_url.host_str().unwrap(),
        server_url.port().unwrap()
    );
    let page = NormalizedUrl::parse(&format!("http://{}/page", host)).unwrap();

    let config = create_test_config(&["ics.uci.edu"]);
    let provider = HttpRobotsInfo::new(&config.user_agent, &config.politeness).unwrap();
    let ledger = PolitenessLedger::new(&config.politeness, provider);

    let t0 = Instant::now();
    assert!(ledger.check_and_record(&page, t0).await);

    // Missing robots.txt falls back to the configured 100ms default.
    assert!(!ledger.can_fetch(&page, t0 + Duration::from_millis(50)).await);
    assert!(ledger.can_fetch(&page, t0 + Duration::from_millis(100)).await);
}

#[test]
fn test_shared_decision_across_workers() {
    use std::sync::Arc;

    let decision = Arc::new(decision_for(&["ics.uci.edu"]));

    let mut handles = Vec::new();
    for worker in 0..4 {
        let decision = Arc::clone(&decision);
        handles.push(std::thread::spawn(move || {
            for page in 0..10 {
                let url = format!("https://ics.uci.edu/w{}/p{}", worker, page);
                let body = format!("<html><body>worker {} page {}</body></html>", worker, page);
                let fetch = FetchResult::success(200, &url, body.as_bytes(), "text/html");
                decision.decide(&url, &fetch).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // 4 workers x 10 distinct pages, every one counted exactly once.
    assert_eq!(decision.stats().unique_page_count(), 40);
}

#[test]
fn test_duplicate_page_under_concurrent_workers() {
    use std::sync::Arc;

    let decision = Arc::new(decision_for(&["ics.uci.edu"]));
    let body = b"<html><body>contended page</body></html>";

    let mut handles = Vec::new();
    for _ in 0..8 {
        let decision = Arc::clone(&decision);
        handles.push(std::thread::spawn(move || {
            let fetch =
                FetchResult::success(200, "https://ics.uci.edu/same", body, "text/html");
            decision.decide("https://ics.uci.edu/same", &fetch).unwrap();
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // All workers fetched the same URL; it was admitted exactly once.
    assert_eq!(decision.stats().unique_page_count(), 1);
    assert_eq!(decision.traps().admitted_count(), 1);
    let snapshot = decision.stats().snapshot();
    assert_eq!(snapshot.word_frequency.get("contended"), Some(&1));
}

#[test]
fn test_visited_set_checkpoint_preserves_equality() {
    let decision = decision_for(&["ics.uci.edu"]);

    let fetch = FetchResult::success(
        200,
        "https://ics.uci.edu/a",
        b"<html><body>x</body></html>",
        "text/html",
    );
    decision
        .decide("HTTPS://ICS.UCI.EDU:443/a#frag", &fetch)
        .unwrap();

    let visited = decision.traps().export_visited();
    let canonical = NormalizedUrl::parse("https://ics.uci.edu/a").unwrap();
    assert!(visited.contains(&canonical));
}
