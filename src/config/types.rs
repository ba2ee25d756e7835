use serde::Deserialize;

/// Main configuration structure for Scour
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scope: ScopeConfig,
    #[serde(default)]
    pub politeness: PolitenessConfig,
    #[serde(default)]
    pub traps: TrapConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub stopwords: StopwordConfig,
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScopeConfig {
    /// Schemes eligible for crawling
    #[serde(rename = "allowed-schemes", default = "default_schemes")]
    pub allowed_schemes: Vec<String>,

    /// Domain suffixes eligible for crawling (label-aware match)
    #[serde(rename = "allowed-host-suffixes")]
    pub allowed_host_suffixes: Vec<String>,

    /// Lowercase file extensions that are never crawled
    #[serde(
        rename = "excluded-extensions",
        default = "ScopeConfig::default_excluded_extensions"
    )]
    pub excluded_extensions: Vec<String>,
}

impl ScopeConfig {
    /// The default deny-list of non-hypertext extensions
    pub fn default_excluded_extensions() -> Vec<String> {
        const EXTENSIONS: &[&str] = &[
            "css", "js", "bmp", "gif", "jpg", "jpeg", "ico", "png", "tif", "tiff", "mid", "mp2",
            "mp3", "mp4", "wav", "avi", "mov", "mpeg", "ram", "m4v", "mkv", "ogg", "ogv", "pdf",
            "ps", "eps", "tex", "ppt", "pptx", "doc", "docx", "xls", "xlsx", "names", "data",
            "dat", "exe", "bz2", "tar", "msi", "bin", "7z", "psd", "dmg", "iso", "epub", "dll",
            "cnf", "tgz", "sha1", "thmx", "mso", "arff", "rtf", "jar", "csv", "rm", "smil", "wmv",
            "swf", "wma", "zip", "rar", "gz",
        ];
        EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }
}

fn default_schemes() -> Vec<String> {
    vec!["http".to_string(), "https".to_string()]
}

/// Per-domain politeness configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessConfig {
    /// Minimum delay between fetches to the same host when robots.txt
    /// specifies none (milliseconds, never 0)
    #[serde(rename = "default-delay-ms", default = "default_delay_ms")]
    pub default_delay_ms: u64,

    /// Timeout for fetching a host's robots.txt (seconds)
    #[serde(rename = "robots-timeout-secs", default = "default_robots_timeout")]
    pub robots_timeout_secs: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_delay_ms(),
            robots_timeout_secs: default_robots_timeout(),
        }
    }
}

fn default_delay_ms() -> u64 {
    500
}

fn default_robots_timeout() -> u64 {
    10
}

/// Heuristic trap-detection thresholds
///
/// A URL whose shape crosses any of these bounds is treated as a trap
/// signature and rejected before it can enter the visited set.
#[derive(Debug, Clone, Deserialize)]
pub struct TrapConfig {
    /// Maximum number of query parameters
    #[serde(rename = "max-query-params", default = "default_max_query_params")]
    pub max_query_params: usize,

    /// Maximum number of path segments
    #[serde(rename = "max-path-segments", default = "default_max_path_segments")]
    pub max_path_segments: usize,

    /// Maximum times any single path segment may repeat
    #[serde(rename = "max-segment-repeats", default = "default_max_segment_repeats")]
    pub max_segment_repeats: usize,
}

impl Default for TrapConfig {
    fn default() -> Self {
        Self {
            max_query_params: default_max_query_params(),
            max_path_segments: default_max_path_segments(),
            max_segment_repeats: default_max_segment_repeats(),
        }
    }
}

fn default_max_query_params() -> usize {
    10
}

fn default_max_path_segments() -> usize {
    20
}

fn default_max_segment_repeats() -> usize {
    3
}

/// User agent identification configuration
///
/// Used when fetching robots.txt; the page fetcher in the host framework
/// should present the same identity.
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the full user-agent string: `name/version (+url; email)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Stopword source configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopwordConfig {
    /// Path to a newline-delimited stopword file; the built-in English list
    /// is used when absent
    pub path: Option<String>,
}
