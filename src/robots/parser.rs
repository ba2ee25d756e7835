//! Crawl-delay extraction from robots.txt content
//!
//! Directives are grouped under the User-agent lines that precede them; a
//! delay in a group naming our agent specifically beats a delay in the
//! wildcard group. Matching is case-insensitive and substring-based on the
//! agent token, which is how robots.txt agents are conventionally matched.

/// Extracts the crawl-delay for a user agent from robots.txt content
///
/// # Arguments
///
/// * `content` - The raw robots.txt file content
/// * `user_agent` - The user agent string to match against agent groups
///
/// # Returns
///
/// * `Some(f64)` - The crawl-delay in seconds (finite, non-negative)
/// * `None` - No applicable crawl-delay is specified
///
/// # Examples
///
/// ```
/// use scour::robots::crawl_delay_from;
///
/// let content = "User-agent: *\nCrawl-delay: 2.5\nDisallow: /admin";
/// assert_eq!(crawl_delay_from(content, "ScourBot/1.0"), Some(2.5));
/// ```
pub fn crawl_delay_from(content: &str, user_agent: &str) -> Option<f64> {
    let normalized_agent = user_agent.to_lowercase();

    let mut group_agents: Vec<String> = Vec::new();
    let mut in_group_body = false;
    let mut wildcard_delay: Option<f64> = None;
    let mut specific_delay: Option<f64> = None;

    for line in content.lines() {
        // Everything after '#' is a comment.
        let line = line.split('#').next().unwrap_or("");
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        match key.as_str() {
            "user-agent" => {
                // A User-agent line after other directives starts a new group.
                if in_group_body {
                    group_agents.clear();
                    in_group_body = false;
                }
                group_agents.push(value.to_lowercase());
            }
            "crawl-delay" => {
                in_group_body = true;
                let Some(delay) = parse_delay(value) else {
                    continue;
                };
                if group_agents
                    .iter()
                    .any(|agent| agent != "*" && normalized_agent.contains(agent.as_str()))
                {
                    specific_delay = Some(delay);
                } else if group_agents.iter().any(|agent| agent == "*") {
                    wildcard_delay = Some(delay);
                }
            }
            _ => {
                // Allow, Disallow, Sitemap, ... close the agent list but do
                // not affect delay extraction.
                in_group_body = true;
            }
        }
    }

    specific_delay.or(wildcard_delay)
}

/// Parses a delay value, rejecting anything that cannot bound a Duration
fn parse_delay(value: &str) -> Option<f64> {
    let delay = value.parse::<f64>().ok()?;
    if delay.is_finite() && delay >= 0.0 {
        Some(delay)
    } else {
        None
    }
}
