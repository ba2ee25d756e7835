//! HTML text extraction and word tokenization
//!
//! Word statistics are computed over the visible text of a page: markup is
//! stripped, script/style/noscript content is excluded, and the remainder is
//! split into maximal runs of `[A-Za-z0-9_]` characters, case-folded.

use scraper::Html;

/// Extracts the visible text of an HTML document
///
/// Parsing is tolerant: malformed markup degrades to whatever text the
/// recovering parser can still see, never to an error. Text inside script,
/// style, and noscript elements is skipped.
///
/// # Arguments
///
/// * `html` - The HTML content
///
/// # Returns
///
/// The concatenated text content, whitespace-joined
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();

    for node in document.tree.nodes() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };

        let skipped = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .map(|name| matches!(name, "script" | "style" | "noscript"))
            .unwrap_or(false);

        if !skipped {
            text.push_str(fragment);
            text.push(' ');
        }
    }

    text
}

/// Splits text into lowercase word tokens
///
/// A token is a maximal run of ASCII letters, digits, and underscores;
/// every other character separates tokens.
///
/// # Examples
///
/// ```
/// use scour::stats::tokenize;
///
/// let tokens: Vec<String> = tokenize("Hello, wor_ld 42!").collect();
/// assert_eq!(tokens, vec!["hello", "wor_ld", "42"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(|token| token.to_ascii_lowercase())
}

/// Counts the word tokens in text
pub fn word_count(text: &str) -> u64 {
    tokenize(text).count() as u64
}
