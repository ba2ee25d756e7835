//! Stopword source for word-frequency statistics
//!
//! Loaded once at startup and immutable for the run.

use crate::config::StopwordConfig;
use crate::ScourError;
use std::collections::HashSet;
use std::path::Path;

/// The built-in English stopword list
const DEFAULT_ENGLISH: &str = "a about above after again against all am an and any are aren't as \
at be because been before being below between both but by can't cannot could couldn't did \
didn't do does doesn't doing don't down during each few for from further had hadn't has hasn't \
have haven't having he he'd he'll he's her here here's hers herself him himself his how how's i \
i'd i'll i'm i've if in into is isn't it it's its itself let's me more most mustn't my myself \
no nor not of off on once only or other ought our ours ourselves out over own same shan't she \
she'd she'll she's should shouldn't so some such than that that's the their theirs them \
themselves then there there's these they they'd they'll they're they've this those through to \
too under until up very was wasn't we we'd we'll we're we've were weren't what what's when \
when's where where's which while who who's whom why why's with won't would wouldn't you you'd \
you'll you're you've your yours yourself yourselves";

/// An immutable set of words excluded from frequency statistics
///
/// Entries are stored in the same form the tokenizer produces, so lookup is
/// a direct set-membership test. Words like "aren't" reduce to "aren" and
/// "t" under the `[A-Za-z0-9_]+` token class, and the set stores those
/// reduced forms.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates the built-in English stopword set
    pub fn default_english() -> Self {
        Self::from_words(DEFAULT_ENGLISH.split_whitespace())
    }

    /// Loads a stopword set from a newline-delimited file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the stopword file, one word per line
    ///
    /// # Returns
    ///
    /// * `Ok(StopwordSet)` - Successfully loaded
    /// * `Err(ScourError)` - Failed to read the file
    pub fn from_file(path: &Path) -> Result<Self, ScourError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Loads the stopword set named by the configuration
    ///
    /// Falls back to the built-in English list when no file is configured.
    pub fn from_config(config: &StopwordConfig) -> Result<Self, ScourError> {
        match &config.path {
            Some(path) => Self::from_file(Path::new(path)),
            None => Ok(Self::default_english()),
        }
    }

    /// Creates a stopword set from an iterator of words
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = words
            .into_iter()
            .flat_map(crate::stats::tokenize)
            .collect();
        Self { words }
    }

    /// Checks if a token is a stopword
    ///
    /// Expects tokenizer output (lowercase).
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
