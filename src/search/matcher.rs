//! Subsequence matching
//!
//! A candidate passes the filter when every query character appears in it,
//! in order, with anything in between. The check is expressed as a regex:
//! a greedy `.*` wildcard goes before, after and between every escaped query
//! character, so `"ab"` becomes `(?s).*a.*b.*`.

use super::error::SearchError;
use regex::Regex;

const WILDCARD: &str = ".*";

/// Compiled subsequence filter for one query
#[derive(Debug, Clone)]
pub struct SubsequenceMatcher {
    regex: Regex,
}

impl SubsequenceMatcher {
    /// Compile a matcher for `query`
    ///
    /// An empty query produces a matcher that accepts every candidate.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Pattern` if the generated pattern exceeds the
    /// regex engine's size limits.
    pub fn new(query: &str) -> Result<Self, SearchError> {
        let regex = Regex::new(&Self::pattern(query))?;
        Ok(Self { regex })
    }

    /// Build the wildcard-interleaved pattern for `query`
    #[must_use]
    pub fn pattern(query: &str) -> String {
        let mut pattern = String::from("(?s)");
        pattern.push_str(WILDCARD);
        let mut buf = [0u8; 4];
        for ch in query.chars() {
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            pattern.push_str(WILDCARD);
        }
        pattern
    }

    /// Check whether `text` contains the query as an ordered subsequence
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
