//! Ranking-specific error types
//!
//! Errors raised while turning a query into a matcher or ranking the
//! candidate set. Matching itself never fails once the matcher is built.

use thiserror::Error;

/// Ranking engine errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query could not be compiled into a subsequence pattern
    #[error("Invalid query pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_error_display() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err = SearchError::from(regex_err);
        assert!(err.to_string().starts_with("Invalid query pattern:"));
    }
}
