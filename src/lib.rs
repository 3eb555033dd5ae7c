//! Hashi - an interactive fuzzy finder for the terminal
//!
//! This library provides a list picker that filters candidates by
//! subsequence match and ranks them by edit distance as the user types,
//! together with the small screen model it draws with.
//!
//! - [`search`] ranks candidates and has no UI dependency
//! - [`ui`] holds the screen model, the finder session and the
//!   [`ui::FuzzyFinder`] trait
//! - [`picker`] is the entry point the binary uses

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod picker;
pub mod search;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum HashiError {
    /// Finder error
    #[error("{0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: HashiError = ui::UiError::NoCandidates.into();
        assert_eq!(err.to_string(), "No candidates to choose from");

        let err: HashiError = std::io::Error::other("boom").into();
        assert!(matches!(err, HashiError::Io(_)));
    }
}
