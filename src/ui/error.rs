//! UI error types

use crate::search::SearchError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal could not be acquired or switched into raw mode
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// The finder was started without anything to choose from
    #[error("No candidates to choose from")]
    NoCandidates,

    /// The finder session has already run
    #[error("Finder session has already finished")]
    SessionFinished,

    /// A scripted event source ran dry before the session ended
    #[error("Input events exhausted before a selection was made")]
    EventsExhausted,

    /// Ranking the candidates failed
    #[error("Ranking failed: {0}")]
    Search(#[from] SearchError),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
