//! Mock fuzzy finder for testing

use super::error::{Result, UiError};
use super::traits::{FinderConfig, FuzzyFinder};
use super::types::FinderOutcome;
use std::cell::RefCell;

/// Mock fuzzy finder that returns a predetermined outcome
///
/// Useful for testing without requiring user interaction. The last
/// configuration it was run with is kept for inspection.
#[derive(Debug, Clone)]
pub struct MockFinder {
    /// Outcome to return
    pub outcome: FinderOutcome,
    /// Configuration passed to the last `run`
    pub last_config: RefCell<Option<FinderConfig>>,
}

impl MockFinder {
    /// Create a mock finder that selects the item at `index`
    #[must_use]
    pub const fn selecting(index: usize) -> Self {
        Self::new(FinderOutcome::Selected(index))
    }

    /// Create a mock finder that simulates user abort
    #[must_use]
    pub const fn aborted() -> Self {
        Self::new(FinderOutcome::Aborted)
    }

    const fn new(outcome: FinderOutcome) -> Self {
        Self {
            outcome,
            last_config: RefCell::new(None),
        }
    }

    /// Number of items the last run was offered
    #[must_use]
    pub fn offered(&self) -> Option<usize> {
        self.last_config.borrow().as_ref().map(|c| c.items.len())
    }
}

impl Default for MockFinder {
    fn default() -> Self {
        Self::selecting(0)
    }
}

impl FuzzyFinder for MockFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderOutcome> {
        if config.items.is_empty() {
            return Err(UiError::NoCandidates);
        }
        *self.last_config.borrow_mut() = Some(config);
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(items: &[&str]) -> FinderConfig {
        FinderConfig::new(items.iter().map(ToString::to_string).collect(), "> ".into())
    }

    #[test]
    fn test_mock_finder_with_selection() {
        let finder = MockFinder::selecting(1);
        let outcome = finder.run(config(&["a", "b"])).unwrap();

        assert_eq!(outcome, FinderOutcome::Selected(1));
        assert_eq!(finder.offered(), Some(2));
    }

    #[test]
    fn test_mock_finder_aborted() {
        let finder = MockFinder::aborted();
        let outcome = finder.run(config(&["a"])).unwrap();
        assert!(outcome.is_aborted());
    }

    #[test]
    fn test_mock_finder_rejects_empty_items() {
        let finder = MockFinder::default();
        assert!(matches!(finder.run(config(&[])), Err(UiError::NoCandidates)));
        assert_eq!(finder.offered(), None);
    }
}
