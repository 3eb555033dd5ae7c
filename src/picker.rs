//! Choosing one line from a list
//!
//! The glue between line-oriented input and a [`FuzzyFinder`]: read the
//! candidates, skip the finder when there is nothing to decide, and turn
//! the outcome back into text.

use crate::HashiError;
use crate::config::OutputMode;
use crate::ui::{FinderConfig, FinderOutcome, FuzzyFinder, UiError};
use std::io::{self, BufRead};
use tracing::debug;

/// Read newline-separated candidates
///
/// Trailing `\r` is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not UTF-8.
pub fn read_items(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            items.push(line.to_string());
        }
    }
    Ok(items)
}

/// Run `finder` over `config.items`
///
/// With `auto_select_single` a lone candidate is selected without running
/// the finder.
///
/// # Errors
///
/// Returns `UiError::NoCandidates` for an empty list, or whatever the
/// finder fails with.
pub fn pick<F>(
    finder: &F,
    config: FinderConfig,
    auto_select_single: bool,
) -> Result<FinderOutcome, HashiError>
where
    F: FuzzyFinder + ?Sized,
{
    match config.items.len() {
        0 => Err(UiError::NoCandidates.into()),
        1 if auto_select_single => {
            debug!("single candidate, skipping finder");
            Ok(FinderOutcome::Selected(0))
        }
        _ => Ok(finder.run(config)?),
    }
}

/// Text to print for `outcome`, or `None` if it was aborted
///
/// # Errors
///
/// Returns `HashiError::InvalidInput` if the index is out of range for
/// `items`.
pub fn render_selection(
    items: &[String],
    outcome: FinderOutcome,
    mode: OutputMode,
) -> Result<Option<String>, HashiError> {
    let Some(index) = outcome.selected() else {
        return Ok(None);
    };
    let line = items.get(index).ok_or_else(|| {
        HashiError::InvalidInput(format!("Selected index {index} is out of range"))
    })?;

    Ok(Some(match mode {
        OutputMode::Index => index.to_string(),
        OutputMode::Line => line.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mock::MockFinder;
    use std::io::Cursor;

    fn items(lines: &[&str]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_read_items_skips_blank_lines() {
        let input = Cursor::new("alpha\r\n\n  \nbeta\ngamma");
        assert_eq!(read_items(input).unwrap(), items(&["alpha", "beta", "gamma"]));
    }

    #[test]
    fn test_read_items_keeps_inner_whitespace() {
        let input = Cursor::new("hashicorp/google : 5.0.0\n");
        assert_eq!(read_items(input).unwrap(), items(&["hashicorp/google : 5.0.0"]));
    }

    #[test]
    fn test_read_items_rejects_invalid_utf8() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        assert!(read_items(input).is_err());
    }

    #[test]
    fn test_pick_empty_list() {
        let finder = MockFinder::default();
        let config = FinderConfig::new(Vec::new(), "> ".into());
        let result = pick(&finder, config, true);

        assert!(matches!(result, Err(HashiError::Ui(UiError::NoCandidates))));
        assert_eq!(finder.offered(), None);
    }

    #[test]
    fn test_pick_single_skips_finder() {
        let finder = MockFinder::aborted();
        let config = FinderConfig::new(items(&["only"]), "> ".into());

        assert_eq!(pick(&finder, config, true).unwrap(), FinderOutcome::Selected(0));
        assert_eq!(finder.offered(), None);
    }

    #[test]
    fn test_pick_single_without_auto_select_runs_finder() {
        let finder = MockFinder::aborted();
        let config = FinderConfig::new(items(&["only"]), "> ".into());

        assert_eq!(pick(&finder, config, false).unwrap(), FinderOutcome::Aborted);
        assert_eq!(finder.offered(), Some(1));
    }

    #[test]
    fn test_pick_runs_finder() {
        let finder = MockFinder::selecting(2);
        let config = FinderConfig::new(items(&["a", "b", "c"]), "> ".into());

        assert_eq!(pick(&finder, config, true).unwrap(), FinderOutcome::Selected(2));
        assert_eq!(finder.offered(), Some(3));
    }

    #[test]
    fn test_render_selection() {
        let list = items(&["a", "b"]);
        assert_eq!(
            render_selection(&list, FinderOutcome::Selected(1), OutputMode::Index).unwrap(),
            Some("1".to_string())
        );
        assert_eq!(
            render_selection(&list, FinderOutcome::Selected(1), OutputMode::Line).unwrap(),
            Some("b".to_string())
        );
        assert_eq!(
            render_selection(&list, FinderOutcome::Aborted, OutputMode::Line).unwrap(),
            None
        );
        assert!(render_selection(&list, FinderOutcome::Selected(5), OutputMode::Index).is_err());
    }
}
