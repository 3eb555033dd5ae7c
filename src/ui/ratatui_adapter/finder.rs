//! Terminal implementation of the `FuzzyFinder` trait

use super::screen::CrosstermScreen;
use super::session::{FinderSession, SessionOptions};
use super::theme::Theme;
use crate::ui::error::{Result, UiError};
use crate::ui::traits::{FinderConfig, FuzzyFinder};
use crate::ui::types::FinderOutcome;
use tracing::debug;

/// Fuzzy finder on the controlling terminal
///
/// The theme set with [`with_theme`](Self::with_theme) wins over the preset
/// named in the [`FinderConfig`].
#[derive(Debug, Clone, Default)]
pub struct RatatuiFinder {
    theme: Option<Theme>,
}

impl RatatuiFinder {
    /// Create a new ratatui-based finder
    #[must_use]
    pub const fn new() -> Self {
        Self { theme: None }
    }

    /// Set a custom theme
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Session options for `config`
    #[must_use]
    pub fn session_options(&self, config: &FinderConfig) -> SessionOptions {
        SessionOptions {
            prompt: config.prompt.clone(),
            marker: config.marker,
            escape: config.escape,
            theme: self
                .theme
                .clone()
                .unwrap_or_else(|| Theme::from_name(config.theme)),
        }
    }
}

impl FuzzyFinder for RatatuiFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderOutcome> {
        // Checked before touching the terminal
        if config.items.is_empty() {
            return Err(UiError::NoCandidates);
        }
        debug!(items = config.items.len(), "starting terminal finder");

        let options = self.session_options(&config);
        let screen = CrosstermScreen::init()?;
        let mut session = FinderSession::new(screen, options);
        session.set_items(config.items)?;
        session.find()
    }
}
