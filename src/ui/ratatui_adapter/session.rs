//! Finder session
//!
//! A [`FinderSession`] owns the list and input sections, the candidates and
//! the query, and runs the blocking event loop on top of a [`Screen`].
//!
//! ```text
//! ┌──────────────────────────┐  list section (index 0)
//! │  gamma                   │
//! │  alpha                   │
//! │ >beta                    │  row 0 of the ranked list
//! └──────────────────────────┘
//! ┌──────────────────────────┐  input section (index 1)
//! │  > a_                    │
//! └──────────────────────────┘
//! ```

use super::events::{EventResult, handle_input};
use super::state::QueryBuffer;
use super::theme::Theme;
use crate::search::{Candidate, rank};
use crate::ui::error::{Result, UiError};
use crate::ui::glyph::display_width;
use crate::ui::renderer::Renderer;
use crate::ui::screen::Screen;
use crate::ui::section::{Bounds, CONTENT_INDENT, CursorKind, DEFAULT_MARKER, Section};
use crate::ui::types::{EscapeAction, FinderOutcome, InputEvent};
use std::sync::Arc;
use tracing::{debug, info};

/// Renderer slot of the candidate list
pub const LIST_SECTION: usize = 0;

/// Renderer slot of the query input, painted over the list
pub const INPUT_SECTION: usize = 1;

/// Column offset of the selection marker inside the list
const MARKER_COLUMN: u16 = 2;

/// Per-session appearance and behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Text shown before the query
    pub prompt: String,
    /// Glyph marking the selected row
    pub marker: char,
    /// What the escape key does
    pub escape: EscapeAction,
    /// Colors
    pub theme: Theme,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            marker: DEFAULT_MARKER,
            escape: EscapeAction::default(),
            theme: Theme::default(),
        }
    }
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, not yet drawn
    Idle,
    /// Accepting input
    Running,
    /// Ended with a selection (original index)
    Selected(usize),
    /// Ended without a selection
    Aborted,
}

/// Interactive picker over a list of strings
pub struct FinderSession<S: Screen> {
    renderer: Renderer<S>,
    options: SessionOptions,
    query: QueryBuffer,
    candidates: Vec<Candidate>,
    filtered: Vec<Candidate>,
    phase: Phase,
}

impl<S: Screen> FinderSession<S> {
    /// Create a session drawing onto `screen`
    pub fn new(screen: S, options: SessionOptions) -> Self {
        let theme = &options.theme;
        let list = Section::default()
            .with_text_style(theme.text_style())
            .with_border_style(theme.border_style())
            .with_marker(options.marker);
        let input = Section::default()
            .with_text_style(theme.input_style())
            .with_border_style(theme.input_border_style());

        let mut renderer = Renderer::new(screen);
        renderer
            .insert_at(LIST_SECTION, list)
            .insert_at(INPUT_SECTION, input);

        let mut session = Self {
            renderer,
            options,
            query: QueryBuffer::new(),
            candidates: Vec::new(),
            filtered: Vec::new(),
            phase: Phase::Idle,
        };
        session.relayout();
        session
    }

    /// Replace the candidates; indices are assigned `0..n` in order
    ///
    /// A running session re-ranks them against the current query and
    /// repaints.
    ///
    /// # Errors
    ///
    /// Returns the error from ranking or drawing while running.
    pub fn set_items<I, T>(&mut self, items: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<str>>,
    {
        self.candidates = Candidate::from_items(items);
        if self.phase == Phase::Running {
            self.refilter()?;
            self.renderer.draw()?;
        } else {
            self.filtered.clone_from(&self.candidates);
            self.recalc_list();
            self.clamp_selection();
        }
        Ok(self)
    }

    /// Rank against the current query and paint the first frame
    ///
    /// Does nothing if the session is already running.
    ///
    /// # Errors
    ///
    /// Returns `UiError::NoCandidates` without candidates,
    /// `UiError::SessionFinished` if the session has ended, or the error
    /// from ranking or drawing.
    pub fn start(&mut self) -> Result<()> {
        match self.phase {
            Phase::Idle => {}
            Phase::Running => return Ok(()),
            Phase::Selected(_) | Phase::Aborted => return Err(UiError::SessionFinished),
        }
        if self.candidates.is_empty() {
            return Err(UiError::NoCandidates);
        }

        info!(candidates = self.candidates.len(), "finder session started");
        self.phase = Phase::Running;
        self.refilter()?;
        self.renderer.draw()
    }

    /// Read one event from the screen and handle it
    ///
    /// # Errors
    ///
    /// Returns the screen's event error or any error from
    /// [`handle_event`](Self::handle_event).
    pub fn step(&mut self) -> Result<Option<FinderOutcome>> {
        let event = self.renderer.screen_mut().poll_event()?;
        self.handle_event(event)
    }

    /// Apply one event, returning the outcome once the session ends
    ///
    /// An idle session is started first.
    ///
    /// # Errors
    ///
    /// Returns `UiError::SessionFinished` after the session has ended, or
    /// the error from ranking or drawing.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<Option<FinderOutcome>> {
        if self.phase == Phase::Idle {
            self.start()?;
        }
        if self.phase != Phase::Running {
            return Err(UiError::SessionFinished);
        }

        match handle_input(&mut self.query, event, self.options.escape) {
            EventResult::Continue => {
                self.sync_input();
                self.renderer.draw()?;
            }
            EventResult::QueryChanged => {
                self.refilter()?;
                self.renderer.draw()?;
            }
            EventResult::SelectionUp => {
                if let Some(list) = self.renderer.section_mut(LIST_SECTION) {
                    list.move_cursor_up(1);
                }
                self.clamp_selection();
                self.renderer.draw()?;
            }
            EventResult::SelectionDown => {
                if let Some(list) = self.renderer.section_mut(LIST_SECTION) {
                    list.move_cursor_down(1);
                }
                self.clamp_selection();
                self.renderer.draw()?;
            }
            EventResult::Confirm => {
                if let Some(index) = self.selected_index() {
                    info!(index, "candidate selected");
                    self.phase = Phase::Selected(index);
                    return Ok(Some(FinderOutcome::Selected(index)));
                }
                debug!("confirm ignored, nothing matches");
            }
            EventResult::Abort => {
                info!("finder aborted");
                self.phase = Phase::Aborted;
                return Ok(Some(FinderOutcome::Aborted));
            }
            EventResult::Redraw => {
                let screen = self.renderer.screen_mut();
                screen.sync()?;
                screen.clear();
                self.renderer.draw()?;
            }
            EventResult::Resized => {
                self.relayout();
                self.renderer.screen_mut().clear();
                self.renderer.draw()?;
            }
            EventResult::Ignored => {}
        }
        Ok(None)
    }

    /// Run until the user confirms or aborts, consuming the session
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn find(mut self) -> Result<FinderOutcome> {
        self.run()
    }

    /// Run until the user confirms or aborts
    ///
    /// The screen is restored before returning, whether the loop ended
    /// normally or with an error. The session stays inspectable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `UiError::NoCandidates` if no items were set, or any device
    /// or ranking error raised while running.
    pub fn run(&mut self) -> Result<FinderOutcome> {
        let outcome = self.run_loop();
        let restored = self.renderer.screen_mut().fini();
        let outcome = outcome?;
        restored?;
        Ok(outcome)
    }

    fn run_loop(&mut self) -> Result<FinderOutcome> {
        self.start()?;
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
        }
    }

    /// Candidates passing the current query, best first
    #[must_use]
    pub fn filtered(&self) -> &[Candidate] {
        &self.filtered
    }

    /// Current query text
    #[must_use]
    pub fn query(&self) -> String {
        self.query.to_string()
    }

    /// Original index of the highlighted candidate
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_row()
            .and_then(|row| self.filtered.get(row))
            .map(Candidate::index)
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The renderer and its sections
    #[must_use]
    pub const fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// The underlying screen
    #[must_use]
    pub const fn screen(&self) -> &S {
        self.renderer.screen()
    }

    /// Give the screen back without restoring it
    pub fn into_screen(self) -> S {
        self.renderer.into_screen()
    }

    /// Row of the filtered list under the selection cursor
    fn selected_row(&self) -> Option<usize> {
        let list = self.renderer.section(LIST_SECTION)?;
        let cursor = list.cursor()?;
        let row = list.bounds().end_y.checked_sub(1)?.checked_sub(cursor.y)?;
        Some(usize::from(row))
    }

    fn refilter(&mut self) -> Result<()> {
        let query = self.query.to_string();
        self.filtered = rank(&mut self.candidates, &query)?;
        debug!(
            query_len = self.query.len(),
            matched = self.filtered.len(),
            "re-ranked candidates"
        );
        self.recalc_list();
        self.clamp_selection();
        self.sync_input();
        Ok(())
    }

    /// Copy the visible part of the filtered list into the list section
    fn recalc_list(&mut self) {
        let Some(list) = self.renderer.section_mut(LIST_SECTION) else {
            return;
        };
        let Bounds { start_y, end_y, .. } = list.bounds();
        let visible = usize::from(end_y.saturating_sub(start_y).saturating_sub(1));
        list.set_content(
            self.filtered
                .iter()
                .take(visible)
                .map(|candidate| candidate.text().to_string())
                .collect(),
        );
    }

    /// Keep the selection on a row that holds a candidate
    fn clamp_selection(&mut self) {
        let len = self.filtered.len();
        let Some(list) = self.renderer.section_mut(LIST_SECTION) else {
            return;
        };
        let Some((_, top, _, bottom)) = list.bounds().interior().filter(|_| len > 0) else {
            list.clear_cursor();
            return;
        };

        let last_row = u16::try_from(len - 1).unwrap_or(u16::MAX);
        let highest = bottom.saturating_sub(last_row).max(top);
        let y = list.cursor().map_or(bottom, |c| c.y).clamp(highest, bottom);
        let x = list.bounds().start_x.saturating_add(MARKER_COLUMN);
        list.set_cursor(x, y, CursorKind::Selection);
    }

    /// Refresh the input line and its caret from the query
    fn sync_input(&mut self) {
        let line = format!("{}{}", self.options.prompt, self.query);
        let caret = display_width(&self.options.prompt)
            .saturating_add(display_width(&self.query.before_caret()));
        let Some(input) = self.renderer.section_mut(INPUT_SECTION) else {
            return;
        };
        let Bounds { start_x, end_y, .. } = input.bounds();
        input.set_content(vec![line]);
        input.set_cursor(
            start_x.saturating_add(CONTENT_INDENT).saturating_add(caret),
            end_y.saturating_sub(1),
            CursorKind::Typing,
        );
        input.clamp_cursor();
    }

    /// Fit both sections to the screen, keeping the selected row
    fn relayout(&mut self) {
        let selected_row = self.selected_row();
        let (list_bounds, input_bounds) = layout(self.renderer.size());

        if let Some(list) = self.renderer.section_mut(LIST_SECTION) {
            resize_to(list, list_bounds);
            match selected_row {
                Some(row) => {
                    let row = u16::try_from(row).unwrap_or(u16::MAX);
                    let y = list_bounds.end_y.saturating_sub(1).saturating_sub(row);
                    list.set_cursor(list_bounds.start_x, y, CursorKind::Selection);
                }
                None => list.clear_cursor(),
            }
        }
        if let Some(input) = self.renderer.section_mut(INPUT_SECTION) {
            resize_to(input, input_bounds);
        }

        self.recalc_list();
        self.clamp_selection();
        self.sync_input();
    }
}

/// List and input bounds for a usable area of `(width, height)`
#[must_use]
pub fn layout((width, height): (u16, u16)) -> (Bounds, Bounds) {
    let list = Bounds::new(0, 0, width, height.saturating_sub(3));
    let input = Bounds::new(0, height.saturating_sub(2), width, height);
    (list, input)
}

fn resize_to(section: &mut Section, bounds: Bounds) {
    section.resize(bounds.start_x, bounds.start_y, bounds.end_x, bounds.end_y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::HeadlessScreen;

    fn session(items: &[&str], events: &[InputEvent]) -> FinderSession<HeadlessScreen> {
        let screen = HeadlessScreen::new(30, 10).with_events(events.iter().copied());
        let mut session = FinderSession::new(screen, SessionOptions::default());
        session.set_items(items.iter().copied()).unwrap();
        session
    }

    fn feed(session: &mut FinderSession<HeadlessScreen>, text: &str) {
        for c in text.chars() {
            session.handle_event(InputEvent::Char(c)).unwrap();
        }
    }

    fn texts(session: &FinderSession<HeadlessScreen>) -> Vec<&str> {
        session.filtered().iter().map(Candidate::text).collect()
    }

    #[test]
    fn test_layout_splits_screen() {
        let (list, input) = layout((29, 9));
        assert_eq!(list, Bounds::new(0, 0, 29, 6));
        assert_eq!(input, Bounds::new(0, 7, 29, 9));

        let (list, input) = layout((0, 0));
        assert_eq!(list, Bounds::new(0, 0, 0, 0));
        assert_eq!(input, Bounds::new(0, 0, 0, 0));
    }

    #[test]
    fn test_first_frame() {
        let mut session = session(&["alpha", "beta"], &[]);
        session.start().unwrap();

        let screen = session.screen();
        assert_eq!(screen.flush_count(), 1);
        // The empty query ranks by length
        assert!(screen.row_text(5).starts_with("│ >beta"));
        assert!(screen.row_text(4).starts_with("│  alpha"));
        assert!(screen.row_text(8).starts_with("│  > "));
        assert_eq!(screen.cursor(), Some((5, 8)));
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.selected_index(), Some(1));
    }

    #[test]
    fn test_typing_ranks_by_distance() {
        let mut session = session(&["alpha", "beta", "gamma"], &[]);
        feed(&mut session, "a");

        assert_eq!(texts(&session), vec!["beta", "alpha", "gamma"]);
        assert_eq!(session.query(), "a");
        assert_eq!(session.screen().cursor(), Some((6, 8)));
        assert!(session.screen().row_text(5).contains(">beta"));
    }

    #[test]
    fn test_exact_query_selects_original_index() {
        let mut session = session(&["alpha", "beta"], &[]);
        feed(&mut session, "beta");
        assert_eq!(texts(&session), vec!["beta"]);
        assert_eq!(session.filtered()[0].distance(), 0);

        let outcome = session.handle_event(InputEvent::Enter).unwrap();
        assert_eq!(outcome, Some(FinderOutcome::Selected(1)));
        assert_eq!(session.phase(), Phase::Selected(1));
    }

    #[test]
    fn test_single_candidate_confirms_immediately() {
        let session = session(&["x"], &[InputEvent::Enter]);
        assert_eq!(session.find().unwrap(), FinderOutcome::Selected(0));
    }

    #[test]
    fn test_two_matches_keep_original_order_on_tie() {
        let mut session = session(&["ab", "ac", "bc"], &[]);
        feed(&mut session, "b");
        assert_eq!(texts(&session), vec!["ab", "bc"]);
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut session = session(&["a", "b", "c"], &[]);
        session.handle_event(InputEvent::Up).unwrap();
        assert_eq!(session.selected_index(), Some(1));

        for _ in 0..5 {
            session.handle_event(InputEvent::Up).unwrap();
        }
        assert_eq!(session.selected_index(), Some(2));

        for _ in 0..5 {
            session.handle_event(InputEvent::Down).unwrap();
        }
        assert_eq!(session.selected_index(), Some(0));
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut session = session(&["cb", "ab", "b", "dd"], &[]);
        for _ in 0..3 {
            session.handle_event(InputEvent::Up).unwrap();
        }
        assert_eq!(texts(&session), vec!["b", "cb", "ab", "dd"]);
        assert_eq!(session.selected_index(), Some(3));

        feed(&mut session, "b");
        assert_eq!(texts(&session), vec!["b", "cb", "ab"]);
        assert_eq!(session.selected_index(), Some(1));
    }

    #[test]
    fn test_enter_on_empty_list_is_ignored() {
        let mut session = session(&["alpha"], &[]);
        feed(&mut session, "z");
        assert!(session.filtered().is_empty());
        assert_eq!(session.selected_index(), None);
        assert_eq!(session.handle_event(InputEvent::Enter).unwrap(), None);
        assert_eq!(session.phase(), Phase::Running);

        session.handle_event(InputEvent::Backspace).unwrap();
        assert_eq!(
            session.handle_event(InputEvent::Enter).unwrap(),
            Some(FinderOutcome::Selected(0))
        );
    }

    #[test]
    fn test_escape_aborts_by_default() {
        let session = session(&["a"], &[InputEvent::Escape]);
        assert_eq!(session.find().unwrap(), FinderOutcome::Aborted);
    }

    #[test]
    fn test_escape_can_be_ignored() {
        let screen = HeadlessScreen::new(30, 10);
        let options = SessionOptions {
            escape: EscapeAction::Ignore,
            ..SessionOptions::default()
        };
        let mut session = FinderSession::new(screen, options);
        session.set_items(["a"]).unwrap();

        assert_eq!(session.handle_event(InputEvent::Escape).unwrap(), None);
        assert_eq!(
            session.handle_event(InputEvent::ForceQuit).unwrap(),
            Some(FinderOutcome::Aborted)
        );
    }

    #[test]
    fn test_caret_follows_left_and_right() {
        let mut session = session(&["abc"], &[]);
        feed(&mut session, "ab");
        assert_eq!(session.screen().cursor(), Some((7, 8)));

        session.handle_event(InputEvent::Left).unwrap();
        assert_eq!(session.screen().cursor(), Some((6, 8)));
        session.handle_event(InputEvent::Right).unwrap();
        session.handle_event(InputEvent::Right).unwrap();
        assert_eq!(session.screen().cursor(), Some((7, 8)));
    }

    #[test]
    fn test_delete_under_caret_reranks() {
        let mut session = session(&["ab", "b"], &[]);
        feed(&mut session, "ab");
        assert_eq!(texts(&session), vec!["ab"]);

        session.handle_event(InputEvent::Left).unwrap();
        session.handle_event(InputEvent::Left).unwrap();
        session.handle_event(InputEvent::Delete).unwrap();
        assert_eq!(session.query(), "b");
        assert_eq!(texts(&session), vec!["b", "ab"]);
    }

    #[test]
    fn test_resize_keeps_selection() {
        let mut session = session(
            &["a", "b", "c"],
            &[InputEvent::Resize {
                width: 40,
                height: 12,
            }],
        );
        session.handle_event(InputEvent::Up).unwrap();
        assert_eq!(session.step().unwrap(), None);

        let list = session.renderer().section(LIST_SECTION).unwrap();
        assert_eq!(list.bounds(), Bounds::new(0, 0, 39, 8));
        assert_eq!(session.selected_index(), Some(1));
        assert!(session.screen().row_text(10).starts_with("│  > "));
    }

    #[test]
    fn test_shrinking_resize_clamps_selection() {
        let screen = HeadlessScreen::new(30, 12).with_events([InputEvent::Resize {
            width: 30,
            height: 7,
        }]);
        let mut session = FinderSession::new(screen, SessionOptions::default());
        session.set_items(["a", "b", "c", "d", "e"]).unwrap();
        for _ in 0..4 {
            session.handle_event(InputEvent::Up).unwrap();
        }
        assert_eq!(session.selected_index(), Some(4));

        session.step().unwrap();
        assert_eq!(session.selected_index(), Some(1));
    }

    #[test]
    fn test_redraw_forces_sync() {
        let mut session = session(&["a"], &[]);
        session.handle_event(InputEvent::Redraw).unwrap();
        assert_eq!(session.screen().sync_count(), 1);
        assert_eq!(session.screen().flush_count(), 2);
    }

    #[test]
    fn test_events_after_finish_are_rejected() {
        let mut session = session(&["a"], &[]);
        session.handle_event(InputEvent::Enter).unwrap();
        assert!(matches!(
            session.handle_event(InputEvent::Char('a')),
            Err(UiError::SessionFinished)
        ));
        assert!(matches!(session.start(), Err(UiError::SessionFinished)));
    }

    #[test]
    fn test_find_without_items() {
        let session = session(&[], &[]);
        assert!(matches!(session.find(), Err(UiError::NoCandidates)));
    }

    #[test]
    fn test_find_reports_exhausted_events() {
        let session = session(&["a"], &[InputEvent::Char('a')]);
        assert!(matches!(session.find(), Err(UiError::EventsExhausted)));
    }

    #[test]
    fn test_set_items_replaces_candidates() {
        let mut session = session(&["a", "b"], &[]);
        session.set_items(["c"]).unwrap();
        assert_eq!(texts(&session), vec!["c"]);
        assert_eq!(session.selected_index(), Some(0));
    }

    #[test]
    fn test_set_items_while_running_applies_query() {
        let mut session = session(&["alpha", "beta"], &[]);
        feed(&mut session, "b");
        let flushes = session.screen().flush_count();

        session.set_items(["abc", "xyz", "b"]).unwrap();
        assert_eq!(texts(&session), vec!["b", "abc"]);
        assert_eq!(session.selected_index(), Some(2));
        assert_eq!(session.screen().flush_count(), flushes + 1);
        assert!(!session.screen().row_text(4).contains("xyz"));
    }

    #[test]
    fn test_run_restores_screen_on_every_exit() {
        let mut confirmed = session(&["a", "b"], &[InputEvent::Enter, InputEvent::Char('x')]);
        assert_eq!(confirmed.run().unwrap(), FinderOutcome::Selected(0));
        assert!(confirmed.screen().is_finished());
        assert!(confirmed.screen().cursor().is_none());
        assert_eq!(confirmed.screen().pending_events(), 1);

        let mut aborted = session(&["a"], &[InputEvent::Escape]);
        assert_eq!(aborted.run().unwrap(), FinderOutcome::Aborted);
        assert!(aborted.screen().is_finished());

        let mut exhausted = session(&["a"], &[InputEvent::Char('a')]);
        assert!(matches!(exhausted.run(), Err(UiError::EventsExhausted)));
        assert!(exhausted.screen().is_finished());

        let mut empty = session(&[], &[]);
        assert!(matches!(empty.run(), Err(UiError::NoCandidates)));
        assert!(empty.screen().is_finished());
    }

    #[test]
    fn test_custom_prompt_and_marker() {
        let screen = HeadlessScreen::new(30, 10);
        let options = SessionOptions {
            prompt: "pick: ".to_string(),
            marker: '*',
            ..SessionOptions::default()
        };
        let mut session = FinderSession::new(screen, options);
        session.set_items(["a"]).unwrap();
        session.start().unwrap();

        assert!(session.screen().row_text(8).starts_with("│  pick: "));
        assert_eq!(session.screen().symbol(2, 5), "*");
        assert_eq!(session.screen().cursor(), Some((9, 8)));
    }
}
