//! Event handling for the finder
//!
//! Maps crossterm events onto [`InputEvent`]s and input events onto
//! [`EventResult`]s, applying query edits along the way.

use super::state::QueryBuffer;
use crate::ui::types::{EscapeAction, InputEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The caret moved, repaint only
    Continue,
    /// Query changed, needs re-ranking
    QueryChanged,
    /// Move the list selection one row up
    SelectionUp,
    /// Move the list selection one row down
    SelectionDown,
    /// Exit the finder with the highlighted candidate
    Confirm,
    /// Exit the finder as aborted
    Abort,
    /// Repaint everything from scratch
    Redraw,
    /// The device changed size
    Resized,
    /// No action taken
    Ignored,
}

/// Translate a crossterm event into finder input
///
/// Key releases and events the finder has no use for map to `None`.
#[must_use]
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Translate a key press into finder input
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    let event = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputEvent::ForceQuit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => InputEvent::Redraw,
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => InputEvent::Up,
        (KeyCode::Char('j'), KeyModifiers::CONTROL) => InputEvent::Down,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => InputEvent::Char(c),
        (KeyCode::Backspace, _) => InputEvent::Backspace,
        (KeyCode::Delete, _) => InputEvent::Delete,
        (KeyCode::Left, _) => InputEvent::Left,
        (KeyCode::Right, _) => InputEvent::Right,
        (KeyCode::Up, _) => InputEvent::Up,
        (KeyCode::Down, _) => InputEvent::Down,
        (KeyCode::Enter, _) => InputEvent::Enter,
        (KeyCode::Esc, _) => InputEvent::Escape,
        _ => return None,
    };
    Some(event)
}

/// Apply `event` to the query and report what else has to happen
pub fn handle_input(
    query: &mut QueryBuffer,
    event: InputEvent,
    escape: EscapeAction,
) -> EventResult {
    match event {
        InputEvent::Char(c) => {
            query.insert(c);
            EventResult::QueryChanged
        }
        InputEvent::Backspace => {
            if query.backspace() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::Delete => {
            if query.delete() {
                EventResult::QueryChanged
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::Left => {
            if query.move_left() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::Right => {
            if query.move_right() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        InputEvent::Up => EventResult::SelectionUp,
        InputEvent::Down => EventResult::SelectionDown,
        InputEvent::Enter => EventResult::Confirm,
        InputEvent::Escape => match escape {
            EscapeAction::Abort => EventResult::Abort,
            EscapeAction::Ignore => EventResult::Ignored,
        },
        InputEvent::ForceQuit => EventResult::Abort,
        InputEvent::Redraw => EventResult::Redraw,
        InputEvent::Resize { .. } => EventResult::Resized,
    }
}
