//! Integration tests for hashi
//!
//! These tests drive complete finder sessions on an in-memory screen and
//! check what the user would see and what the caller gets back.

use hashi::config::OutputMode;
use hashi::picker::{read_items, render_selection};
use hashi::search::{Candidate, rank};
use hashi::ui::{
    EscapeAction, FinderOutcome, FinderSession, HeadlessScreen, InputEvent, SessionOptions,
    UiError,
};
use std::io::Cursor;

/// Helper to build a session with typed text followed by extra events
fn session(items: &[&str], typed: &str, then: &[InputEvent]) -> FinderSession<HeadlessScreen> {
    let events = typed
        .chars()
        .map(InputEvent::Char)
        .chain(then.iter().copied());
    let screen = HeadlessScreen::new(40, 12).with_events(events);
    let mut session = FinderSession::new(screen, SessionOptions::default());
    session.set_items(items.iter().copied()).unwrap();
    session
}

#[test]
fn test_pick_exact_match() {
    let outcome = session(&["alpha", "beta"], "beta", &[InputEvent::Enter])
        .find()
        .unwrap();
    assert_eq!(outcome, FinderOutcome::Selected(1));
}

#[test]
fn test_pick_single_item_without_query() {
    let outcome = session(&["x"], "", &[InputEvent::Enter]).find().unwrap();
    assert_eq!(outcome, FinderOutcome::Selected(0));
}

#[test]
fn test_navigate_to_second_match() {
    // "a" ranks beta (3), alpha (4), gamma (4)
    let outcome = session(
        &["alpha", "beta", "gamma"],
        "a",
        &[InputEvent::Up, InputEvent::Enter],
    )
    .find()
    .unwrap();
    assert_eq!(outcome, FinderOutcome::Selected(0));
}

#[test]
fn test_edit_query_before_confirming() {
    let outcome = session(
        &["serde", "tokio", "clap"],
        "tz",
        &[InputEvent::Backspace, InputEvent::Enter],
    )
    .find()
    .unwrap();
    assert_eq!(outcome, FinderOutcome::Selected(1));
}

#[test]
fn test_confirm_with_no_match_waits_for_more_input() {
    let outcome = session(
        &["ab", "ac", "bc"],
        "zz",
        &[
            InputEvent::Enter,
            InputEvent::Backspace,
            InputEvent::Backspace,
            InputEvent::Char('c'),
            InputEvent::Enter,
        ],
    )
    .find()
    .unwrap();
    assert_eq!(outcome, FinderOutcome::Selected(1));
}

#[test]
fn test_escape_and_force_quit() {
    let outcome = session(&["a", "b"], "", &[InputEvent::Escape]).find().unwrap();
    assert_eq!(outcome, FinderOutcome::Aborted);

    let screen = HeadlessScreen::new(40, 12).with_events([
        InputEvent::Escape,
        InputEvent::Char('b'),
        InputEvent::ForceQuit,
    ]);
    let options = SessionOptions {
        escape: EscapeAction::Ignore,
        ..SessionOptions::default()
    };
    let mut session = FinderSession::new(screen, options);
    session.set_items(["a", "b"]).unwrap();
    assert_eq!(session.find().unwrap(), FinderOutcome::Aborted);
}

#[test]
fn test_resize_mid_session() {
    let outcome = session(
        &["one", "two", "three"],
        "",
        &[
            InputEvent::Up,
            InputEvent::Resize {
                width: 20,
                height: 8,
            },
            InputEvent::Enter,
        ],
    )
    .find()
    .unwrap();
    // Empty query ranks by length: one, two, three
    assert_eq!(outcome, FinderOutcome::Selected(1));
}

#[test]
fn test_tiny_screen_ignores_confirm() {
    let screen = HeadlessScreen::new(3, 3).with_events([InputEvent::Enter]);
    let mut session = FinderSession::new(screen, SessionOptions::default());
    session.set_items(["a"]).unwrap();
    assert!(matches!(session.find(), Err(UiError::EventsExhausted)));
}

#[test]
fn test_rendered_frame() {
    let mut session = session(&["alpha", "beta", "gamma"], "", &[]);
    session.handle_event(InputEvent::Char('a')).unwrap();

    let screen = session.screen();
    let rows = screen.rows();
    // 40x12 screen: list rows 1..=7, input line on row 10
    assert!(rows[7].starts_with("│ >beta"));
    assert!(rows[6].starts_with("│  alpha"));
    assert!(rows[5].starts_with("│  gamma"));
    assert!(rows[10].starts_with("│  > a"));
    assert_eq!(screen.cursor(), Some((6, 10)));
}

#[test]
fn test_empty_candidates_rejected() {
    let result = session(&[], "", &[InputEvent::Enter]).find();
    assert!(matches!(result, Err(UiError::NoCandidates)));
}

#[test]
fn test_ranking_pipeline() {
    let mut candidates = Candidate::from_items(["ab", "ac", "bc"]);
    let ranked = rank(&mut candidates, "b").unwrap();
    let texts: Vec<&str> = ranked.iter().map(Candidate::text).collect();
    assert_eq!(texts, vec!["ab", "bc"]);
    assert!(!candidates[1].is_valid());
}

#[test]
fn test_read_then_render_line() {
    let input = "hashicorp/aws : 5.0.0\nhashicorp/google : 4.1.0\n";
    let items = read_items(Cursor::new(input)).unwrap();
    let outcome = session(
        &items.iter().map(String::as_str).collect::<Vec<_>>(),
        "goo",
        &[InputEvent::Enter],
    )
    .find()
    .unwrap();

    assert_eq!(
        render_selection(&items, outcome, OutputMode::Line).unwrap(),
        Some("hashicorp/google : 4.1.0".to_string())
    );
}

#[test]
fn test_screen_restored_after_session() {
    let mut selected = session(&["alpha", "beta"], "al", &[InputEvent::Enter]);
    assert_eq!(selected.run().unwrap(), FinderOutcome::Selected(0));
    let screen = selected.into_screen();
    assert!(screen.is_finished());
    assert!(screen.cursor().is_none());

    let mut aborted = session(&["alpha", "beta"], "", &[InputEvent::ForceQuit]);
    assert_eq!(aborted.run().unwrap(), FinderOutcome::Aborted);
    assert!(aborted.screen().is_finished());

    let mut failed = session(&["alpha"], "a", &[]);
    assert!(matches!(failed.run(), Err(UiError::EventsExhausted)));
    assert!(failed.screen().is_finished());
}

#[test]
fn test_items_replaced_mid_session_follow_query() {
    let mut session = session(&["alpha", "beta"], "", &[]);
    for c in "ga".chars() {
        session.handle_event(InputEvent::Char(c)).unwrap();
    }
    assert!(session.filtered().is_empty());

    session.set_items(["gamma", "delta", "omega"]).unwrap();
    let texts: Vec<&str> = session.filtered().iter().map(Candidate::text).collect();
    assert_eq!(texts, vec!["gamma", "omega"]);
    assert_eq!(
        session.handle_event(InputEvent::Enter).unwrap(),
        Some(FinderOutcome::Selected(0))
    );
}
