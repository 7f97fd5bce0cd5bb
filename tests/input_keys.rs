mod common;

use cgview::dialog::DialogOutcome;
use cgview::ui::app::{App, Focus};
use cgview::ui::input::handle_key;
use common::{calls, dialog_with, new_log};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn escape_cancels() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A", "B"], "", &log));
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
    assert_eq!(app.dialog().outcome(), Some(DialogOutcome::Rejected));
}

#[test]
fn ctrl_c_cancels() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A"], "", &log));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.dialog().outcome(), Some(DialogOutcome::Rejected));
}

#[test]
fn arrows_move_navigator_selection() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A", "B", "C"], "", &log));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.dialog().current_page_title(), Some("C"));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.dialog().current_page_title(), Some("A"));
}

#[test]
fn tab_moves_focus_to_page_and_back() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A", "B"], "", &log));
    assert_eq!(app.focus(), Focus::Navigator);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Page);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.dialog().current_page_title(), Some("A"));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Navigator);
}

#[test]
fn enter_confirms_and_commits() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A", "B"], "", &log));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog().outcome(), Some(DialogOutcome::Accepted));
    assert_eq!(calls(&log, ".commit"), ["A.commit", "B.commit"]);
}

#[test]
fn key_release_is_ignored() {
    let log = new_log();
    let mut app = App::new(dialog_with(&["A"], "", &log));
    let mut key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert!(!app.should_quit());
}
