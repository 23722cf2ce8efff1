//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use bizblog_tui::app::{is_form_hotkey, reduce, Action, AppState, Focus, WriteField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libbizblog::View;

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

#[test]
fn test_q_quits_application() {
    let state = press(AppState::default(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_from_text_field() {
    let state = press(AppState::default(), KeyCode::Char('/'));
    assert_eq!(state.focus, Focus::Search);

    let state = reduce(state, Action::Key(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(state.should_quit);
}

#[test]
fn test_q_types_into_search() {
    let state = press(AppState::default(), KeyCode::Char('/'));
    let state = press(state, KeyCode::Char('q'));

    assert!(!state.should_quit);
    assert_eq!(state.blog.view_state().search_query, "q");
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::default();
    assert!(!state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_esc_hides_help() {
    let state = press(AppState::default(), KeyCode::F(1));
    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
}

#[test]
fn test_help_overlay_swallows_shortcuts() {
    let state = press(AppState::default(), KeyCode::F(1));
    let state = press(state, KeyCode::Char('a'));

    assert!(state.help_visible);
    assert_eq!(state.view(), View::List);
}

#[test]
fn test_letter_shortcuts_switch_screens() {
    let cases = [
        ('a', View::About),
        ('c', View::Contact),
        ('s', View::Shop),
        ('w', View::Write),
    ];

    for (key, expected) in cases {
        let state = press(AppState::default(), KeyCode::Char(key));
        assert_eq!(state.view(), expected, "key '{}'", key);

        // Home/Blog from every screen except Write, where letters are typed
        if expected != View::Write {
            assert_eq!(press(state.clone(), KeyCode::Char('h')).view(), View::List);
            assert_eq!(press(state, KeyCode::Char('b')).view(), View::List);
        }
    }
}

#[test]
fn test_esc_leaves_static_page() {
    let state = press(AppState::default(), KeyCode::Char('s'));
    let state = press(state, KeyCode::Esc);
    assert_eq!(state.view(), View::List);
}

#[test]
fn test_error_overlay_blocks_other_keys() {
    // An empty newsletter email raises the error overlay
    let state = press(AppState::default(), KeyCode::Char('n'));
    let state = press(state, KeyCode::Enter);
    let error = state.error.clone();
    assert!(error.is_some());

    let state = press(state, KeyCode::Char('q'));
    assert!(!state.should_quit);
    assert_eq!(state.error, error);

    let state = press(state, KeyCode::Esc);
    assert!(state.error.is_none());
}

#[test]
fn test_tab_moves_between_write_fields() {
    let state = press(AppState::default(), KeyCode::Char('w'));
    assert_eq!(state.focus, Focus::Write(WriteField::Title));

    let state = press(state, KeyCode::Tab);
    assert_eq!(state.focus, Focus::Write(WriteField::Category));

    let state = press(state, KeyCode::Tab);
    let state = press(state, KeyCode::Tab);
    assert_eq!(state.focus, Focus::Write(WriteField::Content));
    assert!(state.editing_content());

    let state = press(state, KeyCode::Tab);
    assert_eq!(state.focus, Focus::Write(WriteField::Title));

    let state = press(state, KeyCode::BackTab);
    assert_eq!(state.focus, Focus::Write(WriteField::Content));
}

#[test]
fn test_form_hotkeys_bypass_content_editor() {
    assert!(is_form_hotkey(&key_event(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(is_form_hotkey(&key_event(KeyCode::BackTab, KeyModifiers::SHIFT)));
    assert!(is_form_hotkey(&key_event(KeyCode::F(1), KeyModifiers::NONE)));
    assert!(is_form_hotkey(&key_event(KeyCode::Char('k'), KeyModifiers::CONTROL)));

    // Plain letters belong to the editor
    assert!(!is_form_hotkey(&key_event(KeyCode::Char('q'), KeyModifiers::NONE)));
    assert!(!is_form_hotkey(&key_event(KeyCode::Char('w'), KeyModifiers::NONE)));
    assert!(!is_form_hotkey(&key_event(KeyCode::Backspace, KeyModifiers::NONE)));
}
