//! Reducer for state transitions
//!
//! `(State, Action) -> State`. The reducer does no I/O: publishing and
//! subscribing are in-memory operations on the embedded `BlogService`.
//! Terminal drawing and the content editor widget live outside it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libbizblog::{BlogError, View};

use super::actions::{Action, ListPane, WriteField};
use super::state::{AppState, Focus, StatusBarState};

/// Reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    let mut state = state;

    match action {
        // === UI Events ===
        Action::Key(key) => return handle_key(state, key),
        Action::Tick => {}
        Action::Resize(_, _) => {} // Terminal auto-handles resize

        // === Navigation ===
        Action::Navigate(target) => {
            state.blog.navigate(target);
            state.focus = match target {
                View::Write => Focus::Write(WriteField::Title),
                _ => Focus::Browse,
            };
            state.cursor = 0;
            state.pane = ListPane::Posts;
            state.help_visible = false;
        }

        Action::OpenPost(id) => {
            state.blog.select(id);
            state.focus = Focus::Browse;
            state.cursor = 0;
        }

        Action::OpenHighlighted => {
            if let Some(id) = state.highlighted().map(|post| post.id) {
                return reduce(state, Action::OpenPost(id));
            }
        }

        Action::BackToList => {
            state.blog.clear_selection();
            state.cursor = 0;
            state.pane = ListPane::Posts;
        }

        Action::Quit => state.should_quit = true,

        Action::ShowHelp => state.help_visible = true,

        Action::HideHelp => state.help_visible = false,

        // === List Screen ===
        Action::CursorUp => state.cursor = state.cursor.saturating_sub(1),

        Action::CursorDown => {
            let len = state.navigable_posts().len();
            if state.cursor + 1 < len {
                state.cursor += 1;
            }
        }

        Action::SwitchPane => {
            state.pane = match state.pane {
                ListPane::Posts => ListPane::Popular,
                ListPane::Popular => ListPane::Posts,
            };
            state.cursor = 0;
        }

        Action::FocusSearch => state.focus = Focus::Search,

        Action::SearchChanged(query) => {
            state.blog.set_search(query);
            state.cursor = 0;
        }

        Action::CycleFilter { forward } => {
            state.blog.cycle_filter(forward);
            state.cursor = 0;
        }

        Action::PrevPage => {
            if state.blog.prev_page() {
                state.cursor = 0;
            }
        }

        Action::NextPage => {
            if state.blog.next_page() {
                state.cursor = 0;
            }
        }

        Action::GotoPage(page) => {
            if state.blog.goto_page(page) {
                state.cursor = 0;
            }
        }

        // === Newsletter ===
        Action::FocusNewsletter => state.focus = Focus::Newsletter,

        Action::NewsletterInputChanged(email) => state.newsletter_email = email,

        Action::NewsletterSubmitted => match state.blog.subscribe(&state.newsletter_email) {
            Ok(ack) => {
                state.status = StatusBarState {
                    message: Some(ack.message),
                };
                state.newsletter_email.clear();
                state.focus = Focus::Browse;
            }
            Err(e) => state.error = Some(error_message(&e)),
        },

        Action::Blur => state.focus = Focus::Browse,

        // === Write Form ===
        Action::WriteFocusNext => {
            if let Focus::Write(field) = state.focus {
                state.focus = Focus::Write(field.next());
            }
        }

        Action::WriteFocusPrev => {
            if let Focus::Write(field) = state.focus {
                state.focus = Focus::Write(field.prev());
            }
        }

        Action::WriteFieldChanged(field, value) => {
            let draft = state.blog.draft_mut();
            match field {
                WriteField::Title => draft.title = value,
                WriteField::Category => draft.category = value,
                WriteField::Image => {
                    draft.image = if value.is_empty() { None } else { Some(value) }
                }
                WriteField::Content => draft.content = value,
            }
            state.write_report = state.blog.validate_draft();
        }

        Action::WriteContentChanged(content) => {
            return reduce(state, Action::WriteFieldChanged(WriteField::Content, content));
        }

        Action::Publish => match state.blog.publish_draft() {
            Ok(id) => {
                state.status = StatusBarState {
                    message: Some(format!("Published post #{}", id)),
                };
                state.write_report = state.blog.validate_draft();
                state.focus = Focus::Browse;
                state.cursor = 0;
                state.pane = ListPane::Posts;
            }
            Err(e) => state.error = Some(error_message(&e)),
        },

        Action::DiscardDraft => {
            state.blog.cancel_write();
            state.write_report = state.blog.validate_draft();
            state.focus = Focus::Browse;
            state.cursor = 0;
        }

        // === Error Handling ===
        Action::DismissError => state.error = None,
    }

    state
}

/// Text for the error overlay; validation failures show their prompt as-is
fn error_message(error: &BlogError) -> String {
    match error {
        BlogError::Validation(e) => e.to_string(),
        other => other.to_string(),
    }
}

/// Keys the write form handles itself instead of passing to a text field
pub fn is_form_hotkey(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Esc, _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::F(_), _)
            | (KeyCode::Char('s'), KeyModifiers::CONTROL)
            | (KeyCode::Char('k'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Always available
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return reduce(state, Action::Quit),
        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }
        _ => {}
    }

    // Overlays swallow everything else
    if state.error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => reduce(state, Action::DismissError),
            _ => state,
        };
    }
    if state.help_visible {
        return match key.code {
            KeyCode::Esc => reduce(state, Action::HideHelp),
            _ => state,
        };
    }

    match state.focus {
        Focus::Search => handle_search_key(state, key),
        Focus::Newsletter => handle_newsletter_key(state, key),
        Focus::Write(field) => handle_write_key(state, field, key),
        Focus::Browse => handle_browse_key(state, key),
    }
}

/// Apply a single-line edit; `None` when the key is not an edit
fn edit_line(current: &str, key: &KeyEvent) -> Option<String> {
    match (key.code, key.modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            let mut value = current.to_string();
            value.push(c);
            Some(value)
        }
        (KeyCode::Backspace, _) => {
            let mut value = current.to_string();
            value.pop();
            Some(value)
        }
        _ => None,
    }
}

fn handle_search_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => reduce(state, Action::Blur),
        _ => match edit_line(&state.blog.view_state().search_query, &key) {
            Some(query) => reduce(state, Action::SearchChanged(query)),
            None => state,
        },
    }
}

fn handle_newsletter_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Esc => reduce(state, Action::Blur),
        KeyCode::Enter => reduce(state, Action::NewsletterSubmitted),
        _ => match edit_line(&state.newsletter_email, &key) {
            Some(email) => reduce(state, Action::NewsletterInputChanged(email)),
            None => state,
        },
    }
}

fn handle_write_key(state: AppState, field: WriteField, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => reduce(state, Action::Publish),
        (KeyCode::Char('k'), KeyModifiers::CONTROL) => reduce(state, Action::DiscardDraft),
        // Leave the form; the draft is kept for later
        (KeyCode::Esc, _) => reduce(state, Action::Navigate(View::List)),
        (KeyCode::Tab, _) => reduce(state, Action::WriteFocusNext),
        (KeyCode::BackTab, _) => reduce(state, Action::WriteFocusPrev),
        (KeyCode::Enter, _) if field != WriteField::Content => {
            reduce(state, Action::WriteFocusNext)
        }
        _ => {
            // Content edits arrive as WriteContentChanged from the editor widget
            if field == WriteField::Content {
                return state;
            }
            let draft = state.blog.draft();
            let current = match field {
                WriteField::Title => draft.title.clone(),
                WriteField::Category => draft.category.clone(),
                WriteField::Image => draft.image.clone().unwrap_or_default(),
                WriteField::Content => draft.content.clone(),
            };
            match edit_line(&current, &key) {
                Some(value) => reduce(state, Action::WriteFieldChanged(field, value)),
                None => state,
            }
        }
    }
}

fn handle_browse_key(state: AppState, key: KeyEvent) -> AppState {
    // Screen switches, available on every browsing screen
    let nav = match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return reduce(state, Action::Quit),
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Char('b'), KeyModifiers::NONE) => {
            Some(View::List)
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(View::About),
        (KeyCode::Char('c'), KeyModifiers::NONE) => Some(View::Contact),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(View::Shop),
        (KeyCode::Char('w'), KeyModifiers::NONE) => Some(View::Write),
        _ => None,
    };
    if let Some(target) = nav {
        return reduce(state, Action::Navigate(target));
    }

    match state.view() {
        View::List => handle_list_key(state, key),
        View::Detail(_) => match key.code {
            KeyCode::Esc | KeyCode::Backspace => reduce(state, Action::BackToList),
            KeyCode::Up | KeyCode::Char('k') => reduce(state, Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => reduce(state, Action::CursorDown),
            KeyCode::Enter => reduce(state, Action::OpenHighlighted),
            _ => state,
        },
        View::Shop | View::About | View::Contact => match key.code {
            KeyCode::Esc => reduce(state, Action::Navigate(View::List)),
            _ => state,
        },
        // Write always has a form field focused
        View::Write => state,
    }
}

fn handle_list_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        (KeyCode::Char('/'), _) => reduce(state, Action::FocusSearch),
        (KeyCode::Char('n'), KeyModifiers::NONE) => reduce(state, Action::FocusNewsletter),
        (KeyCode::Char('p'), KeyModifiers::NONE) => reduce(state, Action::SwitchPane),
        (KeyCode::Tab, _) => reduce(state, Action::CycleFilter { forward: true }),
        (KeyCode::BackTab, _) => reduce(state, Action::CycleFilter { forward: false }),
        (KeyCode::Left, _) => reduce(state, Action::PrevPage),
        (KeyCode::Right, _) => reduce(state, Action::NextPage),
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::CursorUp)
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::CursorDown)
        }
        (KeyCode::Enter, _) => reduce(state, Action::OpenHighlighted),
        (KeyCode::Char(d), KeyModifiers::NONE) if d.is_ascii_digit() && d != '0' => {
            let page = d.to_digit(10).map(|n| n as usize).unwrap_or(1);
            reduce(state, Action::GotoPage(page))
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libbizblog::PostId;

    #[test]
    fn test_reducer_returns_new_state() {
        let state = AppState::default();
        let state_clone = state.clone();

        let new_state = reduce(state_clone.clone(), Action::NewsletterInputChanged("a@b.co".to_string()));

        // Original state unchanged
        assert!(state_clone.newsletter_email.is_empty());
        assert_eq!(new_state.newsletter_email, "a@b.co");
    }

    #[test]
    fn test_quit_action() {
        let state = AppState::default();
        assert!(!state.should_quit);
        assert!(reduce(state, Action::Quit).should_quit);
    }

    #[test]
    fn test_navigate_to_write_focuses_title() {
        let state = reduce(AppState::default(), Action::Navigate(View::Write));
        assert_eq!(state.view(), View::Write);
        assert_eq!(state.focus, Focus::Write(WriteField::Title));
    }

    #[test]
    fn test_open_highlighted_post() {
        let state = AppState::default();
        let state = reduce(state, Action::CursorDown);
        let state = reduce(state, Action::OpenHighlighted);
        assert_eq!(state.view(), View::Detail(PostId(2)));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = AppState::default();
        for _ in 0..10 {
            state = reduce(state, Action::CursorDown);
        }
        assert_eq!(state.cursor, 2);

        for _ in 0..10 {
            state = reduce(state, Action::CursorUp);
        }
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_publish_failure_shows_prompt() {
        let state = reduce(AppState::default(), Action::Navigate(View::Write));
        let state = reduce(state, Action::Publish);
        assert_eq!(
            state.error.as_deref(),
            Some("Please fill in all fields (missing: title, content, category)")
        );
        assert_eq!(state.view(), View::Write);
        assert_eq!(state.blog.posts().len(), 3);
    }

    #[test]
    fn test_edit_line() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(edit_line("ab", &key), Some("abx".to_string()));

        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(edit_line("ab", &key), Some("a".to_string()));

        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(edit_line("ab", &key), None);
    }

    #[test]
    fn test_form_hotkeys() {
        assert!(is_form_hotkey(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(is_form_hotkey(&KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(!is_form_hotkey(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)));
        assert!(!is_form_hotkey(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
