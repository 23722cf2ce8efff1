//! Content editor for the write form
//!
//! Wraps a `tui-textarea` and keeps it in step with the draft: keystrokes
//! typed into it become `Action::WriteContentChanged`, and it starts over
//! once the draft's content has been published or discarded.

use crossterm::event::KeyEvent;
use ratatui::widgets::Block;
use tui_textarea::TextArea;

use super::actions::Action;
use super::reducer::is_form_hotkey;
use super::state::AppState;

/// Placeholder shown in an empty content editor
pub const CONTENT_PLACEHOLDER: &str = "Write your post... HTML tags are allowed (Ctrl+S to publish)";

/// Stateful multi-line editor for a post's content
pub struct ContentEditor {
    textarea: TextArea<'static>,
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentEditor {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(CONTENT_PLACEHOLDER);
        Self { textarea }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn set_block(&mut self, block: Block<'static>) {
        self.textarea.set_block(block);
    }

    /// Current text, lines joined with `\n`
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    /// Route a key press.
    ///
    /// While the content field has focus, every key except the form's own
    /// hotkeys edits the text and yields the new content. Everything else
    /// goes to the reducer's keymap unchanged.
    pub fn route_key(&mut self, state: &AppState, key: KeyEvent) -> Action {
        if state.editing_content() && !is_form_hotkey(&key) {
            self.textarea.input(key);
            Action::WriteContentChanged(self.content())
        } else {
            Action::Key(key)
        }
    }

    /// Start over when the draft's content is gone (published or discarded).
    /// Returns whether the editor was reset.
    pub fn sync(&mut self, state: &AppState) -> bool {
        if state.blog.draft().content.is_empty() && !self.is_empty() {
            *self = Self::new();
            true
        } else {
            false
        }
    }
}
