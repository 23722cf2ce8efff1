//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! every action that can modify application state.

use crossterm::event::KeyEvent;
use libbizblog::{PostId, View};

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying them to state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Switch screens (Home/Blog, About, Contact, Shop, Write)
    Navigate(View),

    /// Open a post's detail screen
    OpenPost(PostId),

    /// Open whatever the cursor is on
    OpenHighlighted,

    /// Leave the detail screen for the list
    BackToList,

    /// Quit the application
    Quit,

    ShowHelp,
    HideHelp,

    // === List Screen ===
    CursorUp,
    CursorDown,

    /// Move the cursor between the post cards and the Popular Posts sidebar
    SwitchPane,

    FocusSearch,
    SearchChanged(String),

    /// Step through the category list
    CycleFilter { forward: bool },

    PrevPage,
    NextPage,
    GotoPage(usize),

    // === Newsletter ===
    FocusNewsletter,
    NewsletterInputChanged(String),
    NewsletterSubmitted,

    /// Return keyboard focus from a text input to browsing
    Blur,

    // === Write Form ===
    WriteFocusNext,
    WriteFocusPrev,

    /// A single-line form field changed
    WriteFieldChanged(WriteField, String),

    /// The content editor changed
    WriteContentChanged(String),

    /// Publish the draft
    Publish,

    /// Discard the draft and return to the list
    DiscardDraft,

    // === Error Handling ===
    DismissError,
}

/// Fields of the write form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteField {
    Title,
    Category,
    Image,
    Content,
}

impl WriteField {
    pub fn next(self) -> Self {
        match self {
            WriteField::Title => WriteField::Category,
            WriteField::Category => WriteField::Image,
            WriteField::Image => WriteField::Content,
            WriteField::Content => WriteField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WriteField::Title => WriteField::Content,
            WriteField::Category => WriteField::Title,
            WriteField::Image => WriteField::Category,
            WriteField::Content => WriteField::Image,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WriteField::Title => "Title",
            WriteField::Category => "Category",
            WriteField::Image => "Image URL (optional)",
            WriteField::Content => "Content",
        }
    }
}

/// Which list the cursor moves through on the list screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPane {
    #[default]
    Posts,
    Popular,
}
