//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: (State, Action) -> State
//! - Event: terminal input turned into actions
//! - Editor: the write form's content textarea

pub mod actions;
pub mod editor;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, ListPane, WriteField};
pub use editor::ContentEditor;
pub use reducer::{is_form_hotkey, reduce};
pub use state::{AppState, Focus, StatusBarState, UiConfig};
