//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The blog itself (posts, view, draft) lives in the embedded `BlogService`;
//! this struct adds what only the terminal needs: focus, cursor, overlays.

use libbizblog::config::UiSettings;
use libbizblog::service::validation::ValidationReport;
use libbizblog::{BlogService, Config, Post, View};

use super::actions::{ListPane, WriteField};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Posts, view and draft
    pub blog: BlogService,

    /// Where typed characters go
    pub focus: Focus,

    /// Highlighted row in the active list
    pub cursor: usize,

    /// Which list the cursor is in on the list screen
    pub pane: ListPane,

    /// Newsletter email being typed
    pub newsletter_email: String,

    /// Live validation of the write form
    pub write_report: ValidationReport,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Letters are shortcuts
    #[default]
    Browse,
    Search,
    Newsletter,
    Write(WriteField),
}

impl Focus {
    /// Is a text input capturing keystrokes?
    pub fn is_typing(&self) -> bool {
        !matches!(self, Focus::Browse)
    }
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BlogService::from_config(Config::default()))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_settings(&UiSettings::default())
    }
}

impl UiConfig {
    /// Start from the config file's `[ui]` table, then apply environment
    /// overrides (`NO_COLOR`, `BIZBLOG_TUI_NO_COLOR`, `BIZBLOG_TUI_TICK_MS`)
    pub fn from_settings(settings: &UiSettings) -> Self {
        let colors_enabled = settings.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("BIZBLOG_TUI_NO_COLOR").is_err();

        // NO_COLOR terminals also get ASCII symbols
        let unicode_enabled = colors_enabled;

        let tick_rate_ms = std::env::var("BIZBLOG_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(settings.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create application state around a blog service
    pub fn new(blog: BlogService) -> Self {
        let config = UiConfig::from_settings(&blog.config().ui);
        let write_report = blog.validate_draft();
        Self {
            should_quit: false,
            help_visible: false,
            blog,
            focus: Focus::Browse,
            cursor: 0,
            pane: ListPane::Posts,
            newsletter_email: String::new(),
            write_report,
            status: StatusBarState::default(),
            error: None,
            config,
        }
    }

    pub fn view(&self) -> View {
        self.blog.view()
    }

    /// Posts the cursor can move over on the current screen
    pub fn navigable_posts(&self) -> Vec<&Post> {
        match self.blog.view() {
            View::List => match self.pane {
                ListPane::Posts => self.blog.page().posts,
                ListPane::Popular => self.blog.popular().iter().collect(),
            },
            View::Detail(_) => self.blog.related(),
            _ => Vec::new(),
        }
    }

    /// Post under the cursor, if any
    pub fn highlighted(&self) -> Option<&Post> {
        self.navigable_posts().get(self.cursor).copied()
    }

    /// Is the content editor receiving keystrokes?
    pub fn editing_content(&self) -> bool {
        self.focus == Focus::Write(WriteField::Content)
            && self.blog.view() == View::Write
            && !self.help_visible
            && self.error.is_none()
    }

    /// Check if publishing is allowed
    pub fn can_publish(&self) -> bool {
        self.blog.view() == View::Write && self.write_report.is_valid()
    }
}
