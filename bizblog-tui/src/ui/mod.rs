//! UI rendering
//!
//! Rendering functions that transform state into terminal frames. They read
//! state and draw; nothing here mutates the application.

mod detail;
mod list;
mod write;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::AppState;
use libbizblog::View;

pub use write::content_editor_block;

/// Screens reachable from the header, in display order
const NAV_ITEMS: [(View, &str); 5] = [
    (View::List, "h Home/Blog"),
    (View::About, "a About"),
    (View::Contact, "c Contact"),
    (View::Shop, "s Shop"),
    (View::Write, "w Write"),
];

/// Render the application UI
///
/// Main rendering entry point. The content editor is owned by the event
/// loop and passed in for the write screen.
pub fn render(frame: &mut Frame, state: &AppState, editor: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], state);

    match state.view() {
        View::List => list::render(frame, chunks[1], state),
        View::Detail(_) => detail::render(frame, chunks[1], state),
        View::Write => write::render(frame, chunks[1], state, editor),
        View::Shop => render_placeholder(frame, chunks[1], state, "Shop coming soon!"),
        View::About => render_placeholder(frame, chunks[1], state, "About coming soon!"),
        View::Contact => render_placeholder(frame, chunks[1], state, "Contact coming soon!"),
    }

    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Foreground color, or the terminal default when colors are off
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Site name plus the navigation bar
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let current = match state.view() {
        View::Detail(_) => View::List,
        other => other,
    };

    let mut spans = vec![
        Span::styled(
            state.blog.config().blog.title.clone(),
            fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for (view, label) in NAV_ITEMS {
        let style = if view == current {
            fg(state, Color::Yellow).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Status message plus the key hints for the current screen
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.focus.is_typing() && state.view() != View::Write {
        "Enter: Done | Esc: Cancel"
    } else {
        match state.view() {
            View::List => "/: Search | Tab: Category | ←/→: Page | Enter: Open | n: Newsletter | F1: Help | q: Quit",
            View::Detail(_) => "Esc: Back | ↑/↓: Related | Enter: Open | F1: Help | q: Quit",
            View::Write if state.can_publish() => {
                "Ctrl+S: Publish | Tab: Next field | Ctrl+K: Discard | Esc: Leave"
            }
            View::Write => "Tab: Next field | Ctrl+S: Publish | Ctrl+K: Discard | Esc: Leave",
            _ => "Esc: Back | F1: Help | q: Quit",
        }
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        let marker = if state.config.unicode_enabled { "✓ " } else { "* " };
        spans.push(Span::styled(
            format!("{}{}", marker, message),
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, fg(state, Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render placeholder screen for the static pages
fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", state.view().title()))
        .borders(Borders::ALL);

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), fg(state, Color::Yellow))),
        Line::from(""),
        Line::from("Press Esc or h to return to the blog"),
    ])
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(text, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1         - Toggle help"),
        Line::from("  h / b      - Home / Blog"),
        Line::from("  a c s      - About, Contact, Shop"),
        Line::from("  w          - Write a post"),
        Line::from(""),
        Line::from("Blog:"),
        Line::from("  /          - Search"),
        Line::from("  Tab        - Next category"),
        Line::from("  ←/→ 1-9    - Change page"),
        Line::from("  ↑/↓ Enter  - Pick and open a post"),
        Line::from("  p          - Switch to Popular Posts"),
        Line::from("  n          - Newsletter signup"),
        Line::from(""),
        Line::from("Write:"),
        Line::from("  Tab        - Next field"),
        Line::from("  Ctrl+S     - Publish"),
        Line::from("  Ctrl+K     - Discard draft"),
        Line::from("  Esc        - Leave (draft is kept)"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            fg(state, Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
        assert_eq!(inner.width, 60);
    }
}
