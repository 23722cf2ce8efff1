//! Write form with tui-textarea integration
//!
//! Title, category and image are single-line fields rendered from the draft.
//! Content is the `app::ContentEditor` textarea, which syncs
//! its text back into the draft through `Action::WriteContentChanged`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use super::fg;
use crate::app::{AppState, Focus, WriteField};

/// Border for the content editor: yellow while focused, otherwise green or
/// red by whether the draft would publish
pub fn content_editor_block(state: &AppState) -> Block<'static> {
    let focused = state.focus == Focus::Write(WriteField::Content);
    let color = if focused {
        Color::Yellow
    } else if state.write_report.is_valid() {
        Color::Green
    } else {
        Color::Red
    };

    Block::default()
        .title(format!(" {} ", WriteField::Content.label()))
        .borders(Borders::ALL)
        .border_style(fg(state, color))
}

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState, editor: &TextArea) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Category
            Constraint::Length(3), // Image
            Constraint::Min(5),    // Content
            Constraint::Length(4), // Validation
        ])
        .split(area);

    let draft = state.blog.draft();
    let image = draft.image.clone().unwrap_or_default();
    let fields = [
        (WriteField::Title, draft.title.as_str()),
        (WriteField::Category, draft.category.as_str()),
        (WriteField::Image, image.as_str()),
    ];
    for (row, (field, value)) in rows.iter().zip(fields) {
        render_line_field(frame, *row, state, field, value);
    }

    frame.render_widget(editor, rows[3]);

    render_validation(frame, rows[4], state);
}

fn render_line_field(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    field: WriteField,
    value: &str,
) {
    let focused = state.focus == Focus::Write(field);
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let border = if focused {
        fg(state, Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn render_validation(frame: &mut Frame, area: Rect, state: &AppState) {
    let report = &state.write_report;
    let (symbol, style) = match (report.is_valid(), state.config.unicode_enabled) {
        (true, true) => ("✓", fg(state, Color::Green)),
        (true, false) => ("OK", fg(state, Color::Green)),
        (false, true) => ("✗", fg(state, Color::Red)),
        (false, false) => ("X", fg(state, Color::Red)),
    };
    let chars = state.blog.draft().content.chars().count();

    let mut lines = vec![Line::from(vec![
        Span::styled(symbol, style.add_modifier(Modifier::BOLD)),
        Span::raw(format!(" | {} chars", chars)),
    ])];
    let mut messages = report.messages();
    messages.extend(report.warnings.iter().cloned());
    if messages.is_empty() {
        lines.push(Line::from(Span::styled("Ready to publish", fg(state, Color::Gray))));
    } else {
        lines.push(Line::from(Span::styled(messages.join(" | "), fg(state, Color::Gray))));
    }

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}
