//! Blog list screen: search, category bar, post cards, pagination and sidebar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::fg;
use crate::app::{AppState, Focus, ListPane};
use libbizblog::Post;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(3), // Categories
            Constraint::Min(3),    // Cards
            Constraint::Length(3), // Pagination
        ])
        .split(columns[0]);

    render_search(frame, main[0], state);
    render_category_bar(frame, main[1], state);
    render_cards(frame, main[2], state);
    render_pagination(frame, main[3], state);
    render_sidebar(frame, columns[1], state);
}

fn focused_border(state: &AppState, focused: bool) -> Style {
    if focused {
        fg(state, Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Search;
    let query = &state.blog.view_state().search_query;
    let text = if query.is_empty() && !focused {
        Span::styled("Search posts...", fg(state, Color::DarkGray))
    } else if focused {
        Span::raw(format!("{}_", query))
    } else {
        Span::raw(query.clone())
    };

    let search = Paragraph::new(Line::from(text)).block(
        Block::default()
            .title(" Search (/) ")
            .borders(Borders::ALL)
            .border_style(focused_border(state, focused)),
    );
    frame.render_widget(search, area);
}

fn render_category_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let active = state.blog.view_state().filter.label().to_string();
    let spans: Vec<Span> = state
        .blog
        .categories()
        .into_iter()
        .flat_map(|label| {
            let style = if label == active {
                fg(state, Color::Blue).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            [Span::styled(format!(" {} ", label), style), Span::raw(" ")]
        })
        .collect();

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Filter (Tab) ").borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn card_lines<'a>(state: &AppState, post: &'a Post, highlighted: bool) -> Vec<Line<'a>> {
    let title_style = if highlighted {
        fg(state, Color::Yellow).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from(Span::styled(post.title.as_str(), title_style)),
        Line::from(vec![
            Span::styled(post.date.as_str(), fg(state, Color::Gray)),
            Span::raw(" • "),
            Span::styled(post.category.as_str(), fg(state, Color::Blue)),
        ]),
        Line::from(post.excerpt.as_str()),
    ];
    if post.image.is_some() {
        lines.push(Line::from(Span::styled("[image]", fg(state, Color::DarkGray))));
    }
    lines.push(Line::from(""));
    lines
}

fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    let page = state.blog.page();
    let block = Block::default()
        .title(format!(" Posts ({}) ", page.filtered_count))
        .borders(Borders::ALL)
        .border_style(focused_border(state, state.pane == ListPane::Posts));

    let lines: Vec<Line> = if page.posts.is_empty() {
        vec![Line::from(Span::styled(
            "No posts match your search.",
            fg(state, Color::Gray),
        ))]
    } else {
        page.posts
            .iter()
            .enumerate()
            .flat_map(|(i, post)| {
                let highlighted = state.pane == ListPane::Posts && i == state.cursor;
                card_lines(state, post, highlighted)
            })
            .collect()
    };

    let cards = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(cards, area);
}

fn render_pagination(frame: &mut Frame, area: Rect, state: &AppState) {
    let page = state.blog.page();

    let mut spans = vec![Span::styled(
        "« Prev ",
        if page.has_prev { Style::default() } else { fg(state, Color::DarkGray) },
    )];
    for n in 1..=page.total_pages {
        let style = if n == page.current_page {
            fg(state, Color::Blue).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {} ", n), style));
    }
    spans.push(Span::styled(
        " Next »",
        if page.has_next { Style::default() } else { fg(state, Color::DarkGray) },
    ));

    let bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let categories = state.blog.categories();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),                              // Popular
            Constraint::Length(categories.len() as u16 + 2), // Categories
            Constraint::Length(6), // Newsletter
        ])
        .split(area);

    let popular: Vec<Line> = state
        .blog
        .popular()
        .iter()
        .enumerate()
        .flat_map(|(i, post)| {
            let style = if state.pane == ListPane::Popular && i == state.cursor {
                fg(state, Color::Yellow).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            [
                Line::from(Span::styled(post.title.as_str(), style)),
                Line::from(Span::styled(post.date.as_str(), fg(state, Color::Gray))),
            ]
        })
        .collect();

    let popular = Paragraph::new(popular)
        .block(
            Block::default()
                .title(" Popular Posts (p) ")
                .borders(Borders::ALL)
                .border_style(focused_border(state, state.pane == ListPane::Popular)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(popular, rows[0]);

    let active = state.blog.view_state().filter.label().to_string();
    let categories: Vec<Line> = categories
        .into_iter()
        .map(|label| {
            let style = if label == active {
                fg(state, Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("• {}", label), style))
        })
        .collect();
    let categories = Paragraph::new(categories)
        .block(Block::default().title(" Categories (Tab) ").borders(Borders::ALL));
    frame.render_widget(categories, rows[1]);

    let focused = state.focus == Focus::Newsletter;
    let email = if focused {
        Span::raw(format!("{}_", state.newsletter_email))
    } else if state.newsletter_email.is_empty() {
        Span::styled("Your email", fg(state, Color::DarkGray))
    } else {
        Span::raw(state.newsletter_email.as_str())
    };
    let newsletter = Paragraph::new(vec![
        Line::from("Get the latest posts in your inbox."),
        Line::from(""),
        Line::from(email),
        Line::from(Span::styled("Enter: Subscribe", fg(state, Color::Gray))),
    ])
    .block(
        Block::default()
            .title(" Newsletter (n) ")
            .borders(Borders::ALL)
            .border_style(focused_border(state, focused)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(newsletter, rows[2]);
}
