//! Post detail screen: the article, its author and related posts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::fg;
use crate::app::AppState;
use libbizblog::markup;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(post) = state.blog.selected_post() else {
        let missing = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("This post is no longer available.", fg(state, Color::Yellow))),
            Line::from(""),
            Line::from("Press Esc to go back"),
        ])
        .block(Block::default().title(" Post ").borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Article
            Constraint::Length(6), // Author
            Constraint::Length(7), // Related
        ])
        .split(area);

    let mut article = vec![
        Line::from(Span::styled(
            post.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(post.date.as_str(), fg(state, Color::Gray)),
            Span::raw(" • "),
            Span::styled(post.category.as_str(), fg(state, Color::Blue)),
        ]),
        Line::from(""),
    ];
    if let Some(ref image) = post.image {
        article.push(Line::from(Span::styled(
            format!("[image: {}]", image),
            fg(state, Color::DarkGray),
        )));
        article.push(Line::from(""));
    }
    for paragraph in markup::to_plain_text(&post.content) {
        article.push(Line::from(paragraph));
        article.push(Line::from(""));
    }

    let article = Paragraph::new(article)
        .block(
            Block::default()
                .title(" ← Back to Blog (Esc) ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(article, rows[0]);

    render_author(frame, rows[1], state);
    render_related(frame, rows[2], state);
}

fn render_author(frame: &mut Frame, area: Rect, state: &AppState) {
    let author = state.blog.author();
    let socials: Vec<Span> = author
        .socials
        .iter()
        .flat_map(|(network, url)| {
            [
                Span::styled(format!("{}: ", network), fg(state, Color::Blue)),
                Span::raw(format!("{}  ", url)),
            ]
        })
        .collect();

    let bio = Paragraph::new(vec![
        Line::from(Span::styled(
            author.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(author.bio.as_str()),
        Line::from(socials),
    ])
    .block(Block::default().title(" About the Author ").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(bio, area);
}

fn render_related(frame: &mut Frame, area: Rect, state: &AppState) {
    let related = state.blog.related();

    let lines: Vec<Line> = if related.is_empty() {
        vec![Line::from(Span::styled(
            "No related posts yet. Check back soon!",
            fg(state, Color::Gray),
        ))]
    } else {
        related
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let style = if i == state.cursor {
                    fg(state, Color::Yellow).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(post.title.clone(), style),
                    Span::raw(" • "),
                    Span::styled(post.date.clone(), fg(state, Color::Gray)),
                ])
            })
            .collect()
    };

    let related = Paragraph::new(lines)
        .block(Block::default().title(" Related Posts ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(related, area);
}
