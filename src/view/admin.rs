//! Admin screen: one section per entity kind, each opening the search modal

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::EntityKind;

pub fn render_admin(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let sections = [EntityKind::League, EntityKind::Club, EntityKind::Player];
    for (kind, chunk) in sections.into_iter().zip(chunks.iter()) {
        render_section(frame, *chunk, kind);
    }
}

fn render_section(frame: &mut Frame, area: Rect, kind: EntityKind) {
    let key = kind.label().chars().next().unwrap_or('?').to_ascii_uppercase();
    let lines = vec![
        Line::from(Span::styled(
            format!("Add {}s from the remote catalogue", kind.label().to_lowercase()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" Search & add a {}", kind.label())),
        ]),
    ];

    let section = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}s ", kind.label()))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(section, area);
}
