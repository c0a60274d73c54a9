//! Layout rendering (tab bar, filter box, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
    Frame,
};

use crate::model::{AppSnapshot, Screen};

pub fn render_tab_bar(frame: &mut Frame, area: Rect, screen: Screen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Screen tabs
            Constraint::Length(20), // Application name
        ])
        .split(area);

    let titles = Screen::ALL.iter().map(|s| format!(" {} ", s.title()));
    let selected = Screen::ALL.iter().position(|s| *s == screen).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Tab / Shift+Tab "),
        );
    frame.render_widget(tabs, chunks[0]);

    let name = Paragraph::new("⚽ pitchside")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(name, chunks[1]);
}

pub fn render_filter_box(frame: &mut Frame, area: Rect, query: &str, label: &str) {
    let (text, style) = if query.is_empty() {
        (
            format!("Type to filter {}...", label),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (query.to_string(), Style::default().fg(Color::Green))
    };

    let filter = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filter ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(filter, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot) {
    let mut spans = vec![Span::styled(
        " F1 help · Ctrl+Q quit ",
        Style::default().fg(Color::DarkGray),
    )];

    let loaded_at = match snapshot.ui.screen {
        Screen::Players => snapshot.players.loaded_at(),
        Screen::Leagues => snapshot.leagues.loaded_at(),
        Screen::Clubs => snapshot.clubs.loaded_at(),
        Screen::Admin => None,
    };
    if let Some(loaded_at) = loaded_at {
        spans.push(Span::styled(
            format!("│ loaded {} ", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(status) = &snapshot.ui.status_message {
        spans.push(Span::styled(
            format!("│ {}", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
