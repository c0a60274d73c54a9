//! Overlay rendering (error notification, search modal, detail cards, help popup)

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{
    Club, Player, ResultSet, SearchSession, UiState, format_eur, format_grouped, number_text, present,
};
use super::lists::table_items;
use super::utils::{centered_rect, percent_of, render_scrollable_list};

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        let error_line_count = ((error_msg.chars().count() as f32) / (inner_width as f32)).ceil() as u16;
        let popup_area = centered_rect(area, popup_width, 2 + error_line_count.max(1));

        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

/// The "search & add" modal. Renders nothing while the session is closed.
pub fn render_search_modal(frame: &mut Frame, session: &SearchSession) {
    let (Some(kind), Some(results)) = (session.kind(), session.results()) else {
        return;
    };
    let selected = session.open().map_or(0, |open| open.selected);
    let area = frame.area();
    let popup_area = centered_rect(area, percent_of(area.width, 90), percent_of(area.height, 80));
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Search & add a {} ", kind))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    let query = Paragraph::new(format!("{}▏", session.query_text()))
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Query ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(query, chunks[0]);

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", results.len()))
        .padding(Padding::horizontal(1));

    let placeholder = if session.is_loading() {
        Some(("Searching...".to_string(), Color::Yellow))
    } else if let Some(failure) = session.last_failure() {
        Some((format!("Search failed: {}", failure.summary()), Color::Red))
    } else if results.is_empty() {
        Some(("No results. Press Enter to search.".to_string(), Color::DarkGray))
    } else {
        None
    };

    match placeholder {
        Some((text, color)) => {
            let paragraph = Paragraph::new(text)
                .style(Style::default().fg(color))
                .block(results_block);
            frame.render_widget(paragraph, chunks[1]);
        }
        None => {
            let content_width = chunks[1].width.saturating_sub(4) as usize;
            let items = result_items(results, selected, content_width);
            render_scrollable_list(frame, chunks[1], items, selected + 1, results_block);
        }
    }

    let hints = Paragraph::new(" Enter: search · ↑/↓: select · Ctrl+A: add · Esc: close")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[2]);
}

fn result_items(results: &ResultSet, selected: usize, content_width: usize) -> Vec<ListItem<'static>> {
    let table = present(results);
    let rows = table.rows.into_iter().map(|row| row.cells);
    table_items(table.columns, rows, selected, true, content_width)
}

pub fn render_player_card(frame: &mut Frame, player: &Player) {
    let profile = [
        player.position.clone(),
        player.age.map(|age| format!("{} yo", number_text(age))),
        player.height.map(|height| format!("{} cm", number_text(height))),
        player.foot.as_ref().map(|foot| format!("foot: {}", foot)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    let mut facts = Vec::new();
    if let Some(nationality) = &player.nationality {
        facts.push(("Nationality", nationality.clone()));
    }
    if let Some(value) = player.market_value {
        facts.push(("Market value", format_eur(value)));
    }
    render_card(frame, player.name.as_deref(), "👤", &profile, facts);
}

pub fn render_club_card(frame: &mut Frame, club: &Club) {
    let location = [club.league.clone(), club.country.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    let mut facts = Vec::new();
    if let Some(stadium) = &club.stadium {
        let seats = club
            .stadium_seats
            .map(|s| format!(" ({} seats)", format_grouped(s)))
            .unwrap_or_default();
        facts.push(("Stadium", format!("{}{}", stadium, seats)));
    }
    if let Some(value) = club.market_value {
        facts.push(("Market value", format_eur(value)));
    }
    render_card(frame, club.name.as_deref(), "🏟", &location, facts);
}

fn render_card(
    frame: &mut Frame,
    name: Option<&str>,
    icon: &str,
    subtitle: &str,
    facts: Vec<(&str, String)>,
) {
    let popup_area = centered_rect(frame.area(), 56, facts.len() as u16 + 6);
    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", icon, name.unwrap_or("(unnamed)")),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray))),
        Line::from(""),
    ];
    lines.extend(facts.into_iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:>13}  ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Details (Esc to close) ")
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(card, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Next / previous screen"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open details"),
        ("Backspace / Esc", "Go back / close details"),
        ("", ""),
        ("", "── Lists ──"),
        ("Type", "Filter by name and more"),
        ("Backspace", "Delete last character"),
        ("Esc", "Clear filter"),
        ("", ""),
        ("", "── Admin ──"),
        ("P / L / C", "Search & add player, league, club"),
        ("Enter", "Run search"),
        ("Ctrl+A", "Add selected result"),
        ("Esc", "Close search"),
        ("", ""),
        ("", "── General ──"),
        ("F1", "Toggle this help"),
        ("Ctrl+Q / Ctrl+C", "Quit"),
    ];

    let popup_area = centered_rect(area, 62, keybindings.len() as u16 + 2);
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (F1 or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
