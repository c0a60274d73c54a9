//! League detail page, reached by activating a league row

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Club, League, ListView, Presentable, format_eur, format_grouped, normalize, number_text};
use super::lists::table_items;
use super::utils::render_scrollable_list;

pub fn render_league_detail(frame: &mut Frame, area: Rect, league: &League, clubs: &ListView<Club>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Header
            Constraint::Min(0),    // Clubs of the league
        ])
        .split(area);

    let name = league.name.as_deref().unwrap_or("(unnamed)");
    let location = [league.country.as_deref(), league.continent.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ");

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("🏆 {}", name), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", location), label),
        ]),
        Line::from(vec![
            Span::styled("Average market value: ", label),
            Span::raw(format_eur(league.avg_market_value.unwrap_or(0.0))),
            Span::styled("   Average stadium seats: ", label),
            Span::raw(format_grouped(league.avg_stadium_seats.unwrap_or(0.0))),
        ]),
        Line::from(vec![
            Span::styled("Clubs: ", label),
            Span::raw(league.total_clubs.map(number_text).unwrap_or_else(|| "-".to_string())),
            Span::styled("   Players: ", label),
            Span::raw(league.total_players.map(number_text).unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(Span::styled("Backspace / Esc: Go back", label)),
    ];
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(header, chunks[0]);

    let members = league_clubs(league, clubs.collection());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Clubs in {} ({}) ", name, members.len()))
        .padding(Padding::horizontal(1));

    if members.is_empty() {
        let text = if clubs.collection().is_empty() {
            "Open the Clubs screen to load clubs"
        } else {
            "No known clubs in this league"
        };
        let empty = Paragraph::new(text).style(Style::default().fg(Color::DarkGray)).block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let items = table_items(Club::columns(), members.iter().map(|c| c.cells()), usize::MAX, false, content_width);
    render_scrollable_list(frame, chunks[1], items, 0, block);
}

/// Loaded clubs whose league name matches, ignoring case and accents
fn league_clubs<'a>(league: &League, clubs: &'a [Club]) -> Vec<&'a Club> {
    let Some(name) = league.name.as_deref().map(normalize) else {
        return Vec::new();
    };
    clubs
        .iter()
        .filter(|club| club.league.as_deref().map(normalize).as_deref() == Some(name.as_str()))
        .collect()
}
