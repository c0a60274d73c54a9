//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

use crate::model::Column;

/// Spaces between table columns
const COLUMN_GAP: usize = 2;

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Split `content_width` between columns by weight.
/// The last column absorbs the rounding remainder.
pub fn column_widths(columns: &[Column], content_width: usize) -> Vec<usize> {
    if columns.is_empty() {
        return Vec::new();
    }
    let gaps = COLUMN_GAP * (columns.len() - 1);
    let available = content_width.saturating_sub(1 + gaps);
    let total_weight: usize = columns.iter().map(|c| c.weight as usize).sum::<usize>().max(1);

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|c| available * c.weight as usize / total_weight)
        .collect();
    let used: usize = widths.iter().sum();
    if let Some(last) = widths.last_mut() {
        *last += available - used;
    }
    widths
}

/// One table line: a leading space, then each cell padded or cut to its width
pub fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let gap = " ".repeat(COLUMN_GAP);
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| truncate_string(cell.as_ref(), *width))
        .collect();
    format!(" {}", cells.join(&gap))
}

pub fn header_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn row_style(is_selected: bool, is_focused: bool) -> Style {
    if is_selected && is_focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// `percent` of `len`, computed wide so large terminals cannot overflow
pub fn percent_of(len: u16, percent: u16) -> u16 {
    (u32::from(len) * u32::from(percent) / 100) as u16
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [Column; 3] = [
        Column { header: "a", weight: 1 },
        Column { header: "b", weight: 2 },
        Column { header: "c", weight: 1 },
    ];

    #[test]
    fn widths_fill_the_available_space() {
        let widths = column_widths(&COLUMNS, 45);
        assert_eq!(widths.iter().sum::<usize>(), 45 - 1 - 4);
        assert_eq!(widths[0], 10);
        assert_eq!(widths[1], 20);
        assert_eq!(widths[2], 10);
    }

    #[test]
    fn narrow_terminals_do_not_underflow() {
        let widths = column_widths(&COLUMNS, 3);
        assert_eq!(widths, vec![0, 0, 0]);
    }

    #[test]
    fn rows_are_padded_and_truncated() {
        let row = format_row(&["Kylian Mbappé", "FW"], &[8, 3]);
        assert_eq!(row, " Kylia...  FW ");
    }

    #[test]
    fn percentages_of_huge_dimensions() {
        assert_eq!(percent_of(u16::MAX, 90), 58_981);
        assert_eq!(percent_of(80, 90), 72);
        assert_eq!(percent_of(24, 80), 19);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered_rect(area, 100, 4);
        assert_eq!(popup.width, 36);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.y, 3);
    }
}
