//! Listing screens: filter box plus the filtered table

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{Column, ListView, LoadState, Presentable, Searchable};
use super::layout::render_filter_box;
use super::utils::{column_widths, format_row, header_style, render_scrollable_list, row_style};

pub fn render_list_screen<R: Presentable + Searchable>(
    frame: &mut Frame,
    area: Rect,
    view: &ListView<R>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input
            Constraint::Min(0),    // Table
        ])
        .split(area);

    let plural = format!("{}s", R::KIND.label().to_lowercase());
    render_filter_box(frame, chunks[0], view.query(), &plural);

    let displayed = view.displayed();
    let title = if view.load_state() == LoadState::Loaded {
        format!(" {}s ({} of {}) ", R::KIND.label(), displayed.len(), view.collection().len())
    } else {
        format!(" {}s ", R::KIND.label())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1));

    // Placeholder text replaces the table when there is nothing to show
    let placeholder = match view.load_state() {
        LoadState::NotLoaded | LoadState::Loading => {
            Some(("Loading...".to_string(), Color::Yellow))
        }
        LoadState::Loaded => match view.failure() {
            Some(failure) => Some((
                format!("Could not load {}: {}", plural, failure.summary()),
                Color::Red,
            )),
            None if view.collection().is_empty() => {
                Some((format!("No {} available", plural), Color::DarkGray))
            }
            None if displayed.is_empty() => Some((
                format!("No matches for \"{}\" (Esc clears the filter)", view.query()),
                Color::DarkGray,
            )),
            None => None,
        },
    };
    if let Some((text, color)) = placeholder {
        let paragraph = Paragraph::new(text).style(Style::default().fg(color)).block(block);
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(4) as usize;
    let items = table_items(R::columns(), displayed.iter().map(|r| r.cells()), view.selected(), true, content_width);
    render_scrollable_list(frame, chunks[1], items, view.selected() + 1, block);
}

/// Header line followed by one line per row
pub fn table_items<I>(
    columns: &[Column],
    rows: I,
    selected: usize,
    is_focused: bool,
    content_width: usize,
) -> Vec<ListItem<'static>>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let widths = column_widths(columns, content_width);
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let mut items = vec![ListItem::new(format_row(headers.as_slice(), &widths)).style(header_style())];

    items.extend(rows.into_iter().enumerate().map(|(i, cells)| {
        ListItem::new(format_row(cells.as_slice(), &widths)).style(row_style(i == selected, is_focused))
    }));
    items
}
