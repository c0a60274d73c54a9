//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (column layout, scrollable lists, popups)
//! - `layout`: Main layout structure (tab bar, filter box, status line)
//! - `lists`: Listing screens
//! - `detail`: League detail page
//! - `admin`: Admin screen
//! - `overlays`: Modal overlays (error, search & add, detail cards, help)

mod utils;
mod layout;
mod lists;
mod detail;
mod admin;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppSnapshot, Route, Screen};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &AppSnapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Screen tabs
                Constraint::Min(0),    // Active screen
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_tab_bar(frame, chunks[0], snapshot.ui.screen);

        match (snapshot.ui.screen, snapshot.ui.current_route()) {
            (_, Some(Route::LeagueDetail(league))) => {
                detail::render_league_detail(frame, chunks[1], league, &snapshot.clubs);
            }
            (Screen::Players, None) => lists::render_list_screen(frame, chunks[1], &snapshot.players),
            (Screen::Leagues, None) => lists::render_list_screen(frame, chunks[1], &snapshot.leagues),
            (Screen::Clubs, None) => lists::render_list_screen(frame, chunks[1], &snapshot.clubs),
            (Screen::Admin, None) => admin::render_admin(frame, chunks[1]),
        }

        layout::render_status_line(frame, chunks[2], snapshot);

        // Detail cards over the listing they were opened from
        match snapshot.ui.screen {
            Screen::Players => {
                if let Some(player) = snapshot.players.detail() {
                    overlays::render_player_card(frame, player);
                }
            }
            Screen::Clubs => {
                if let Some(club) = snapshot.clubs.detail() {
                    overlays::render_club_card(frame, club);
                }
            }
            _ => {}
        }

        overlays::render_search_modal(frame, &snapshot.search);

        if snapshot.ui.error_message.is_some() {
            overlays::render_error_notification(frame, &snapshot.ui);
        }

        if snapshot.ui.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
