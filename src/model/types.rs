//! Core type definitions for the application

use std::fmt;
use std::time::Instant;

use clap::ValueEnum;

use super::entities::League;

/// The closed set of entity kinds served by the data provider
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum EntityKind {
    Player,
    League,
    Club,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::League => "League",
            EntityKind::Club => "Club",
        }
    }

    /// Path segment of the collection endpoint
    pub fn collection_path(self) -> &'static str {
        match self {
            EntityKind::Player => "players",
            EntityKind::League => "leagues",
            EntityKind::Club => "clubs",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-level screens reachable with Tab / Shift+Tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Players,
    Leagues,
    Clubs,
    Admin,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Players, Screen::Leagues, Screen::Clubs, Screen::Admin];

    pub fn next(self) -> Self {
        match self {
            Screen::Players => Screen::Leagues,
            Screen::Leagues => Screen::Clubs,
            Screen::Clubs => Screen::Admin,
            Screen::Admin => Screen::Players,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Players => Screen::Admin,
            Screen::Leagues => Screen::Players,
            Screen::Clubs => Screen::Leagues,
            Screen::Admin => Screen::Clubs,
        }
    }

    /// The listing kind behind this screen, if it is a listing
    pub fn list_kind(self) -> Option<EntityKind> {
        match self {
            Screen::Players => Some(EntityKind::Player),
            Screen::Leagues => Some(EntityKind::League),
            Screen::Clubs => Some(EntityKind::Club),
            Screen::Admin => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Players => "Players",
            Screen::Leagues => "Leagues",
            Screen::Clubs => "Clubs",
            Screen::Admin => "Admin",
        }
    }
}

/// A view pushed on top of a screen by row activation
#[derive(Clone, Debug)]
pub enum Route {
    LeagueDetail(League),
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub screen: Screen,
    pub navigation_stack: Vec<Route>,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    pub status_message: Option<String>,
    pub show_help_popup: bool,
}

impl UiState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            navigation_stack: Vec::new(),
            error_message: None,
            error_timestamp: None,
            status_message: None,
            show_help_popup: false,
        }
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.navigation_stack.last()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Screen::Players)
    }
}
