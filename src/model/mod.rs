//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (entity kinds, screens, UI state)
//! - `entities`: Player / League / Club records and kind-tagged result sets
//! - `error`: Fetch failure taxonomy
//! - `normalize`: Diacritic and case insensitive canonical text
//! - `matcher`: Record matching over per-kind searchable fields
//! - `presenter`: Per-kind column schemas and add actions
//! - `list_view`: Fetch-once listing state with local filtering
//! - `search_session`: The "search & add" modal state machine
//! - `provider`: Data provider trait, HTTP implementation and add hook
//! - `app_model`: Main application model with state management methods

mod types;
mod entities;
mod error;
mod normalize;
mod matcher;
mod presenter;
mod list_view;
mod search_session;
mod provider;
mod app_model;

pub use types::{EntityKind, Route, Screen, UiState};

pub use entities::{Club, League, Player, Record, ResultSet};

pub use error::FetchFailure;

pub use normalize::normalize;

pub use matcher::{Searchable, filter};

pub use presenter::{
    AddRequest, Column, Presentable, PresentedTable,
    format_eur, format_grouped, number_text, present, present_records, to_tsv,
};

pub use list_view::{ListView, LoadState};

pub use search_session::{ApplyOutcome, ResponsePolicy, SearchCompletion, SearchSession};

pub use provider::{AddHook, DataProvider, HttpProvider, LoggingAddHook};

pub use app_model::{AppModel, AppSnapshot};
