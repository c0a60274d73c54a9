//! Command line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::model::{EntityKind, ResponsePolicy, Screen};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Parser, Debug)]
#[command(name = "pitchside", about = "Browse and search football players, leagues and clubs")]
pub struct Cli {
    /// Base URL of the data provider
    #[arg(long, env = "PITCHSIDE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "PITCHSIDE_TIMEOUT", default_value_t = 30)]
    pub timeout_secs: u64,

    /// How overlapping searches in the add modal are resolved
    #[arg(long, value_enum, default_value_t = ResponsePolicy::LatestIssued)]
    pub race_policy: ResponsePolicy,

    /// Screen shown on startup
    #[arg(long, value_enum, default_value_t = Screen::Players)]
    pub start: Screen,

    /// Directory for the rolling log files
    #[arg(long, env = "PITCHSIDE_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a full collection, optionally filtered locally
    List(ListArgs),
    /// Run one remote search and print the results
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// Local diacritic-insensitive filter (matches name, position, country...)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// Search term sent to the provider
    pub term: String,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
