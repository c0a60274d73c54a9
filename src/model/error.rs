use thiserror::Error;

/// A collection load or remote search that could not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchFailure {
    /// Short text for the status line
    pub fn summary(&self) -> String {
        match self {
            FetchFailure::Transport(_) => "Data provider unreachable".to_string(),
            FetchFailure::Status { status, .. } => format!("Data provider error ({})", status),
            FetchFailure::Decode(_) => "Unreadable response from data provider".to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchFailure {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            FetchFailure::Decode(error.to_string())
        } else {
            FetchFailure::Transport(error.to_string())
        }
    }
}
