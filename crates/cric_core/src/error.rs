use thiserror::Error;

/// Persistence failures for the JSON stores, config files and CSV export.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupted store {path}: {source}")]
    Corrupted {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid storage config: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Io(_) => true,
            StoreError::Csv(_) => true,
            StoreError::Corrupted { .. } => false,
            StoreError::Json(_) => false,
            StoreError::InvalidConfig(_) => false,
        }
    }
}

/// Failures surfaced by session transitions.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("No match in progress")]
    NoActiveMatch,

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Team 1 and team 2 must differ (both are {0})")]
    SameTeam(String),

    #[error("{team} is not playing in {team1} vs {team2}")]
    TeamNotInMatch { team: String, team1: String, team2: String },

    #[error("Invalid ball outcome: {0} (expected 0, 1, 2, 3, 4, 6, W, Wide, No Ball, Bye or Leg Bye)")]
    InvalidOutcome(String),

    #[error("Invalid player role: {0} (expected Batsman, Bowler, All-rounder or Wicketkeeper)")]
    InvalidRole(String),

    #[error("No batter given and no striker set")]
    MissingBatter,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
