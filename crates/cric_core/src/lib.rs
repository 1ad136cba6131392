//! # cric_core - Cricket Scorekeeping Core
//!
//! Ball-by-ball match scoring, career statistics and flat JSON record stores
//! for a single-user cricket manager.
//!
//! ## Features
//! - Typed ball outcomes (runs, wicket, wide, no ball, bye, leg bye)
//! - Over/ball bookkeeping with strike rotation
//! - Career stat aggregation on match completion
//! - Leaderboard, match history rendering and CSV export

pub mod config;
pub mod error;
pub mod export;
pub mod leaderboard;
pub mod models;
pub mod report;
pub mod scoring;
pub mod state;
pub mod store;

pub use config::StorageConfig;
pub use error::{CoreError, Result, StoreError};
pub use leaderboard::leaderboard;
pub use models::{
    BallEvent, BallOutcome, CompletedMatch, Contribution, ExtraKind, Extras, MatchOutcome,
    MatchStatus, Player, PlayerRole, PlayerTally, Scorecard, Side, Team,
};
pub use scoring::{credit_players, BallInput, BALLS_PER_OVER};
pub use state::AppState;
pub use store::StoreManager;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
