//! Session state
//!
//! `AppState` holds the rosters, match history and the match being scored,
//! and persists each transition through its [`StoreManager`]. Every
//! operation takes the state explicitly; there is no global session.

use crate::config::StorageConfig;
use crate::error::{CoreError, Result};
use crate::export;
use crate::leaderboard::leaderboard;
use crate::models::{BallOutcome, CompletedMatch, Player, PlayerRole, Scorecard, Team};
use crate::scoring::{credit_players, BallInput};
use crate::store::StoreManager;
use chrono::Utc;
use std::io;

#[derive(Debug, Clone)]
pub struct AppState {
    store: StoreManager,

    /// Registered players, in registration order
    pub players: Vec<Player>,

    pub teams: Vec<Team>,

    /// Completed matches, oldest first
    pub matches: Vec<CompletedMatch>,

    /// Match being scored, if any
    pub current_match: Option<Scorecard>,
}

impl AppState {
    /// Loads every store from the configured data directory.
    pub fn load(config: StorageConfig) -> Result<Self> {
        let store = StoreManager::new(config);
        let state = Self {
            players: store.load_players()?,
            teams: store.load_teams()?,
            matches: store.load_matches()?,
            current_match: store.load_active_match()?,
            store,
        };

        log::debug!(
            "Session loaded: {} players, {} teams, {} matches, active match: {}",
            state.players.len(),
            state.teams.len(),
            state.matches.len(),
            state.current_match.is_some()
        );
        Ok(state)
    }

    // ========================
    // Player Management
    // ========================

    /// Registers a player with zeroed stats. Duplicate names are accepted.
    pub fn add_player(&mut self, name: &str, age: u8, role: PlayerRole) -> Result<&Player> {
        self.players.push(Player::new(name, age, role));
        self.store.save_players(&self.players)?;

        log::info!("Added player {}", name);
        Ok(&self.players[self.players.len() - 1])
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    // ========================
    // Team Management
    // ========================

    /// Creates a team from registered player names.
    pub fn create_team(&mut self, name: &str, members: Vec<String>) -> Result<&Team> {
        if let Some(unknown) = members.iter().find(|m| self.get_player(m).is_none()) {
            return Err(CoreError::UnknownPlayer(unknown.clone()));
        }

        self.teams.push(Team::new(name, members));
        self.store.save_teams(&self.teams)?;

        log::info!("Team {} created", name);
        Ok(&self.teams[self.teams.len() - 1])
    }

    pub fn get_team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    // ========================
    // Match Scoring
    // ========================

    pub fn active_match(&self) -> Option<&Scorecard> {
        self.current_match.as_ref()
    }

    /// Starts a match between two registered teams, replacing any match in
    /// progress.
    pub fn start_match(
        &mut self,
        team1: &str,
        team2: &str,
        overs: u32,
        openers: Option<(String, String)>,
    ) -> Result<&Scorecard> {
        for team in [team1, team2] {
            if self.get_team(team).is_none() {
                return Err(CoreError::UnknownTeam(team.to_string()));
            }
        }
        if team1 == team2 {
            return Err(CoreError::SameTeam(team1.to_string()));
        }

        if let Some(previous) = &self.current_match {
            log::warn!(
                "Discarding unfinished match {} vs {} ({} balls)",
                previous.team1,
                previous.team2,
                previous.balls_bowled()
            );
        }

        let scorecard = match openers {
            Some((striker, non_striker)) => {
                Scorecard::with_openers(team1, team2, overs, striker, non_striker)
            }
            None => Scorecard::new(team1, team2, overs),
        };
        self.store.save_active_match(&scorecard)?;

        log::info!("Match started: {} vs {} ({} overs)", team1, team2, overs);
        Ok(&*self.current_match.insert(scorecard))
    }

    pub fn set_batters(&mut self, striker: &str, non_striker: &str) -> Result<&Scorecard> {
        let scorecard = self.current_match.as_mut().ok_or(CoreError::NoActiveMatch)?;
        scorecard.set_batters(striker, non_striker);
        self.store.save_active_match(scorecard)?;
        Ok(&*scorecard)
    }

    /// Records one ball for `batting_team`. Without an explicit batter the
    /// current striker faces the ball.
    pub fn record_ball(
        &mut self,
        batting_team: &str,
        batter: Option<&str>,
        bowler: &str,
        outcome: BallOutcome,
        wicket: bool,
    ) -> Result<&Scorecard> {
        let scorecard = self.current_match.as_mut().ok_or(CoreError::NoActiveMatch)?;

        let batting = scorecard.side_of(batting_team).ok_or_else(|| CoreError::TeamNotInMatch {
            team: batting_team.to_string(),
            team1: scorecard.team1.clone(),
            team2: scorecard.team2.clone(),
        })?;
        let batter = match batter {
            Some(name) => name.to_string(),
            None => scorecard.striker.clone().ok_or(CoreError::MissingBatter)?,
        };

        let mut ball = BallInput::new(batting, batter, bowler, outcome);
        ball.wicket = wicket;
        scorecard.record_ball(ball);
        self.store.save_active_match(scorecard)?;

        Ok(&*scorecard)
    }

    /// Completes the active match, credits career stats and appends the
    /// record to history.
    pub fn submit_match(&mut self) -> Result<&CompletedMatch> {
        let scorecard = self.current_match.take().ok_or(CoreError::NoActiveMatch)?;
        let record = scorecard.complete(Utc::now());

        let credited = credit_players(&mut self.players, &record);
        log::info!(
            "Match completed: {} {} - {} {} ({}), {} players credited",
            record.scorecard.team1,
            record.team1_score,
            record.team2_score,
            record.scorecard.team2,
            record.outcome(),
            credited
        );

        self.matches.push(record);
        // history first, then drop the active match; a failed players save
        // must not leave a match that can be submitted and credited again
        self.store.save_matches(&self.matches)?;
        self.store.clear_active_match()?;
        self.store.save_players(&self.players)?;

        Ok(&self.matches[self.matches.len() - 1])
    }

    // ========================
    // Stats
    // ========================

    pub fn leaderboard(&self) -> Vec<&Player> {
        leaderboard(&self.players)
    }

    pub fn export_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        export::write_players_csv(&self.players, writer)?;
        Ok(())
    }
}
