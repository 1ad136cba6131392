use super::ball::{BallEvent, Extras};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a match record. "Not started" is simply no active match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scoring,
    Completed,
}

/// Which of the two teams in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

/// A player's contribution within one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "runs", rename_all = "snake_case")]
pub enum Contribution {
    Active(u32),
    Dismissed,
}

impl Default for Contribution {
    fn default() -> Self {
        Contribution::Active(0)
    }
}

impl Contribution {
    /// Numeric value used for stat aggregation; a dismissal counts as 0.
    pub fn runs(&self) -> u32 {
        match self {
            Contribution::Active(runs) => *runs,
            Contribution::Dismissed => 0,
        }
    }

    pub fn is_dismissed(&self) -> bool {
        matches!(self, Contribution::Dismissed)
    }

    /// Adds runs while active. A dismissed entry stays dismissed.
    pub fn add_runs(&mut self, runs: u32) {
        if let Contribution::Active(total) = self {
            *total += runs;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub name: String,
    pub contribution: Contribution,
}

/// Per-team map from player name to contribution, kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerTally(Vec<TallyEntry>);

impl PlayerTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for `name`, created as `Active(0)` on first appearance.
    pub fn entry(&mut self, name: &str) -> &mut Contribution {
        let idx = match self.0.iter().position(|e| e.name == name) {
            Some(idx) => idx,
            None => {
                self.0.push(TallyEntry { name: name.to_string(), contribution: Contribution::default() });
                self.0.len() - 1
            }
        };
        &mut self.0[idx].contribution
    }

    pub fn get(&self, name: &str) -> Option<&Contribution> {
        self.0.iter().find(|e| e.name == name).map(|e| &e.contribution)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TallyEntry> {
        self.0.iter()
    }
}

/// An in-progress match. Lives only while `status` is `Scoring`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub team1: String,
    pub team2: String,
    pub overs: u32,
    pub team1_balls: Vec<BallEvent>,
    pub team2_balls: Vec<BallEvent>,
    pub team1_players: PlayerTally,
    pub team2_players: PlayerTally,
    pub extras: Extras,
    pub status: MatchStatus,
    pub current_over: u32,
    pub balls_in_over: u8,
    pub striker: Option<String>,
    pub non_striker: Option<String>,
    pub current_bowler: Option<String>,
}

impl Scorecard {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>, overs: u32) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            overs,
            team1_balls: Vec::new(),
            team2_balls: Vec::new(),
            team1_players: PlayerTally::new(),
            team2_players: PlayerTally::new(),
            extras: Extras::default(),
            status: MatchStatus::Scoring,
            current_over: 0,
            balls_in_over: 0,
            striker: None,
            non_striker: None,
            current_bowler: None,
        }
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    /// Resolves a team name to its side. Team 1 wins if both names are equal.
    pub fn side_of(&self, team: &str) -> Option<Side> {
        if team == self.team1 {
            Some(Side::Team1)
        } else if team == self.team2 {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn balls(&self, side: Side) -> &[BallEvent] {
        match side {
            Side::Team1 => &self.team1_balls,
            Side::Team2 => &self.team2_balls,
        }
    }

    pub(crate) fn balls_mut(&mut self, side: Side) -> &mut Vec<BallEvent> {
        match side {
            Side::Team1 => &mut self.team1_balls,
            Side::Team2 => &mut self.team2_balls,
        }
    }

    pub fn tally(&self, side: Side) -> &PlayerTally {
        match side {
            Side::Team1 => &self.team1_players,
            Side::Team2 => &self.team2_players,
        }
    }

    pub(crate) fn tally_mut(&mut self, side: Side) -> &mut PlayerTally {
        match side {
            Side::Team1 => &mut self.team1_players,
            Side::Team2 => &mut self.team2_players,
        }
    }

    /// Sum of the non-negative run values in a team's ball log.
    pub fn team_score(&self, side: Side) -> u32 {
        self.balls(side).iter().map(BallEvent::scoring_runs).sum()
    }

    /// Total deliveries recorded for both teams.
    pub fn balls_bowled(&self) -> usize {
        self.team1_balls.len() + self.team2_balls.len()
    }
}

/// Final result of a completed match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Winner(String),
    Draw,
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchOutcome::Winner(team) => write!(f, "{} won", team),
            MatchOutcome::Draw => f.write_str("Draw"),
        }
    }
}

/// A finished match as stored in `matches.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedMatch {
    #[serde(flatten)]
    pub scorecard: Scorecard,
    pub team1_score: u32,
    pub team2_score: u32,
    pub completed_at: DateTime<Utc>,
}

impl CompletedMatch {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team1_score,
            Side::Team2 => self.team2_score,
        }
    }

    /// Strictly higher score wins; equal scores are a draw.
    pub fn outcome(&self) -> MatchOutcome {
        use std::cmp::Ordering;

        match self.team1_score.cmp(&self.team2_score) {
            Ordering::Greater => MatchOutcome::Winner(self.scorecard.team1.clone()),
            Ordering::Less => MatchOutcome::Winner(self.scorecard.team2.clone()),
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BallOutcome;

    fn completed(team1_score: u32, team2_score: u32) -> CompletedMatch {
        let mut scorecard = Scorecard::new("team1", "team2", 20);
        scorecard.status = MatchStatus::Completed;
        CompletedMatch { scorecard, team1_score, team2_score, completed_at: Utc::now() }
    }

    #[test]
    fn test_outcome_winner_and_draw() {
        assert_eq!(completed(120, 95).outcome().to_string(), "team1 won");
        assert_eq!(completed(80, 81).outcome().to_string(), "team2 won");
        assert_eq!(completed(100, 100).outcome(), MatchOutcome::Draw);
        assert_eq!(completed(100, 100).outcome().to_string(), "Draw");
    }

    #[test]
    fn test_contribution_json_is_tagged() {
        let active = serde_json::to_value(Contribution::Active(12)).unwrap();
        let out = serde_json::to_value(Contribution::Dismissed).unwrap();

        assert_eq!(active, serde_json::json!({ "status": "active", "runs": 12 }));
        assert_eq!(out, serde_json::json!({ "status": "dismissed" }));

        let back: Contribution = serde_json::from_value(out).unwrap();
        assert!(back.is_dismissed());
        assert_eq!(back.runs(), 0);
    }

    #[test]
    fn test_dismissed_ignores_runs() {
        let mut c = Contribution::Dismissed;
        c.add_runs(4);
        assert_eq!(c, Contribution::Dismissed);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let mut tally = PlayerTally::new();
        tally.entry("Cara").add_runs(3);
        tally.entry("Asha");
        tally.entry("Cara").add_runs(1);

        let names: Vec<&str> = tally.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cara", "Asha"]);
        assert_eq!(tally.get("Cara"), Some(&Contribution::Active(4)));
        assert_eq!(tally.get("Asha"), Some(&Contribution::Active(0)));
        assert!(!tally.contains("Ben"));
    }

    #[test]
    fn test_completed_match_record_is_flat() {
        let mut record = completed(7, 3);
        record.scorecard.team1_balls.push(BallEvent::new("A", "B", BallOutcome::Four, false));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["team1"], "team1");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["team1_score"], 7);
        assert_eq!(json["team1_balls"][0]["ball_type"], "4");

        let back: CompletedMatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
