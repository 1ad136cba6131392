//! Ball-by-ball scoring transitions.
//!
//! A [`Scorecard`] moves through exactly two states: `Scoring` while balls are
//! recorded and `Completed` once [`Scorecard::complete`] folds it into a
//! [`CompletedMatch`]. [`credit_players`] then applies the match to career
//! totals.

use crate::models::{
    BallEvent, BallOutcome, CompletedMatch, Contribution, MatchStatus, Player, PlayerTally,
    Scorecard, Side,
};
use chrono::{DateTime, Utc};

pub const BALLS_PER_OVER: u8 = 6;

/// One scorer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallInput {
    pub batting: Side,
    pub batter: String,
    pub bowler: String,
    pub outcome: BallOutcome,
    pub wicket: bool,
}

impl BallInput {
    pub fn new(
        batting: Side,
        batter: impl Into<String>,
        bowler: impl Into<String>,
        outcome: BallOutcome,
    ) -> Self {
        Self { batting, batter: batter.into(), bowler: bowler.into(), outcome, wicket: false }
    }

    pub fn with_wicket(mut self) -> Self {
        self.wicket = true;
        self
    }
}

impl Scorecard {
    /// Fresh scorecard with an opening pair already at the crease.
    pub fn with_openers(
        team1: impl Into<String>,
        team2: impl Into<String>,
        overs: u32,
        striker: impl Into<String>,
        non_striker: impl Into<String>,
    ) -> Self {
        let mut scorecard = Scorecard::new(team1, team2, overs);
        scorecard.set_batters(striker, non_striker);
        scorecard
    }

    pub fn set_batters(&mut self, striker: impl Into<String>, non_striker: impl Into<String>) {
        self.striker = Some(striker.into());
        self.non_striker = Some(non_striker.into());
    }

    /// Applies one delivery.
    ///
    /// The striker's runs go to the batting side's tally; the bowler gets a
    /// zero entry in the fielding side's tally. A wicket replaces the
    /// striker's total with `Dismissed`. Strike changes on any non-zero run
    /// value without a wicket, extras and the `W` sentinel included.
    pub fn record_ball(&mut self, ball: BallInput) {
        let BallInput { batting, batter, bowler, outcome, wicket } = ball;
        let event = BallEvent::new(batter, bowler, outcome, wicket);
        let run = event.run;

        if let Some(kind) = outcome.extra() {
            self.extras.record(kind);
        }

        {
            let tally = self.tally_mut(batting);
            let striker = tally.entry(&event.batter);
            if run >= 0 {
                striker.add_runs(event.scoring_runs());
            }
            if wicket {
                *striker = Contribution::Dismissed;
            }
        }
        self.tally_mut(batting.opponent()).entry(&event.bowler);

        self.current_bowler = Some(event.bowler.clone());

        log::debug!(
            "{} ball {}.{}: {} to {} -> {}{}",
            self.team_name(batting),
            self.current_over,
            self.balls_in_over,
            event.bowler,
            event.batter,
            outcome,
            if wicket { " (wicket)" } else { "" }
        );

        self.balls_mut(batting).push(event);

        if run != 0 && !wicket {
            std::mem::swap(&mut self.striker, &mut self.non_striker);
        }

        self.balls_in_over += 1;
        if self.balls_in_over == BALLS_PER_OVER {
            self.balls_in_over = 0;
            self.current_over += 1;
        }
    }

    /// Closes the match and computes both team totals.
    pub fn complete(mut self, completed_at: DateTime<Utc>) -> CompletedMatch {
        let team1_score = self.team_score(Side::Team1);
        let team2_score = self.team_score(Side::Team2);
        self.status = MatchStatus::Completed;

        CompletedMatch { scorecard: self, team1_score, team2_score, completed_at }
    }
}

/// Wickets credited to a player from one match.
///
/// Each tally contributes its value for the player only when the player also
/// appears in the other tally.
fn wicket_credit(team1: &PlayerTally, team2: &PlayerTally, name: &str) -> u32 {
    let mut wickets = 0;
    if team2.contains(name) {
        wickets += team1.get(name).map_or(0, |c| c.runs());
    }
    if team1.contains(name) {
        wickets += team2.get(name).map_or(0, |c| c.runs());
    }
    wickets
}

/// Folds a completed match into career totals. Returns how many registered
/// players were credited.
pub fn credit_players(players: &mut [Player], record: &CompletedMatch) -> usize {
    let team1 = &record.scorecard.team1_players;
    let team2 = &record.scorecard.team2_players;
    let mut credited = 0;

    for player in players.iter_mut() {
        let name = player.name.as_str();
        if !team1.contains(name) && !team2.contains(name) {
            continue;
        }

        player.matches += 1;
        player.runs += team1.get(name).map_or(0, |c| c.runs());
        player.runs += team2.get(name).map_or(0, |c| c.runs());
        player.wickets += wicket_credit(team1, team2, name);
        credited += 1;
    }

    credited
}
