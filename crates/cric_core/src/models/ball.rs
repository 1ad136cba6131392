use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happened on a single delivery, as picked by the scorer.
///
/// Serialized with the scorer-facing label ("4", "W", "No Ball", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallOutcome {
    #[serde(rename = "0")]
    Dot,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "W")]
    Out,
    Wide,
    #[serde(rename = "No Ball")]
    NoBall,
    Bye,
    #[serde(rename = "Leg Bye")]
    LegBye,
}

/// Extras bucket bumped by an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraKind {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

impl BallOutcome {
    pub const ALL: [BallOutcome; 11] = [
        BallOutcome::Dot,
        BallOutcome::One,
        BallOutcome::Two,
        BallOutcome::Three,
        BallOutcome::Four,
        BallOutcome::Six,
        BallOutcome::Out,
        BallOutcome::Wide,
        BallOutcome::NoBall,
        BallOutcome::Bye,
        BallOutcome::LegBye,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BallOutcome::Dot => "0",
            BallOutcome::One => "1",
            BallOutcome::Two => "2",
            BallOutcome::Three => "3",
            BallOutcome::Four => "4",
            BallOutcome::Six => "6",
            BallOutcome::Out => "W",
            BallOutcome::Wide => "Wide",
            BallOutcome::NoBall => "No Ball",
            BallOutcome::Bye => "Bye",
            BallOutcome::LegBye => "Leg Bye",
        }
    }

    /// Signed run value stored on the ball event. `W` is the -1 sentinel and
    /// never counts towards a total.
    pub fn run_value(&self) -> i32 {
        match self {
            BallOutcome::Dot => 0,
            BallOutcome::One => 1,
            BallOutcome::Two => 2,
            BallOutcome::Three => 3,
            BallOutcome::Four => 4,
            BallOutcome::Six => 6,
            BallOutcome::Out => -1,
            BallOutcome::Wide | BallOutcome::NoBall => 1,
            BallOutcome::Bye | BallOutcome::LegBye => 0,
        }
    }

    pub fn extra(&self) -> Option<ExtraKind> {
        match self {
            BallOutcome::Wide => Some(ExtraKind::Wide),
            BallOutcome::NoBall => Some(ExtraKind::NoBall),
            BallOutcome::Bye => Some(ExtraKind::Bye),
            BallOutcome::LegBye => Some(ExtraKind::LegBye),
            _ => None,
        }
    }
}

impl fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BallOutcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BallOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidOutcome(s.to_string()))
    }
}

/// Per-match extras counts. Each entry counts deliveries, not runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extras {
    pub wide: u32,
    pub no_ball: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    pub fn record(&mut self, kind: ExtraKind) {
        match kind {
            ExtraKind::Wide => self.wide += 1,
            ExtraKind::NoBall => self.no_ball += 1,
            ExtraKind::Bye => self.byes += 1,
            ExtraKind::LegBye => self.leg_byes += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wide + self.no_ball + self.byes + self.leg_byes
    }
}

/// One recorded delivery. Append-only within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallEvent {
    pub batter: String,
    pub bowler: String,
    pub run: i32,
    pub ball_type: BallOutcome,
    pub wicket: bool,
}

impl BallEvent {
    pub fn new(
        batter: impl Into<String>,
        bowler: impl Into<String>,
        outcome: BallOutcome,
        wicket: bool,
    ) -> Self {
        Self {
            batter: batter.into(),
            bowler: bowler.into(),
            run: outcome.run_value(),
            ball_type: outcome,
            wicket,
        }
    }

    /// Runs this ball adds to the team total (0 for the `W` sentinel).
    pub fn scoring_runs(&self) -> u32 {
        u32::try_from(self.run).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_table() {
        let expected = [
            ("0", 0, None),
            ("1", 1, None),
            ("2", 2, None),
            ("3", 3, None),
            ("4", 4, None),
            ("6", 6, None),
            ("W", -1, None),
            ("Wide", 1, Some(ExtraKind::Wide)),
            ("No Ball", 1, Some(ExtraKind::NoBall)),
            ("Bye", 0, Some(ExtraKind::Bye)),
            ("Leg Bye", 0, Some(ExtraKind::LegBye)),
        ];

        for (label, run, extra) in expected {
            let outcome: BallOutcome = label.parse().unwrap();
            assert_eq!(outcome.label(), label);
            assert_eq!(outcome.run_value(), run, "run value for {label}");
            assert_eq!(outcome.extra(), extra, "extra for {label}");
        }
    }

    #[test]
    fn test_outcome_rejects_five() {
        assert!(matches!("5".parse::<BallOutcome>(), Err(CoreError::InvalidOutcome(_))));
        assert!("".parse::<BallOutcome>().is_err());
    }

    #[test]
    fn test_ball_event_serializes_label() {
        let ball = BallEvent::new("Asha", "Ravi", BallOutcome::LegBye, false);
        let json = serde_json::to_value(&ball).unwrap();

        assert_eq!(json["ball_type"], "Leg Bye");
        assert_eq!(json["run"], 0);
        assert_eq!(json["wicket"], false);
    }

    #[test]
    fn test_sentinel_scores_nothing() {
        let ball = BallEvent::new("Asha", "Ravi", BallOutcome::Out, true);
        assert_eq!(ball.run, -1);
        assert_eq!(ball.scoring_runs(), 0);
    }

    #[test]
    fn test_extras_total() {
        let mut extras = Extras::default();
        extras.record(ExtraKind::Wide);
        extras.record(ExtraKind::Wide);
        extras.record(ExtraKind::LegBye);

        assert_eq!(extras.wide, 2);
        assert_eq!(extras.leg_byes, 1);
        assert_eq!(extras.total(), 3);
    }
}
