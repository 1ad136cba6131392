pub mod ball;
pub mod match_record;
pub mod player;
pub mod team;

pub use ball::{BallEvent, BallOutcome, ExtraKind, Extras};
pub use match_record::{
    CompletedMatch, Contribution, MatchOutcome, MatchStatus, PlayerTally, Scorecard, Side,
    TallyEntry,
};
pub use player::{Player, PlayerRole};
pub use team::Team;
