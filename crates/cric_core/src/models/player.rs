use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing role picked at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
    Wicketkeeper,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 4] =
        [PlayerRole::Batsman, PlayerRole::Bowler, PlayerRole::AllRounder, PlayerRole::Wicketkeeper];

    pub fn label(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::Wicketkeeper => "Wicketkeeper",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayerRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayerRole::ALL
            .into_iter()
            .find(|role| role.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::InvalidRole(s.to_string()))
    }
}

/// A registered player and their career totals.
///
/// Field order is the column order of `players.json` records and of the CSV
/// export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub age: u8,
    pub role: PlayerRole,
    pub runs: u32,
    pub wickets: u32,
    pub matches: u32,
}

impl Player {
    /// New registration with zeroed career stats.
    pub fn new(name: impl Into<String>, age: u8, role: PlayerRole) -> Self {
        Self { name: name.into(), age, role, runs: 0, wickets: 0, matches: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_accepts_labels() {
        assert_eq!("Batsman".parse::<PlayerRole>().unwrap(), PlayerRole::Batsman);
        assert_eq!("all-rounder".parse::<PlayerRole>().unwrap(), PlayerRole::AllRounder);
        assert_eq!(" Wicketkeeper ".parse::<PlayerRole>().unwrap(), PlayerRole::Wicketkeeper);
        assert!(matches!("Keeper".parse::<PlayerRole>(), Err(CoreError::InvalidRole(_))));
    }

    #[test]
    fn test_player_record_layout() {
        let player = Player::new("Asha", 24, PlayerRole::AllRounder);
        let json = serde_json::to_string(&player).unwrap();

        assert_eq!(
            json,
            r#"{"name":"Asha","age":24,"role":"All-rounder","runs":0,"wickets":0,"matches":0}"#
        );
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(back, player);
    }
}
