use serde::{Deserialize, Serialize};

/// A named roster of player names. Order is the order the players were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self { name: name.into(), players }
    }

    pub fn contains(&self, player_name: &str) -> bool {
        self.players.iter().any(|p| p == player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_json_shape() {
        let team = Team::new("Falcons", vec!["Asha".to_string(), "Ben".to_string()]);
        let json = serde_json::to_value(&team).unwrap();

        assert_eq!(json, serde_json::json!({ "name": "Falcons", "players": ["Asha", "Ben"] }));
        assert!(team.contains("Ben"));
        assert!(!team.contains("Cara"));
    }

    #[test]
    fn test_empty_roster_is_allowed() {
        let team = Team::new("", Vec::new());
        assert!(team.players.is_empty());
        assert!(!team.contains(""));
    }
}
