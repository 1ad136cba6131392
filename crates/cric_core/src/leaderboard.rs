use crate::models::Player;

/// Players ranked by career runs, then wickets, both descending.
///
/// The sort is stable: players tied on both keys keep their registration order.
pub fn leaderboard(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| (b.runs, b.wickets).cmp(&(a.runs, a.wickets)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerRole;

    fn player(name: &str, runs: u32, wickets: u32) -> Player {
        let mut p = Player::new(name, 25, PlayerRole::AllRounder);
        p.runs = runs;
        p.wickets = wickets;
        p
    }

    #[test]
    fn test_runs_then_wickets() {
        let players = vec![player("A", 10, 2), player("B", 10, 5), player("C", 3, 9)];
        let names: Vec<&str> = leaderboard(&players).iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_full_ties_keep_order() {
        let players = vec![player("First", 7, 1), player("Second", 7, 1), player("Top", 50, 0)];
        let names: Vec<&str> = leaderboard(&players).iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Top", "First", "Second"]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(leaderboard(&[]).is_empty());
    }
}
