//! Plain-text rendering for the manager screens.

use crate::leaderboard::leaderboard;
use crate::models::{CompletedMatch, Player, PlayerTally, Scorecard, Side, Team};
use std::fmt::Write;

pub fn player_line(player: &Player) -> String {
    format!(
        "**{}** | Age: {} | Role: {} | Matches: {} | Runs: {} | Wickets: {}",
        player.name, player.age, player.role, player.matches, player.runs, player.wickets
    )
}

pub fn team_line(team: &Team) -> String {
    format!("**{}** - {}", team.name, team.players.join(", "))
}

pub fn leaderboard_lines(players: &[Player]) -> Vec<String> {
    leaderboard(players)
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "**{}. {}** - Runs: {}, Wickets: {}, Matches: {}",
                i + 1,
                p.name,
                p.runs,
                p.wickets,
                p.matches
            )
        })
        .collect()
}

fn batting_summary(out: &mut String, team: &str, tally: &PlayerTally) {
    let _ = writeln!(out, "  {} Batting", team);
    for entry in tally.iter() {
        let _ = writeln!(out, "  - {}: {} runs", entry.name, entry.contribution.runs());
    }
}

/// History entry: headline, score line and both batting summaries.
pub fn match_summary(record: &CompletedMatch) -> String {
    let sc = &record.scorecard;
    let mut out = String::new();

    let _ = writeln!(out, "### {} vs {}", sc.team1, sc.team2);
    let _ = writeln!(
        out,
        "  Overs: {} | Score: {} - {} | Result: {}",
        sc.overs,
        record.score(Side::Team1),
        record.score(Side::Team2),
        record.outcome()
    );
    batting_summary(&mut out, &sc.team1, &sc.team1_players);
    batting_summary(&mut out, &sc.team2, &sc.team2_players);
    out
}

/// Live view of the match being scored.
pub fn scorecard_status(sc: &Scorecard) -> String {
    let mut out = String::new();
    let or_dash = |name: &Option<String>| name.clone().unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "{} vs {} ({} overs)", sc.team1, sc.team2, sc.overs);
    let _ = writeln!(out, "Over {}.{}", sc.current_over, sc.balls_in_over);
    let _ = writeln!(
        out,
        "{} {} | {} {}",
        sc.team1,
        sc.team_score(Side::Team1),
        sc.team2,
        sc.team_score(Side::Team2)
    );
    let _ = writeln!(
        out,
        "Striker: {} | Non-striker: {} | Bowler: {}",
        or_dash(&sc.striker),
        or_dash(&sc.non_striker),
        or_dash(&sc.current_bowler)
    );
    let _ = writeln!(
        out,
        "Extras: {} (wide {}, no ball {}, byes {}, leg byes {})",
        sc.extras.total(),
        sc.extras.wide, sc.extras.no_ball, sc.extras.byes, sc.extras.leg_byes
    );
    out
}
