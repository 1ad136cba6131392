//! CricManager CLI
//!
//! Player/team management, ball-by-ball scoring, history, leaderboard and
//! CSV export over the JSON stores in the data directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cric_core::report::{leaderboard_lines, match_summary, player_line, scorecard_status, team_line};
use cric_core::{export, AppState, BallOutcome, PlayerRole, StorageConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "cricmanager")]
#[command(about = "Cricket management & ball-by-ball scoring", long_about = None)]
struct Cli {
    /// Directory holding the JSON stores (overrides CRIC_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register and list players
    #[command(subcommand)]
    Player(PlayerCommand),

    /// Create and list teams
    #[command(subcommand)]
    Team(TeamCommand),

    /// Score a match ball by ball
    #[command(subcommand)]
    Match(MatchCommand),

    /// Completed matches with results and batting summaries
    History,

    /// Players ranked by runs, then wickets
    Leaderboard,

    /// Player stats as CSV
    Export {
        /// Output CSV file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum PlayerCommand {
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, value_parser = clap::value_parser!(u8).range(10..=50))]
        age: u8,

        /// Batsman, Bowler, All-rounder or Wicketkeeper
        #[arg(long)]
        role: PlayerRole,
    },
    List,
}

#[derive(Subcommand)]
enum TeamCommand {
    Create {
        #[arg(long)]
        name: String,

        /// Registered player name (repeatable)
        #[arg(long = "player")]
        players: Vec<String>,
    },
    List,
}

#[derive(Subcommand)]
enum MatchCommand {
    /// Start a match, replacing any match in progress
    Start {
        #[arg(long)]
        team1: String,

        #[arg(long)]
        team2: String,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
        overs: u32,

        #[arg(long, requires = "non_striker")]
        striker: Option<String>,

        #[arg(long, requires = "striker")]
        non_striker: Option<String>,
    },

    /// Put a new pair at the crease
    Batters {
        #[arg(long)]
        striker: String,

        #[arg(long)]
        non_striker: String,
    },

    /// Record one ball
    Ball {
        /// Batting team name
        #[arg(long)]
        batting: String,

        #[arg(long)]
        bowler: String,

        /// 0, 1, 2, 3, 4, 6, W, Wide, No Ball, Bye or Leg Bye
        #[arg(long)]
        outcome: BallOutcome,

        /// Batter facing (defaults to the current striker)
        #[arg(long)]
        batter: Option<String>,

        #[arg(long)]
        wicket: bool,
    },

    /// Show the match in progress
    Status,

    /// Submit the match result and update career stats
    Submit,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn storage_config(data_dir: Option<PathBuf>) -> Result<StorageConfig> {
    let config = StorageConfig::from_env().context("Failed to resolve storage config")?;
    Ok(match data_dir {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    })
}

fn run(cli: Cli) -> Result<()> {
    let config = storage_config(cli.data_dir)?;
    tracing::debug!("Using data directory {}", config.data_dir().display());

    let mut state = AppState::load(config).context("Failed to load stores")?;

    match cli.command {
        Commands::Player(PlayerCommand::Add { name, age, role }) => {
            state.add_player(&name, age, role)?;
            println!("✅ Added player {}", name);
        }
        Commands::Player(PlayerCommand::List) => {
            for player in &state.players {
                println!("{}", player_line(player));
            }
        }

        Commands::Team(TeamCommand::Create { name, players }) => {
            state.create_team(&name, players)?;
            println!("✅ Team {} created", name);
        }
        Commands::Team(TeamCommand::List) => {
            for team in &state.teams {
                println!("{}", team_line(team));
            }
        }

        Commands::Match(MatchCommand::Start { team1, team2, overs, striker, non_striker }) => {
            let openers = striker.zip(non_striker);
            let scorecard = state.start_match(&team1, &team2, overs, openers)?;
            println!("🏏 Match started");
            print!("{}", scorecard_status(scorecard));
        }
        Commands::Match(MatchCommand::Batters { striker, non_striker }) => {
            let scorecard = state.set_batters(&striker, &non_striker)?;
            print!("{}", scorecard_status(scorecard));
        }
        Commands::Match(MatchCommand::Ball { batting, bowler, outcome, batter, wicket }) => {
            let scorecard =
                state.record_ball(&batting, batter.as_deref(), &bowler, outcome, wicket)?;
            print!("{}", scorecard_status(scorecard));
        }
        Commands::Match(MatchCommand::Status) => match state.active_match() {
            Some(scorecard) => print!("{}", scorecard_status(scorecard)),
            None => println!("No match in progress."),
        },
        Commands::Match(MatchCommand::Submit) => {
            let record = state.submit_match()?;
            println!("✅ Match result saved successfully!");
            print!("{}", match_summary(record));
        }

        Commands::History => {
            if state.matches.is_empty() {
                println!("No matches played yet.");
            }
            for record in &state.matches {
                print!("{}", match_summary(record));
            }
        }
        Commands::Leaderboard => {
            for line in leaderboard_lines(&state.players) {
                println!("{}", line);
            }
        }
        Commands::Export { out: Some(path) } => {
            export::export_players_csv(&path, &state.players)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            println!("📄 Player stats exported to: {}", path.display());
        }
        Commands::Export { out: None } => {
            state.export_csv(std::io::stdout().lock())?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
