//! Strictly Clue Simulator - CLI entry point

use anyhow::Result;
use clap::Parser;
use strictly_clue_sim::{Cli, Command, SimConfig, run_games};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            games,
            players,
            max_guesses,
            seed,
            config,
        } => run(config, players, max_guesses, games, seed),
    }
}

/// Plays the configured games and prints the report
#[instrument]
fn run(
    config: Option<std::path::PathBuf>,
    players: Option<usize>,
    max_guesses: Option<usize>,
    games: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let config = match config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    }
    .with_overrides(players, max_guesses, games, seed);

    info!(?config, "Starting simulation");
    let report = run_games(&config)?;
    println!("{report}");
    Ok(())
}
