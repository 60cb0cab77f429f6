//! Command-line interface for strictly_clue_sim.

use clap::{Parser, Subcommand};

/// Strictly Clue Simulator - plays random games against the deduction engine
#[derive(Parser, Debug)]
#[command(name = "strictly_clue_sim")]
#[command(about = "Random full-game simulator for the Clue deduction engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of random games and print the outcome report
    Run {
        /// Number of games to play
        #[arg(short, long)]
        games: Option<usize>,

        /// Seats at the table, including the self seat
        #[arg(short, long)]
        players: Option<usize>,

        /// Guesses allowed per game
        #[arg(long)]
        max_guesses: Option<usize>,

        /// Base seed for reproducible deals
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
