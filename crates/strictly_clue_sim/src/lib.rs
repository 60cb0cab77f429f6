//! Strictly Clue Simulator - random full games for the deduction engine
//!
//! Deals real cards, plays random accusations, answers them truthfully and
//! feeds every turn to [`strictly_clue`] exactly as a player would. The
//! deduced solution is then checked against the deal.
//!
//! Besides the `strictly_clue_sim` binary, this crate is the harness for the
//! engine's property tests: a sound engine never rejects a truthful turn and
//! never deduces a wrong solution.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod report;
mod simulator;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, SimConfig};

// Crate-level exports - Simulation
pub use report::{GameOutcome, GameRecord, SimulationReport};
pub use simulator::{Deal, SimError, Simulation, play_game, run_games, seat_name};
