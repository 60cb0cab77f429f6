//! Simulation configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a batch of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seats at the table, including the self seat.
    #[serde(default = "default_players")]
    players: usize,

    /// Guesses allowed before a game is abandoned.
    #[serde(default = "default_max_guesses")]
    max_guesses: usize,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: usize,

    /// Base seed. Game `n` is dealt from `seed + n`; without a seed every
    /// game is dealt from fresh entropy.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_players() -> usize {
    5
}

#[instrument]
fn default_max_guesses() -> usize {
    500
}

#[instrument]
fn default_games() -> usize {
    100
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            max_guesses: default_max_guesses(),
            games: default_games(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            players = config.players,
            games = config.games,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces any setting given on the command line.
    pub fn with_overrides(
        mut self,
        players: Option<usize>,
        max_guesses: Option<usize>,
        games: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(players) = players {
            self.players = players;
        }
        if let Some(max_guesses) = max_guesses {
            self.max_guesses = max_guesses;
        }
        if let Some(games) = games {
            self.games = games;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Checks that a game can be dealt from a deck of `cards` cards.
    ///
    /// At least two seats are needed, and every seat must receive a card
    /// once the three solution cards are set aside.
    pub fn check(&self, cards: usize) -> Result<(), ConfigError> {
        let dealt = cards.saturating_sub(3);
        if self.players < 2 {
            return Err(ConfigError::new(format!(
                "At least 2 players are required, got {}",
                self.players
            )));
        }
        if self.players > dealt {
            return Err(ConfigError::new(format!(
                "{} players cannot share {} cards",
                self.players, dealt
            )));
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::new("max_guesses must be positive".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
