//! Game outcomes and batch reports.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;

/// How a simulated game ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameOutcome {
    /// The deduced solution matches the real one.
    Success,
    /// The guess limit ran out before the solution was deduced.
    MaxGuessesReached,
    /// The deduced person is wrong.
    PersonWrong,
    /// The deduced weapon is wrong.
    WeaponWrong,
    /// The deduced room is wrong.
    RoomWrong,
}

impl GameOutcome {
    /// Returns true for anything but [`GameOutcome::Success`].
    pub fn is_failure(self) -> bool {
        self != Self::Success
    }
}

/// Summary of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Seed the game was dealt from.
    seed: u64,
    /// How the game ended.
    outcome: GameOutcome,
    /// Guesses made.
    guesses: usize,
    /// Real solution as person, weapon, room names.
    solution: [String; 3],
    /// Turns the engine processed, one line each.
    log: Vec<String>,
}

/// Outcome counts over a batch of games, plus every failed game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    counts: BTreeMap<GameOutcome, usize>,
    failures: Vec<GameRecord>,
    total_guesses: usize,
}

impl SimulationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one game to the report.
    pub fn record(&mut self, record: GameRecord) {
        *self.counts.entry(record.outcome).or_default() += 1;
        self.total_guesses += record.guesses;
        if record.outcome.is_failure() {
            self.failures.push(record);
        }
    }

    /// Games with the given outcome.
    pub fn count(&self, outcome: GameOutcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Games recorded.
    pub fn games(&self) -> usize {
        self.counts.values().sum()
    }

    /// Records of every game that did not end in success.
    pub fn failures(&self) -> &[GameRecord] {
        &self.failures
    }

    /// Mean guesses per game, or zero for an empty report.
    pub fn mean_guesses(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.total_guesses as f64 / games as f64,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games())?;
        for outcome in GameOutcome::iter() {
            writeln!(f, "  {:<18} {}", outcome, self.count(outcome))?;
        }
        writeln!(f, "Mean guesses: {:.1}", self.mean_guesses())?;
        for failure in &self.failures {
            writeln!(
                f,
                "Failed game (seed {}): {} after {} guesses, solution {}",
                failure.seed,
                failure.outcome,
                failure.guesses,
                failure.solution.join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seed: u64, outcome: GameOutcome, guesses: usize) -> GameRecord {
        GameRecord::new(
            seed,
            outcome,
            guesses,
            ["Person0".into(), "Weapon0".into(), "Room0".into()],
            Vec::new(),
        )
    }

    #[test]
    fn test_counts_and_failures() {
        let mut report = SimulationReport::new();
        report.record(record(1, GameOutcome::Success, 10));
        report.record(record(2, GameOutcome::Success, 20));
        report.record(record(3, GameOutcome::MaxGuessesReached, 30));

        assert_eq!(report.games(), 3);
        assert_eq!(report.count(GameOutcome::Success), 2);
        assert_eq!(report.count(GameOutcome::RoomWrong), 0);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(*report.failures()[0].seed(), 3);
        assert!((report.mean_guesses() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_lists_every_outcome() {
        let mut report = SimulationReport::new();
        report.record(record(9, GameOutcome::PersonWrong, 4));

        let summary = report.to_string();
        for outcome in GameOutcome::iter() {
            assert!(summary.contains(&outcome.to_string()));
        }
        assert!(summary.contains("seed 9"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimulationReport::new();
        assert_eq!(report.games(), 0);
        assert_eq!(report.mean_guesses(), 0.0);
    }
}
