//! Tri-state belief about whether an owner holds a card.

use crate::error::DeductionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What is known about one owner holding one card.
///
/// Statuses form a two-step lattice: `Unknown` may become `Yes` or `No`,
/// and a resolved status never changes again.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CardHeld {
    /// Confirmed held.
    Yes,
    /// Confirmed not held.
    No,
    /// Not yet determined.
    Unknown,
}

impl CardHeld {
    /// Parses a status label such as `"yes"` or `"Unknown"`.
    pub fn parse(label: &str) -> Result<Self, DeductionError> {
        Self::from_str(label.trim()).map_err(|_| DeductionError::InvalidStatus {
            label: label.to_string(),
        })
    }

    /// Returns true for `Yes` and `No`.
    pub fn is_resolved(self) -> bool {
        self != CardHeld::Unknown
    }

    /// Returns true if moving from `self` to `next` respects the lattice.
    pub fn can_become(self, next: CardHeld) -> bool {
        self == next || self == CardHeld::Unknown && next != CardHeld::Unknown
    }
}
