//! Deduction rules for Clue.
//!
//! This module contains pure functions that turn observed turns and the
//! current table into new certainties. Each rule only ever resolves
//! `Unknown` cells and reports whether it did, so every rule is monotone
//! and applying it twice in a row changes nothing the second time.

pub mod exclusion;
pub mod known;
pub mod single_turn;
pub mod slots;
pub mod turn;

pub use exclusion::deduce_by_exclusion;
pub use known::new_known_card_update;
pub use single_turn::{TurnInference, classify_turn, deduce_from_turn};
pub use slots::deduce_by_slot_count;
pub use turn::apply_turn;
