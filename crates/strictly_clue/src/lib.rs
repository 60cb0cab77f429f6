//! Strictly Clue - deduction engine for Clue-style board games
//!
//! Tracks what the table knows about who holds which card, and squeezes
//! every certainty out of the observed turns.
//!
//! # Architecture
//!
//! - **Items**: the card universe, arena-allocated and addressed by [`ItemId`]
//! - **Hands**: per-owner checklists with capacity, plus the hidden solution
//! - **Table**: seats in turn order, the solution, and the item holder index
//! - **Rules**: pure propagation functions over a [`Table`]
//! - **Fixpoint**: re-applies every rule until nothing new is learned
//! - **Validation**: pre-screens a turn before it is committed
//!
//! # Example
//!
//! ```
//! use strictly_clue::{Accusation, TableSetup, Turn, Universe, apply_turn, process_turns};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let universe = Universe::standard();
//! let green = universe.find("Mr. Green").ok_or("missing card")?;
//! let knife = universe.find("Knife").ok_or("missing card")?;
//! let study = universe.find("Study").ok_or("missing card")?;
//!
//! let mut table = TableSetup::new(universe.clone())
//!     .with_self("You", [green, knife, study])
//!     .with_opponent("Alice", 6)
//!     .with_opponent("Bob", 6)
//!     .with_opponent("Carol", 3)
//!     .build()?;
//!
//! let plum = universe.find("Prof. Plum").ok_or("missing card")?;
//! let rope = universe.find("Rope").ok_or("missing card")?;
//! let hall = universe.find("Hall").ok_or("missing card")?;
//! let accusation = Accusation::new(&universe, plum, rope, hall)?;
//! let alice = table.seat("Alice").ok_or("missing seat")?;
//! let turn = Turn::new(accusation, alice, None, None);
//!
//! apply_turn(&mut table, &turn)?;
//! process_turns(&mut table, &[turn])?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod checklist;
mod error;
mod fixpoint;
mod hand;
mod invariants;
mod item;
mod participant;
mod rules;
mod setup;
mod status;
mod table;
mod turn;
mod validate;

#[cfg(test)]
mod fixtures;

// Crate-level exports - Items and statuses
pub use item::{Category, Item, ItemId, Universe};
pub use status::CardHeld;

// Crate-level exports - Belief state
pub use checklist::Checklist;
pub use hand::{Hand, HandKind, SlotDeduction, SolutionSlots};
pub use participant::Participant;
pub use table::{HandId, Owner, Table};

// Crate-level exports - Turns and validation
pub use turn::{Accusation, Turn};
pub use validate::{Validation, Violation, ViolationKind, validate};

// Crate-level exports - Deduction engine
pub use fixpoint::{pass_ceiling, process_turns};
pub use rules::{
    TurnInference, apply_turn, classify_turn, deduce_by_exclusion, deduce_by_slot_count,
    deduce_from_turn, new_known_card_update,
};

// Crate-level exports - Setup and errors
pub use error::DeductionError;
pub use setup::{SetupError, TableSetup};

// Crate-level exports - Invariants
pub use invariants::{
    ChecklistComplete, ConfirmedAreYes, HolderIndexConsistent, Invariant, InvariantSet,
    InvariantViolation, MonotonicBeliefs, SolutionExclusive, TableInvariants,
};
