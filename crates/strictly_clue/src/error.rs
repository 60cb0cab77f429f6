//! Errors raised by the deduction engine.

use crate::item::{Category, ItemId};
use crate::status::CardHeld;
use crate::table::HandId;

/// Error from a checklist, hand, or table operation.
///
/// Validation problems with a prospective turn are not errors; see
/// [`crate::Validation`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeductionError {
    /// The item is not part of the universe.
    #[display("Item {} is not part of this universe", item)]
    UnknownItem {
        /// The offending id.
        item: ItemId,
    },

    /// No hand is seated at this position.
    #[display("No hand is seated at {}", hand)]
    UnknownHand {
        /// The offending seat.
        hand: HandId,
    },

    /// The label is not one of Yes, No, Unknown.
    #[display("'{}' is not a valid card status", label)]
    InvalidStatus {
        /// The label that failed to parse.
        label: String,
    },

    /// The update would move a resolved status backward or flip it.
    #[display("Status of item {} cannot change from {} to {}", item, from, to)]
    StatusConflict {
        /// Item whose status was being changed.
        item: ItemId,
        /// Current status.
        from: CardHeld,
        /// Requested status.
        to: CardHeld,
    },

    /// A guessed item sits in the wrong slot of an accusation.
    #[display("Item {} is a {}, expected a {}", item, found, expected)]
    CategoryMismatch {
        /// The misplaced item.
        item: ItemId,
        /// Category of the slot.
        expected: Category,
        /// Category of the item.
        found: Category,
    },

    /// A hand was built over a different universe than its table.
    #[display("Hand '{}' tracks {} items, the table has {}", owner, found, expected)]
    UniverseMismatch {
        /// Name of the hand.
        owner: String,
        /// Universe size of the table.
        expected: usize,
        /// Checklist size of the hand.
        found: usize,
    },

    /// The fixpoint failed to settle; a rule is not monotone.
    #[display("Deduction did not settle within {} passes", passes)]
    InternalInconsistency {
        /// Passes run before giving up.
        passes: usize,
    },
}

impl std::error::Error for DeductionError {}
