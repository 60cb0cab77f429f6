//! Ground truth for a player or the solution, used by simulations and tests.

use crate::item::ItemId;
use crate::table::Owner;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A participant's real cards, paired with the owner id of its belief hand.
///
/// The deduction engine never reads this; it only ever sees a [`crate::Table`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Participant {
    /// Display name.
    name: String,
    /// Owner of the matching belief hand.
    owner: Owner,
    /// Items actually held.
    held: Vec<ItemId>,
}

impl Participant {
    /// Creates a participant.
    pub fn new(name: impl Into<String>, owner: Owner, held: Vec<ItemId>) -> Self {
        Self {
            name: name.into(),
            owner,
            held,
        }
    }

    /// Returns true if the participant holds the item.
    pub fn holds(&self, item: ItemId) -> bool {
        self.held.contains(&item)
    }

    /// Returns true if the participant holds any of the items.
    pub fn holds_any(&self, items: &[ItemId]) -> bool {
        items.iter().any(|item| self.holds(*item))
    }

    /// The card this participant would show: the first held item in `items`.
    pub fn show(&self, items: &[ItemId]) -> Option<ItemId> {
        items.iter().copied().find(|item| self.holds(*item))
    }
}
