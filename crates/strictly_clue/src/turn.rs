//! Turns: the observed events that drive deduction.
//!
//! Turns are domain events, not side effects. They are recorded once,
//! never changed, and can be replayed to rebuild a table from scratch.

use crate::error::DeductionError;
use crate::item::{Category, ItemId, Universe};
use crate::table::HandId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The guessed triple of a turn: one person, one weapon, one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accusation {
    person: ItemId,
    weapon: ItemId,
    room: ItemId,
}

impl Accusation {
    /// Creates an accusation, checking each item sits in its own category.
    #[instrument(skip(universe))]
    pub fn new(
        universe: &Universe,
        person: ItemId,
        weapon: ItemId,
        room: ItemId,
    ) -> Result<Self, DeductionError> {
        for (item, expected) in [
            (person, Category::Person),
            (weapon, Category::Weapon),
            (room, Category::Room),
        ] {
            let found = universe.category(item)?;
            if found != expected {
                return Err(DeductionError::CategoryMismatch {
                    item,
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            person,
            weapon,
            room,
        })
    }

    /// The guessed person.
    pub fn person(&self) -> ItemId {
        self.person
    }

    /// The guessed weapon.
    pub fn weapon(&self) -> ItemId {
        self.weapon
    }

    /// The guessed room.
    pub fn room(&self) -> ItemId {
        self.room
    }

    /// The three guessed items in person, weapon, room order.
    pub fn items(&self) -> [ItemId; 3] {
        [self.person, self.weapon, self.room]
    }

    /// Returns true if the item is one of the three guessed.
    pub fn contains(&self, item: ItemId) -> bool {
        self.items().contains(&item)
    }
}

/// One observed accusation and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    accusation: Accusation,
    accuser: HandId,
    revealer: Option<HandId>,
    disclosed: Option<ItemId>,
}

impl Turn {
    /// Records a turn.
    ///
    /// `revealer` is `None` when nobody could show a card. `disclosed` is
    /// only meaningful when the accuser is the self seat and was shown a card.
    pub fn new(
        accusation: Accusation,
        accuser: HandId,
        revealer: Option<HandId>,
        disclosed: Option<ItemId>,
    ) -> Self {
        Self {
            accusation,
            accuser,
            revealer,
            disclosed,
        }
    }

    /// The guessed triple.
    pub fn accusation(&self) -> &Accusation {
        &self.accusation
    }

    /// The three guessed items.
    pub fn items(&self) -> [ItemId; 3] {
        self.accusation.items()
    }

    /// Seat that made the accusation.
    pub fn accuser(&self) -> HandId {
        self.accuser
    }

    /// Seat that showed a card, if anyone did.
    pub fn revealer(&self) -> Option<HandId> {
        self.revealer
    }

    /// The card shown to the self seat, if recorded.
    pub fn disclosed(&self) -> Option<ItemId> {
        self.disclosed
    }
}
