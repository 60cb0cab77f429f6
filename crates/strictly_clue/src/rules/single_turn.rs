//! Pinning the card a revealer must have shown.
//!
//! A revealer showed exactly one of the three guessed items. If two of them
//! are impossible for the revealer, because another owner holds them or the
//! revealer is known not to, the third is in the revealer's hand.

use crate::item::ItemId;
use crate::rules::known::new_known_card_update;
use crate::status::CardHeld;
use crate::table::{Owner, Table};
use crate::turn::Turn;
use tracing::{debug, instrument};

/// What a turn currently says about the revealer's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInference {
    /// Nobody showed a card, or the revealer is not seated.
    NoRevealer,
    /// The revealer is already known to hold this guessed item.
    AlreadyShown(ItemId),
    /// The other two guessed items are held by other owners.
    HeldElsewhere(ItemId),
    /// The revealer is known not to hold the other two guessed items.
    RuledOutByRevealer(ItemId),
    /// One other item is held elsewhere and the revealer lacks the last.
    Mixed(ItemId),
    /// At least two guessed items are still possible for the revealer.
    Undetermined,
    /// None of the guessed items is possible for the revealer.
    Contradiction,
}

impl TurnInference {
    /// The item this inference places in the revealer's hand, if any.
    pub fn pinned(self) -> Option<ItemId> {
        match self {
            Self::HeldElsewhere(item) | Self::RuledOutByRevealer(item) | Self::Mixed(item) => {
                Some(item)
            }
            Self::NoRevealer
            | Self::AlreadyShown(_)
            | Self::Undetermined
            | Self::Contradiction => None,
        }
    }
}

/// Classifies a turn against the current table without changing it.
pub fn classify_turn(table: &Table, turn: &Turn) -> TurnInference {
    let Some(revealer) = turn.revealer() else {
        return TurnInference::NoRevealer;
    };
    if table.hand(revealer).is_err() {
        return TurnInference::NoRevealer;
    }
    let owner = Owner::Seat(revealer);
    let items = turn.items();

    if let Some(item) = items.iter().find(|item| table.holder(**item) == Some(owner)) {
        return TurnInference::AlreadyShown(*item);
    }

    let mut elsewhere = 0;
    let mut ruled_out = 0;
    let mut candidates = Vec::with_capacity(items.len());
    for item in items {
        if table.holder(item).is_some() {
            elsewhere += 1;
        } else if table.status(owner, item) == Ok(CardHeld::No) {
            ruled_out += 1;
        } else {
            candidates.push(item);
        }
    }

    match (elsewhere, ruled_out, candidates.as_slice()) {
        (2, 0, [item]) => TurnInference::HeldElsewhere(*item),
        (0, 2, [item]) => TurnInference::RuledOutByRevealer(*item),
        (1, 1, [item]) => TurnInference::Mixed(*item),
        (_, _, []) => TurnInference::Contradiction,
        _ => TurnInference::Undetermined,
    }
}

/// Draws what one turn implies given everything currently known.
///
/// Pins the revealer's card when only one guessed item is possible for
/// them. Otherwise, if the revealer has a single open slot, that slot must
/// hold one of the guessed items, so every other card is excluded.
#[instrument(skip(table, turn), fields(accuser = %turn.accuser()))]
pub fn deduce_from_turn(table: &mut Table, turn: &Turn) -> bool {
    let inference = classify_turn(table, turn);
    let Some(revealer) = turn.revealer() else {
        return false;
    };
    let owner = Owner::Seat(revealer);

    if let Some(item) = inference.pinned() {
        if !table.settle(owner, item) {
            return false;
        }
        debug!(%item, %revealer, ?inference, "Revealed card pinned");
        new_known_card_update(table, &[item]);
        return true;
    }

    if inference != TurnInference::Undetermined {
        return false;
    }
    let last_slot = table
        .hand(revealer)
        .map(|hand| !hand.is_self() && hand.open_slots() == 1)
        .unwrap_or(false);
    if !last_slot {
        return false;
    }

    let accusation = *turn.accusation();
    let others: Vec<ItemId> = table
        .universe()
        .ids()
        .filter(|item| !accusation.contains(*item))
        .collect();
    let mut changed = false;
    for item in others {
        changed |= table.exclude(owner, item);
    }
    if changed {
        debug!(%revealer, "Last open slot holds a guessed card");
    }
    changed
}
