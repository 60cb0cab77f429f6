//! Pre-screening a turn against what the table already knows.
//!
//! Validation never changes the table. It lets a caller catch a mistyped
//! turn before the turn is committed to the log, where it would poison every
//! later deduction.

use crate::error::DeductionError;
use crate::item::ItemId;
use crate::status::CardHeld;
use crate::table::{HandId, Owner, Table};
use crate::turn::Turn;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Ways a turn can contradict the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ViolationKind {
    /// A seat walked past is known to hold a guessed item.
    PassingHandHoldsItem,
    /// None of the guessed items is possible for the revealer.
    RevealerCannotShow,
    /// The disclosed item could not have come from the revealer.
    DisclosedItemImpossible,
    /// The revealer is the accuser.
    RevealerIsAccuser,
}

/// One contradiction found in a turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Violation {
    /// What went wrong.
    kind: ViolationKind,
    /// The seat the contradiction is about.
    hand: HandId,
    /// Items involved, empty when the violation is about seating alone.
    items: Vec<ItemId>,
}

impl Violation {
    fn new(kind: ViolationKind, hand: HandId, items: Vec<ItemId>) -> Self {
        Self { kind, hand, items }
    }
}

/// Result of validating a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    violations: Vec<Violation>,
}

impl Validation {
    /// Returns true if nothing contradicts the table.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every contradiction found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable lines, one per offending item.
    pub fn warnings(&self, table: &Table) -> Vec<String> {
        let universe = table.universe();
        let mut lines = Vec::new();
        for violation in &self.violations {
            let seat = table
                .hand(violation.hand)
                .map(|hand| hand.name().to_string())
                .unwrap_or_else(|_| violation.hand.to_string());
            if violation.items.is_empty() {
                lines.push(match violation.kind {
                    ViolationKind::RevealerIsAccuser => {
                        format!("{seat} cannot show a card for their own accusation")
                    }
                    kind => format!("{seat}: {kind}"),
                });
                continue;
            }
            for item in &violation.items {
                let card = universe.name(*item);
                lines.push(match violation.kind {
                    ViolationKind::PassingHandHoldsItem => {
                        format!("{seat} holds {card} and could not have passed")
                    }
                    ViolationKind::RevealerCannotShow => {
                        format!("{seat} cannot hold {card}")
                    }
                    ViolationKind::DisclosedItemImpossible => {
                        format!("{seat} cannot have shown {card}")
                    }
                    ViolationKind::RevealerIsAccuser => {
                        format!("{seat} cannot show {card} for their own accusation")
                    }
                });
            }
        }
        lines
    }
}

/// Checks a turn against the table without applying it.
///
/// # Errors
///
/// Fails only if the turn names a seat or item outside this table.
#[instrument(skip(turn, table), fields(accuser = %turn.accuser()))]
pub fn validate(turn: &Turn, table: &Table) -> Result<Validation, DeductionError> {
    table.hand(turn.accuser())?;
    if let Some(revealer) = turn.revealer() {
        table.hand(revealer)?;
    }
    let items = turn.items();
    let disclosed = turn.disclosed();
    for item in items.iter().chain(disclosed.iter()) {
        table.universe().get(*item)?;
    }

    let mut violations = Vec::new();

    for passing in table.passing_seats(turn.accuser(), turn.revealer()) {
        let held: Vec<ItemId> = items
            .iter()
            .copied()
            .filter(|item| table.status(Owner::Seat(passing), *item) == Ok(CardHeld::Yes))
            .collect();
        if !held.is_empty() {
            violations.push(Violation::new(
                ViolationKind::PassingHandHoldsItem,
                passing,
                held,
            ));
        }
    }

    match turn.revealer() {
        Some(revealer) if revealer == turn.accuser() => {
            violations.push(Violation::new(
                ViolationKind::RevealerIsAccuser,
                revealer,
                Vec::new(),
            ));
        }
        Some(revealer) => {
            if !items.iter().any(|item| could_show(table, revealer, *item)) {
                violations.push(Violation::new(
                    ViolationKind::RevealerCannotShow,
                    revealer,
                    items.to_vec(),
                ));
            }
            if let Some(shown) = turn.disclosed()
                && (!turn.accusation().contains(shown) || !could_show(table, revealer, shown))
            {
                violations.push(Violation::new(
                    ViolationKind::DisclosedItemImpossible,
                    revealer,
                    vec![shown],
                ));
            }
        }
        None => {
            if let Some(shown) = turn.disclosed() {
                violations.push(Violation::new(
                    ViolationKind::DisclosedItemImpossible,
                    turn.accuser(),
                    vec![shown],
                ));
            }
        }
    }

    if !violations.is_empty() {
        warn!(count = violations.len(), "Turn contradicts the table");
    }
    Ok(Validation { violations })
}

/// True unless the item is `No` for the revealer or held by someone else.
fn could_show(table: &Table, revealer: HandId, item: ItemId) -> bool {
    let owner = Owner::Seat(revealer);
    let held_elsewhere = table.holder(item).is_some_and(|holder| holder != owner);
    !held_elsewhere && table.status(owner, item) != Ok(CardHeld::No)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};
    use crate::{Accusation, Universe};

    fn turn(
        universe: &Universe,
        names: [&str; 3],
        accuser: usize,
        revealer: Option<usize>,
        disclosed: Option<&str>,
    ) -> Turn {
        let [p, w, r] = names.map(|name| id(universe, name));
        Turn::new(
            Accusation::new(universe, p, w, r).unwrap(),
            HandId::new(accuser),
            revealer.map(HandId::new),
            disclosed.map(|name| id(universe, name)),
        )
    }

    #[test]
    fn test_consistent_turn_is_valid() {
        let table = three_seats(true);
        let universe = table.universe().clone();
        let t = turn(&universe, ["Person1", "Weapon3", "Room3"], 0, Some(1), Some("Person1"));

        let validation = validate(&t, &table).unwrap();
        assert!(validation.is_valid());
        assert!(validation.warnings(&table).is_empty());
    }

    #[test]
    fn test_passing_hand_holding_item_is_flagged() {
        let mut table = three_seats(false);
        let universe = table.universe().clone();
        table.confirm(seat(1), id(&universe, "Weapon1")).unwrap();
        let t = turn(&universe, ["Person2", "Weapon1", "Room3"], 0, Some(2), None);

        let validation = validate(&t, &table).unwrap();

        assert_eq!(
            validation.violations(),
            &[Violation::new(
                ViolationKind::PassingHandHoldsItem,
                HandId::new(1),
                vec![id(&universe, "Weapon1")],
            )]
        );
        assert_eq!(validation.warnings(&table).len(), 1);
    }

    #[test]
    fn test_every_passing_hand_gets_its_own_violation() {
        let mut table = three_seats(false);
        let universe = table.universe().clone();
        table.confirm(seat(1), id(&universe, "Person1")).unwrap();
        table.confirm(seat(2), id(&universe, "Room2")).unwrap();
        table.confirm(seat(2), id(&universe, "Weapon2")).unwrap();
        let t = turn(&universe, ["Person1", "Weapon2", "Room2"], 0, None, None);

        let validation = validate(&t, &table).unwrap();

        assert_eq!(validation.violations().len(), 2);
        assert_eq!(validation.violations()[1].items().len(), 2);
        assert_eq!(validation.warnings(&table).len(), 3);
    }

    #[test]
    fn test_revealer_without_possible_card_is_flagged() {
        let mut table = three_seats(false);
        let universe = table.universe().clone();
        table.confirm(seat(0), id(&universe, "Person0")).unwrap();
        table.set_status(seat(1), id(&universe, "Weapon3"), CardHeld::No).unwrap();
        table.set_status(seat(1), id(&universe, "Room3"), CardHeld::No).unwrap();
        let t = turn(&universe, ["Person0", "Weapon3", "Room3"], 2, Some(1), None);

        let validation = validate(&t, &table).unwrap();

        let kinds: Vec<ViolationKind> = validation.violations().iter().map(|v| *v.kind()).collect();
        assert!(kinds.contains(&ViolationKind::RevealerCannotShow));
        let violation = validation
            .violations()
            .iter()
            .find(|v| *v.kind() == ViolationKind::RevealerCannotShow)
            .unwrap();
        assert_eq!(violation.items().len(), 3);
    }

    #[test]
    fn test_disclosed_card_outside_guess_is_flagged() {
        let table = three_seats(true);
        let universe = table.universe().clone();
        let t = turn(&universe, ["Person1", "Weapon3", "Room3"], 0, Some(1), Some("Weapon1"));

        let validation = validate(&t, &table).unwrap();

        assert_eq!(validation.violations().len(), 1);
        assert_eq!(
            *validation.violations()[0].kind(),
            ViolationKind::DisclosedItemImpossible
        );
    }

    #[test]
    fn test_disclosed_card_held_elsewhere_is_flagged() {
        let mut table = three_seats(true);
        let universe = table.universe().clone();
        table.confirm(seat(2), id(&universe, "Weapon2")).unwrap();
        let t = turn(&universe, ["Person1", "Weapon2", "Room3"], 0, Some(1), Some("Weapon2"));

        let validation = validate(&t, &table).unwrap();

        assert_eq!(validation.violations().len(), 1);
        assert_eq!(validation.violations()[0].hand(), &HandId::new(1));
    }

    #[test]
    fn test_revealer_is_accuser_is_flagged() {
        let table = three_seats(false);
        let universe = table.universe().clone();
        let t = turn(&universe, ["Person1", "Weapon1", "Room1"], 1, Some(1), None);

        let validation = validate(&t, &table).unwrap();

        assert!(
            validation
                .violations()
                .iter()
                .any(|v| *v.kind() == ViolationKind::RevealerIsAccuser)
        );
        assert!(!validation.warnings(&table).is_empty());
    }

    #[test]
    fn test_validation_leaves_table_untouched() {
        let table = three_seats(true);
        let snapshot = table.clone();
        let universe = table.universe().clone();
        let t = turn(&universe, ["Person0", "Weapon0", "Room0"], 1, None, None);

        let validation = validate(&t, &table).unwrap();

        assert!(!validation.is_valid());
        assert_eq!(table, snapshot);
    }

    #[test]
    fn test_unknown_seat_is_an_error() {
        let table = three_seats(false);
        let universe = table.universe().clone();
        let t = turn(&universe, ["Person1", "Weapon1", "Room1"], 9, None, None);
        assert_eq!(
            validate(&t, &table),
            Err(DeductionError::UnknownHand {
                hand: HandId::new(9)
            })
        );
    }
}
