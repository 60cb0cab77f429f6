//! Deduction by elimination: a card that nobody else can hold is held by
//! the one owner left.

use crate::item::ItemId;
use crate::rules::known::new_known_card_update;
use crate::status::CardHeld;
use crate::table::{Owner, Table};
use tracing::{debug, instrument};

/// For each unplaced item, confirms it in the only owner still `Unknown`.
///
/// An item with a known holder is instead excluded from every other owner,
/// which catches holders recorded by hand through [`Table::confirm`]. Items
/// with two or more open owners are left alone. Returns true if any cell
/// changed.
#[instrument(skip_all, fields(items = items.len()))]
pub fn deduce_by_exclusion(table: &mut Table, items: &[ItemId]) -> bool {
    let mut changed = false;
    for item in items {
        if table.holder(*item).is_some() {
            changed |= new_known_card_update(table, &[*item]);
            continue;
        }
        let Some(owner) = sole_open_owner(table, *item) else {
            continue;
        };
        if table.settle(owner, *item) {
            debug!(%item, ?owner, "Only possible holder left");
            new_known_card_update(table, &[*item]);
            changed = true;
        }
    }
    changed
}

fn sole_open_owner(table: &Table, item: ItemId) -> Option<Owner> {
    let mut open = table
        .owners()
        .filter(|owner| table.status(*owner, item) == Ok(CardHeld::Unknown));
    let first = open.next()?;
    open.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};

    #[test]
    fn test_last_open_owner_receives_card() {
        let mut table = three_seats(false);
        let card = id(table.universe(), "Weapon2");
        for owner in [seat(0), seat(1), Owner::Solution] {
            table.set_status(owner, card, CardHeld::No).unwrap();
        }

        assert!(deduce_by_exclusion(&mut table, &[card]));

        assert_eq!(table.status(seat(2), card), Ok(CardHeld::Yes));
        assert_eq!(table.holder(card), Some(seat(2)));
        assert!(!deduce_by_exclusion(&mut table, &[card]));
    }

    #[test]
    fn test_known_holder_is_spread() {
        let mut table = three_seats(false);
        let card = id(table.universe(), "Person1");
        table.confirm(seat(1), card).unwrap();

        assert!(deduce_by_exclusion(&mut table, &[card]));

        assert_eq!(table.status(seat(0), card), Ok(CardHeld::No));
        assert_eq!(table.status(Owner::Solution, card), Ok(CardHeld::No));
        assert!(!deduce_by_exclusion(&mut table, &[card]));
    }

    #[test]
    fn test_two_open_owners_is_not_enough() {
        let mut table = three_seats(false);
        let card = id(table.universe(), "Room1");
        table.set_status(seat(0), card, CardHeld::No).unwrap();
        table.set_status(seat(2), card, CardHeld::No).unwrap();

        assert!(!deduce_by_exclusion(&mut table, &[card]));
        assert_eq!(table.holder(card), None);
    }

    #[test]
    fn test_solution_can_be_the_last_owner() {
        let mut table = three_seats(false);
        let card = id(table.universe(), "Person3");
        for index in 0..3 {
            table.set_status(seat(index), card, CardHeld::No).unwrap();
        }

        assert!(deduce_by_exclusion(&mut table, &[card]));

        assert_eq!(table.holder(card), Some(Owner::Solution));
        let sibling = id(table.universe(), "Person0");
        assert_eq!(table.status(Owner::Solution, sibling), Ok(CardHeld::No));
    }

    #[test]
    fn test_full_hand_cannot_take_last_card() {
        let mut table = three_seats(false);
        let universe = table.universe().clone();
        for name in ["Person1", "Weapon1", "Room1"] {
            table.confirm(seat(1), id(&universe, name)).unwrap();
        }
        let card = id(&universe, "Weapon2");
        for owner in [seat(0), seat(2), Owner::Solution] {
            table.set_status(owner, card, CardHeld::No).unwrap();
        }

        assert!(!deduce_by_exclusion(&mut table, &[card]));
        assert_eq!(table.status(seat(1), card), Ok(CardHeld::Unknown));
    }
}
