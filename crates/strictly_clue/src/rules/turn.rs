//! Direct consequences of a single turn.

use crate::error::DeductionError;
use crate::rules::known::new_known_card_update;
use crate::table::{Owner, Table};
use crate::turn::Turn;
use tracing::{info, instrument, warn};

/// Applies what a turn says directly.
///
/// Every seat passed over between the accuser and the revealer lacks all
/// three guessed items. When the self seat accused and saw the disclosed
/// card, the revealer is confirmed to hold it and everyone else is told.
///
/// # Errors
///
/// Fails if the turn names a seat or item outside this table, or if the
/// disclosed card contradicts what is already known about the revealer.
#[instrument(skip(table, turn), fields(accuser = %turn.accuser()))]
pub fn apply_turn(table: &mut Table, turn: &Turn) -> Result<bool, DeductionError> {
    let accuser_is_self = table.hand(turn.accuser())?.is_self();
    if let Some(revealer) = turn.revealer() {
        table.hand(revealer)?;
    }
    let items = turn.items();
    for item in items {
        table.universe().get(item)?;
    }

    // Checked before any exclusion so a conflicting turn leaves the table untouched.
    let shown = match (turn.revealer(), turn.disclosed()) {
        (Some(revealer), Some(shown)) if accuser_is_self => {
            if turn.accusation().contains(shown) {
                table.check_confirm(Owner::Seat(revealer), shown)?;
                Some((revealer, shown))
            } else {
                warn!(%shown, "Disclosed card was not guessed, ignoring it");
                None
            }
        }
        _ => None,
    };

    let mut changed = false;
    for passing in table.passing_seats(turn.accuser(), turn.revealer()) {
        for item in items {
            changed |= table.exclude(Owner::Seat(passing), item);
        }
    }

    if let Some((revealer, shown)) = shown {
        changed |= table.confirm(Owner::Seat(revealer), shown)?;
        changed |= new_known_card_update(table, &[shown]);
    }

    info!(
        revealer = ?turn.revealer(),
        changed,
        unknown = table.unknown_count(),
        "Turn applied"
    );
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};
    use crate::{Accusation, CardHeld, HandId};

    fn accusation(table: &Table, p: &str, w: &str, r: &str) -> Accusation {
        let universe = table.universe();
        Accusation::new(universe, id(universe, p), id(universe, w), id(universe, r)).unwrap()
    }

    #[test]
    fn test_nobody_revealed_excludes_every_other_seat() {
        let mut table = three_seats(false);
        let acc = accusation(&table, "Person3", "Weapon3", "Room3");
        let turn = Turn::new(acc, HandId::new(0), None, None);

        assert_eq!(apply_turn(&mut table, &turn), Ok(true));

        for item in acc.items() {
            assert_eq!(table.status(seat(1), item), Ok(CardHeld::No));
            assert_eq!(table.status(seat(2), item), Ok(CardHeld::No));
            assert_eq!(table.status(seat(0), item), Ok(CardHeld::Unknown));
        }
    }

    #[test]
    fn test_only_seats_before_revealer_are_excluded() {
        let mut table = three_seats(false);
        let acc = accusation(&table, "Person2", "Weapon3", "Room3");
        let turn = Turn::new(acc, HandId::new(0), Some(HandId::new(2)), None);

        assert_eq!(apply_turn(&mut table, &turn), Ok(true));

        for item in acc.items() {
            assert_eq!(table.status(seat(1), item), Ok(CardHeld::No));
            assert_eq!(table.status(seat(2), item), Ok(CardHeld::Unknown));
        }
    }

    #[test]
    fn test_disclosed_card_confirmed_for_self_accuser() {
        let mut table = three_seats(true);
        let acc = accusation(&table, "Person1", "Weapon3", "Room3");
        let shown = acc.person();
        let turn = Turn::new(acc, HandId::new(0), Some(HandId::new(1)), Some(shown));

        assert_eq!(apply_turn(&mut table, &turn), Ok(true));

        assert_eq!(table.status(seat(1), shown), Ok(CardHeld::Yes));
        assert_eq!(table.holder(shown), Some(seat(1)));
        assert_eq!(table.status(seat(2), shown), Ok(CardHeld::No));
        assert_eq!(table.status(Owner::Solution, shown), Ok(CardHeld::No));
    }

    #[test]
    fn test_disclosed_card_ignored_for_other_accuser() {
        let mut table = three_seats(false);
        let acc = accusation(&table, "Person2", "Weapon3", "Room3");
        let turn = Turn::new(acc, HandId::new(1), Some(HandId::new(2)), Some(acc.person()));

        assert_eq!(apply_turn(&mut table, &turn), Ok(false));
        assert_eq!(table.holder(acc.person()), None);
    }

    #[test]
    fn test_unknown_seat_is_rejected() {
        let mut table = three_seats(false);
        let acc = accusation(&table, "Person2", "Weapon3", "Room3");
        let stray = HandId::new(7);
        let turn = Turn::new(acc, HandId::new(0), Some(stray), None);

        assert_eq!(
            apply_turn(&mut table, &turn),
            Err(DeductionError::UnknownHand { hand: stray })
        );
        assert_eq!(table.unknown_count(), table.cell_count());
    }

    #[test]
    fn test_disclosed_card_ruled_out_leaves_table_unchanged() {
        let mut table = three_seats(true);
        let acc = accusation(&table, "Person3", "Weapon3", "Room3");
        table.exclude(seat(2), acc.weapon());
        let before = table.clone();
        let turn = Turn::new(acc, HandId::new(0), Some(HandId::new(2)), Some(acc.weapon()));

        assert_eq!(
            apply_turn(&mut table, &turn),
            Err(DeductionError::StatusConflict {
                item: acc.weapon(),
                from: CardHeld::No,
                to: CardHeld::Yes,
            })
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_disclosed_card_held_elsewhere_leaves_table_unchanged() {
        let mut table = three_seats(true);
        let acc = accusation(&table, "Person1", "Weapon3", "Room3");
        table.confirm(seat(1), acc.person()).unwrap();
        let before = table.clone();
        let turn = Turn::new(acc, HandId::new(0), Some(HandId::new(2)), Some(acc.person()));

        assert!(matches!(
            apply_turn(&mut table, &turn),
            Err(DeductionError::StatusConflict { .. })
        ));
        assert_eq!(table, before);
    }

    #[test]
    fn test_reapplying_changes_nothing() {
        let mut table = three_seats(true);
        let acc = accusation(&table, "Person2", "Weapon3", "Room3");
        let turn = Turn::new(acc, HandId::new(0), Some(HandId::new(2)), Some(acc.person()));

        assert_eq!(apply_turn(&mut table, &turn), Ok(true));
        assert_eq!(apply_turn(&mut table, &turn), Ok(false));
    }
}
