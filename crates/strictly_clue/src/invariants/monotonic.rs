//! Beliefs never move backwards.

use crate::status::CardHeld;
use crate::table::Table;

/// Invariant over two snapshots: resolved cells and known holders survive.
///
/// Unlike the structural invariants this compares a table before and after
/// an operation, so it is not an [`super::Invariant`].
pub struct MonotonicBeliefs;

impl MonotonicBeliefs {
    /// Returns true if every resolved cell of `before` reads the same in
    /// `after` and every known holder is still known.
    pub fn holds_between(before: &Table, after: &Table) -> bool {
        if before.universe().len() != after.universe().len()
            || before.seat_count() != after.seat_count()
        {
            return false;
        }
        let cells_kept = before.owners().all(|owner| {
            before.universe().ids().all(|item| match before.status(owner, item) {
                Ok(CardHeld::Unknown) => true,
                Ok(status) => after.status(owner, item) == Ok(status),
                Err(_) => false,
            })
        });
        let holders_kept = before.universe().ids().all(|item| {
            before
                .holder(item)
                .is_none_or(|holder| after.holder(item) == Some(holder))
        });
        cells_kept && holders_kept
    }

    /// Human-readable description of the invariant.
    pub fn description() -> &'static str {
        "Resolved cells never change"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};
    use crate::{Accusation, HandId, Turn, apply_turn, process_turns};

    #[test]
    fn test_deduction_is_monotonic() {
        let mut table = three_seats(true);
        let universe = table.universe().clone();
        let accusation = Accusation::new(
            &universe,
            id(&universe, "Person1"),
            id(&universe, "Weapon3"),
            id(&universe, "Room3"),
        )
        .unwrap();
        let turn = Turn::new(
            accusation,
            HandId::new(0),
            Some(HandId::new(1)),
            Some(accusation.person()),
        );

        let before = table.clone();
        apply_turn(&mut table, &turn).unwrap();
        process_turns(&mut table, &[turn]).unwrap();

        assert!(MonotonicBeliefs::holds_between(&before, &table));
    }

    #[test]
    fn test_reverted_cell_violates() {
        let mut before = three_seats(false);
        let item = id(before.universe(), "Weapon0");
        let after = before.clone();
        before.set_status(seat(2), item, CardHeld::No).unwrap();

        assert!(!MonotonicBeliefs::holds_between(&before, &after));
        assert!(MonotonicBeliefs::holds_between(&after, &before));
    }
}
