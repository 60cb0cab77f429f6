//! Every owner tracks the whole universe and stays within capacity.

use super::Invariant;
use crate::table::Table;

/// Invariant: each checklist covers the universe and no hand overflows.
pub struct ChecklistComplete;

impl Invariant<Table> for ChecklistComplete {
    fn holds(table: &Table) -> bool {
        let universe = table.universe().len();
        table.owners().all(|owner| {
            table.owner(owner).is_ok_and(|hand| {
                hand.checklist().len() == universe && hand.confirmed_count() <= hand.capacity()
            })
        })
    }

    fn description() -> &'static str {
        "Every checklist covers the universe within hand capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, three_seats};
    use crate::{Hand, Universe};

    #[test]
    fn test_fresh_table_holds() {
        assert!(ChecklistComplete::holds(&three_seats(true)));
    }

    #[test]
    fn test_short_checklist_violates() {
        let mut table = three_seats(false);
        let small = Universe::numbered(1, 1, 1);
        table.seats_mut()[1] = Hand::new("Player1", 3, &small, false, &[]).unwrap();
        assert!(!ChecklistComplete::holds(&table));
    }

    #[test]
    fn test_overflowing_hand_violates() {
        let mut table = three_seats(false);
        let extra = id(table.universe(), "Room0");
        let hand = &mut table.seats_mut()[0];
        for _ in 0..4 {
            hand.confirmed_mut().push(extra);
        }
        assert!(!ChecklistComplete::holds(&table));
    }
}
