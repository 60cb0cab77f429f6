//! The holder index agrees with the hands.

use super::Invariant;
use crate::table::{Owner, Table};

/// Invariant: the index names an item's holder iff that hand confirmed it.
pub struct HolderIndexConsistent;

impl Invariant<Table> for HolderIndexConsistent {
    fn holds(table: &Table) -> bool {
        let index = table.holder_index();
        if index.len() != table.universe().len() {
            return false;
        }
        table.universe().ids().all(|item| {
            let holders: Vec<Owner> = table
                .owners()
                .filter(|owner| table.owner(*owner).is_ok_and(|hand| hand.contains(item)))
                .collect();
            match (index[item.index()], holders.as_slice()) {
                (None, []) => true,
                (Some(recorded), [actual]) => recorded == *actual,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Holder index matches the confirmed cards"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{id, seat, three_seats};

    #[test]
    fn test_confirm_keeps_index_consistent() {
        let mut table = three_seats(true);
        let item = id(table.universe(), "Room2");
        table.confirm(seat(2), item).unwrap();
        assert!(HolderIndexConsistent::holds(&table));
    }

    #[test]
    fn test_wrong_holder_violates() {
        let mut table = three_seats(false);
        let item = id(table.universe(), "Room2");
        table.confirm(seat(2), item).unwrap();
        table.holders_mut()[item.index()] = Some(seat(1));
        assert!(!HolderIndexConsistent::holds(&table));
    }

    #[test]
    fn test_forgotten_holder_violates() {
        let mut table = three_seats(false);
        let item = id(table.universe(), "Room2");
        table.confirm(Owner::Solution, item).unwrap();
        table.holders_mut()[item.index()] = None;
        assert!(!HolderIndexConsistent::holds(&table));
    }
}
