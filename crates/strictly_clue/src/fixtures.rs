//! Shared tables for unit tests.

use crate::{Hand, HandId, ItemId, Owner, Table, Universe, new_known_card_update};

/// Looks up a card by name.
pub(crate) fn id(universe: &Universe, name: &str) -> ItemId {
    universe.find(name).expect("fixture card exists")
}

/// Owner of a seat by index.
pub(crate) fn seat(index: usize) -> Owner {
    Owner::Seat(HandId::new(index))
}

/// Four of each category and three seats of three cards.
///
/// Seat `i` really holds `Person{i}`, `Weapon{i}` and `Room{i}`; the
/// solution is the index-3 triple. Nothing is known yet unless `self_seat`
/// makes seat 0 the fully known hand, whose cards are then excluded
/// everywhere else.
pub(crate) fn three_seats(self_seat: bool) -> Table {
    let universe = Universe::numbered(4, 4, 4);
    let hands = (0..3)
        .map(|i| {
            let is_self = self_seat && i == 0;
            let known = if is_self {
                vec![
                    id(&universe, &format!("Person{i}")),
                    id(&universe, &format!("Weapon{i}")),
                    id(&universe, &format!("Room{i}")),
                ]
            } else {
                Vec::new()
            };
            Hand::new(format!("Player{i}"), 3, &universe, is_self, &known).expect("fixture hand")
        })
        .collect();
    let solution = Hand::solution(&universe, &[]).expect("fixture solution");
    let mut table = Table::new(universe, hands, solution).expect("fixture table");
    let known = table.seats()[0].confirmed().to_vec();
    new_known_card_update(&mut table, &known);
    table
}
