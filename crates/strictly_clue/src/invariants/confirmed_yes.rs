//! Confirmed sets and `Yes` cells describe the same cards.

use super::Invariant;
use crate::status::CardHeld;
use crate::table::Table;

/// Invariant: an item reads `Yes` exactly when its owner has confirmed it.
pub struct ConfirmedAreYes;

impl Invariant<Table> for ConfirmedAreYes {
    fn holds(table: &Table) -> bool {
        table.owners().all(|owner| {
            table.owner(owner).is_ok_and(|hand| {
                hand.confirmed()
                    .iter()
                    .all(|item| hand.status(*item) == Ok(CardHeld::Yes))
                    && hand.count(CardHeld::Yes) == hand.confirmed_count()
            })
        })
    }

    fn description() -> &'static str {
        "Confirmed items read Yes and every Yes is confirmed"
    }
}
