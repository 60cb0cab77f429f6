//! Slot counting across every owner at the table.

use crate::rules::known::new_known_card_update;
use crate::table::Table;
use tracing::instrument;

/// Runs slot counting on every owner and spreads any newly placed cards.
///
/// See [`crate::Hand::deduce_by_slot_count`] for the per-hand rule.
#[instrument(skip(table))]
pub fn deduce_by_slot_count(table: &mut Table) -> bool {
    let mut changed = false;
    for owner in table.owners() {
        let deduction = table.deduce_slots(owner);
        changed |= deduction.advanced;
        changed |= new_known_card_update(table, &deduction.newly_confirmed);
    }
    changed
}
