//! Spreading a known holder to everyone else.

use crate::item::ItemId;
use crate::table::Table;
use tracing::{debug, instrument};

/// Marks each item `No` for every owner except its known holder.
///
/// Items without a known holder are skipped. Returns true if any cell changed.
#[instrument(skip(table))]
pub fn new_known_card_update(table: &mut Table, items: &[ItemId]) -> bool {
    let mut changed = false;
    for item in items {
        let Some(holder) = table.holder(*item) else {
            continue;
        };
        for owner in table.owners() {
            if owner != holder && table.exclude(owner, *item) {
                debug!(%item, ?owner, "Excluded card held elsewhere");
                changed = true;
            }
        }
    }
    changed
}
