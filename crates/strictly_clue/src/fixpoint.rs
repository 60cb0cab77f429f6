//! Fixpoint driver: re-apply every rule until a pass learns nothing.

use crate::error::DeductionError;
use crate::invariants::assert_invariants;
use crate::item::ItemId;
use crate::rules::{deduce_by_exclusion, deduce_by_slot_count, deduce_from_turn};
use crate::table::Table;
use crate::turn::Turn;
use tracing::{error, info, instrument, trace};

/// Upper bound on passes before the driver gives up.
///
/// Every productive pass resolves at least one `Unknown` cell, so a table
/// can never need more passes than it has cells, plus the final quiet one.
pub fn pass_ceiling(table: &Table) -> usize {
    table.cell_count() + 1
}

/// Applies the single-turn, exclusion and slot-count rules until quiet.
///
/// Returns the number of passes made, counting the final pass that changed
/// nothing. Calling this again straight away therefore returns 1.
///
/// # Errors
///
/// Returns [`DeductionError::InternalInconsistency`] if the ceiling from
/// [`pass_ceiling`] is reached. Every rule only resolves `Unknown` cells,
/// so this signals a bug rather than a bad game.
#[instrument(skip_all, fields(turns = turns.len()))]
pub fn process_turns(table: &mut Table, turns: &[Turn]) -> Result<usize, DeductionError> {
    let ceiling = pass_ceiling(table);
    let items: Vec<ItemId> = table.universe().ids().collect();

    for pass in 1..=ceiling {
        let mut advanced = false;
        for turn in turns {
            advanced |= deduce_from_turn(table, turn);
        }
        advanced |= deduce_by_exclusion(table, &items);
        advanced |= deduce_by_slot_count(table);
        trace!(pass, advanced, unknown = table.unknown_count(), "Pass complete");

        if !advanced {
            assert_invariants(table);
            info!(
                passes = pass,
                unknown = table.unknown_count(),
                solved = table.is_solved(),
                "Deduction settled"
            );
            return Ok(pass);
        }
    }

    error!(ceiling, "Deduction did not settle");
    Err(DeductionError::InternalInconsistency { passes: ceiling })
}
