//! Per-owner belief map over the full card universe.

use crate::error::DeductionError;
use crate::item::ItemId;
use crate::status::CardHeld;
use serde::{Deserialize, Serialize};

/// One [`CardHeld`] cell per item in the universe, indexed by [`ItemId`].
///
/// The checklist never grows or shrinks after creation, and its cells only
/// move forward along the status lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    cells: Vec<CardHeld>,
}

impl Checklist {
    /// Creates a checklist of `len` cells, all set to `initial`.
    pub fn new(len: usize, initial: CardHeld) -> Self {
        Self {
            cells: vec![initial; len],
        }
    }

    /// Number of cells; always the size of the universe.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the checklist tracks no items.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the status of an item.
    pub fn status(&self, item: ItemId) -> Result<CardHeld, DeductionError> {
        self.cells
            .get(item.index())
            .copied()
            .ok_or(DeductionError::UnknownItem { item })
    }

    /// Sets the status of an item, returning whether the stored value changed.
    ///
    /// Only `Unknown -> Yes` and `Unknown -> No` change anything; writing the
    /// current value is a no-op, any other transition is a conflict.
    pub fn set_status(&mut self, item: ItemId, status: CardHeld) -> Result<bool, DeductionError> {
        let cell = self
            .cells
            .get_mut(item.index())
            .ok_or(DeductionError::UnknownItem { item })?;
        if !cell.can_become(status) {
            return Err(DeductionError::StatusConflict {
                item,
                from: *cell,
                to: status,
            });
        }
        let changed = *cell != status;
        *cell = status;
        Ok(changed)
    }

    /// Resolves an `Unknown` cell. Resolved or out-of-range cells are left alone.
    pub(crate) fn resolve(&mut self, item: ItemId, status: CardHeld) -> bool {
        match self.cells.get_mut(item.index()) {
            Some(cell) if *cell == CardHeld::Unknown && status != CardHeld::Unknown => {
                *cell = status;
                true
            }
            _ => false,
        }
    }

    /// Iterates `(item, status)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, CardHeld)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, status)| (ItemId::new(index), *status))
    }

    /// Counts the cells holding `status`.
    pub fn count(&self, status: CardHeld) -> usize {
        self.cells.iter().filter(|cell| **cell == status).count()
    }

    /// Items whose status is still `Unknown`.
    pub fn unknown_items(&self) -> Vec<ItemId> {
        self.iter()
            .filter(|(_, status)| *status == CardHeld::Unknown)
            .map(|(item, _)| item)
            .collect()
    }
}
