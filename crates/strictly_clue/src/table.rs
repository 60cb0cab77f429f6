//! The table: seated hands in turn order, the solution, and who holds what.

use crate::error::DeductionError;
use crate::hand::{Hand, SlotDeduction};
use crate::item::{ItemId, Universe};
use crate::status::CardHeld;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Position of a hand in turn order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("seat {}", _0)]
pub struct HandId(usize);

impl HandId {
    /// Creates a seat id from a turn-order index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Turn-order index of this seat.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Anyone who can hold a card: a seated hand or the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// A player at the table.
    Seat(HandId),
    /// The hidden solution.
    Solution,
}

/// Complete belief state of one game.
///
/// Hands are only reachable mutably through table operations, so the holder
/// index always agrees with the hands' confirmed sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableState")]
pub struct Table {
    universe: Universe,
    seats: Vec<Hand>,
    solution: Hand,
    #[serde(skip_serializing)]
    holders: Vec<Option<Owner>>,
}

/// Serialized form of a [`Table`]. The holder index is rebuilt on load.
#[derive(Deserialize)]
struct TableState {
    universe: Universe,
    seats: Vec<Hand>,
    solution: Hand,
}

impl TryFrom<TableState> for Table {
    type Error = DeductionError;

    fn try_from(state: TableState) -> Result<Self, Self::Error> {
        Table::new(state.universe, state.seats, state.solution)
    }
}

impl Table {
    /// Seats `hands` in turn order next to the solution.
    ///
    /// Every hand must have been built over `universe`, and no item may be
    /// confirmed in two hands.
    #[instrument(skip_all, fields(seats = hands.len()))]
    pub fn new(
        universe: Universe,
        mut hands: Vec<Hand>,
        mut solution: Hand,
    ) -> Result<Self, DeductionError> {
        for hand in hands.iter_mut().chain(std::iter::once(&mut solution)) {
            if hand.checklist().len() != universe.len() {
                return Err(DeductionError::UniverseMismatch {
                    owner: hand.name().to_string(),
                    expected: universe.len(),
                    found: hand.checklist().len(),
                });
            }
            hand.bind(&universe);
        }

        let mut holders = vec![None; universe.len()];
        let owned = hands
            .iter()
            .enumerate()
            .map(|(index, hand)| (Owner::Seat(HandId::new(index)), hand))
            .chain(std::iter::once((Owner::Solution, &solution)));
        for (owner, hand) in owned {
            for item in hand.confirmed() {
                match holders.get(item.index()).copied().flatten() {
                    Some(holder) if holder != owner => {
                        return Err(DeductionError::StatusConflict {
                            item: *item,
                            from: CardHeld::No,
                            to: CardHeld::Yes,
                        });
                    }
                    _ => holders[item.index()] = Some(owner),
                }
            }
        }

        Ok(Self {
            universe,
            seats: hands,
            solution,
            holders,
        })
    }

    /// The card universe.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Seated hands in turn order.
    pub fn seats(&self) -> &[Hand] {
        &self.seats
    }

    /// Number of seated hands.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Seat ids in turn order.
    pub fn seat_ids(&self) -> impl Iterator<Item = HandId> + use<> {
        (0..self.seats.len()).map(HandId::new)
    }

    /// The solution hand.
    pub fn solution(&self) -> &Hand {
        &self.solution
    }

    /// Returns true once the solution is fully deduced.
    pub fn is_solved(&self) -> bool {
        self.solution.is_fully_resolved()
    }

    /// Looks up a seated hand.
    pub fn hand(&self, id: HandId) -> Result<&Hand, DeductionError> {
        self.seats
            .get(id.index())
            .ok_or(DeductionError::UnknownHand { hand: id })
    }

    /// Finds a seat by owner name.
    pub fn seat(&self, name: &str) -> Option<HandId> {
        self.seats
            .iter()
            .position(|hand| hand.name() == name)
            .map(HandId::new)
    }

    /// The first seat whose hand is fully known to the assistant's user.
    pub fn self_seat(&self) -> Option<HandId> {
        self.seats.iter().position(Hand::is_self).map(HandId::new)
    }

    /// Every owner: seats in turn order, then the solution.
    pub fn owners(&self) -> impl Iterator<Item = Owner> + use<> {
        (0..self.seats.len())
            .map(|index| Owner::Seat(HandId::new(index)))
            .chain(std::iter::once(Owner::Solution))
    }

    /// Looks up the hand of any owner.
    pub fn owner(&self, owner: Owner) -> Result<&Hand, DeductionError> {
        match owner {
            Owner::Seat(id) => self.hand(id),
            Owner::Solution => Ok(&self.solution),
        }
    }

    fn owner_mut(&mut self, owner: Owner) -> Result<&mut Hand, DeductionError> {
        match owner {
            Owner::Seat(id) => self
                .seats
                .get_mut(id.index())
                .ok_or(DeductionError::UnknownHand { hand: id }),
            Owner::Solution => Ok(&mut self.solution),
        }
    }

    /// The seat after `id` in turn order, wrapping around.
    pub fn next_seat(&self, id: HandId) -> HandId {
        HandId::new((id.index() + 1) % self.seats.len().max(1))
    }

    /// Seats walked past between the accuser and the revealer.
    ///
    /// With no revealer the walk goes all the way round to the accuser.
    pub fn passing_seats(&self, accuser: HandId, revealer: Option<HandId>) -> Vec<HandId> {
        let stop = revealer.unwrap_or(accuser);
        let mut passing = Vec::new();
        let mut seat = self.next_seat(accuser);
        while seat != stop && seat != accuser && passing.len() < self.seats.len() {
            passing.push(seat);
            seat = self.next_seat(seat);
        }
        passing
    }

    /// The known holder of an item, if any.
    pub fn holder(&self, item: ItemId) -> Option<Owner> {
        self.holders.get(item.index()).copied().flatten()
    }

    pub(crate) fn holder_index(&self) -> &[Option<Owner>] {
        &self.holders
    }

    #[cfg(test)]
    pub(crate) fn holders_mut(&mut self) -> &mut Vec<Option<Owner>> {
        &mut self.holders
    }

    #[cfg(test)]
    pub(crate) fn seats_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.seats
    }

    #[cfg(test)]
    pub(crate) fn solution_mut(&mut self) -> &mut Hand {
        &mut self.solution
    }

    /// Status of an item for an owner.
    pub fn status(&self, owner: Owner, item: ItemId) -> Result<CardHeld, DeductionError> {
        self.owner(owner)?.status(item)
    }

    /// Records a status by hand, as a human entering what they saw.
    ///
    /// `Yes` confirms the item and records its holder.
    #[instrument(skip(self))]
    pub fn set_status(
        &mut self,
        owner: Owner,
        item: ItemId,
        status: CardHeld,
    ) -> Result<bool, DeductionError> {
        match status {
            CardHeld::Yes => self.confirm(owner, item),
            CardHeld::No | CardHeld::Unknown => self.owner_mut(owner)?.set_status(item, status),
        }
    }

    /// Checks that [`Table::confirm`] would succeed, without changing anything.
    pub fn check_confirm(&self, owner: Owner, item: ItemId) -> Result<(), DeductionError> {
        if let Some(holder) = self.holder(item)
            && holder != owner
        {
            return Err(DeductionError::StatusConflict {
                item,
                from: CardHeld::No,
                to: CardHeld::Yes,
            });
        }
        self.owner(owner)?.check_confirm(item).map(|_| ())
    }

    /// Confirms an item in an owner's hand and records the owner as its holder.
    ///
    /// An item already held by another owner is a conflict.
    #[instrument(skip(self))]
    pub fn confirm(&mut self, owner: Owner, item: ItemId) -> Result<bool, DeductionError> {
        self.check_confirm(owner, item)?;
        let confirmed = self.owner_mut(owner)?.confirm(item)?;
        if confirmed {
            self.holders[item.index()] = Some(owner);
        }
        Ok(confirmed)
    }

    /// Confirms an `Unknown` cell. Anything else is left untouched.
    pub(crate) fn settle(&mut self, owner: Owner, item: ItemId) -> bool {
        let Ok(hand) = self.owner_mut(owner) else {
            return false;
        };
        if !hand.accept(item) {
            return false;
        }
        self.holders[item.index()] = Some(owner);
        true
    }

    /// Marks an `Unknown` cell as not held.
    pub(crate) fn exclude(&mut self, owner: Owner, item: ItemId) -> bool {
        self.owner_mut(owner)
            .map(|hand| hand.exclude(item))
            .unwrap_or(false)
    }

    /// Runs slot counting on one owner and records any new holders.
    pub(crate) fn deduce_slots(&mut self, owner: Owner) -> SlotDeduction {
        let Ok(hand) = self.owner_mut(owner) else {
            return SlotDeduction::default();
        };
        let deduction = hand.deduce_by_slot_count();
        for item in &deduction.newly_confirmed {
            self.holders[item.index()] = Some(owner);
        }
        if deduction.advanced {
            debug!(?owner, confirmed = deduction.newly_confirmed.len(), "Slot count advanced");
        }
        deduction
    }

    /// Number of checklist cells across every owner.
    pub fn cell_count(&self) -> usize {
        self.universe.len() * (self.seats.len() + 1)
    }

    /// Number of cells still `Unknown` across every owner.
    pub fn unknown_count(&self) -> usize {
        self.seats
            .iter()
            .chain(std::iter::once(&self.solution))
            .map(|hand| hand.count(CardHeld::Unknown))
            .sum()
    }
}
