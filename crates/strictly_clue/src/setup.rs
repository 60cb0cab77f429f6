//! Validated construction of a game table.

use crate::error::DeductionError;
use crate::hand::Hand;
use crate::item::{Category, ItemId, Universe};
use crate::rules::new_known_card_update;
use crate::table::Table;
use tracing::{info, instrument};

/// Problems with a table description.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// No seat is the self seat.
    #[display("No seat is marked as the self seat")]
    MissingSelf,

    /// More than one seat is the self seat.
    #[display("Only one seat can be the self seat, found {}", _0)]
    DuplicateSelf(usize),

    /// The self seat has nobody to play against.
    #[display("At least one opponent is required")]
    NoOpponents,

    /// A seat was given an empty name.
    #[display("Seat {} has an empty name", _0)]
    EmptyName(usize),

    /// Two seats share a name.
    #[display("Seat name '{}' is used more than once", _0)]
    DuplicateName(String),

    /// The self seat lists the same card twice.
    #[display("Card {} is listed twice in the self hand", _0)]
    DuplicateCard(ItemId),

    /// Hand sizes do not account for every card outside the solution.
    #[display("Hands hold {} cards, but {} are dealt", dealt, expected)]
    CardCountMismatch {
        /// Sum of every seat's capacity.
        dealt: usize,
        /// Universe size minus the solution.
        expected: usize,
    },

    /// A card or hand could not be built.
    #[display("{}", _0)]
    Deduction(DeductionError),
}

impl std::error::Error for SetupError {}

impl From<DeductionError> for SetupError {
    fn from(error: DeductionError) -> Self {
        Self::Deduction(error)
    }
}

#[derive(Debug, Clone)]
enum SeatPlan {
    Own(Vec<ItemId>),
    Opponent(usize),
}

/// Builder for a [`Table`] in turn order.
///
/// Exactly one seat is the self seat, whose cards are known. Building runs
/// the known-card update for those cards, so the table starts consistent.
#[derive(Debug, Clone)]
pub struct TableSetup {
    universe: Universe,
    seats: Vec<(String, SeatPlan)>,
}

impl TableSetup {
    /// Starts an empty table over a universe.
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            seats: Vec::new(),
        }
    }

    /// Seats the self player holding `items`.
    pub fn with_self(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = ItemId>,
    ) -> Self {
        self.seats
            .push((name.into(), SeatPlan::Own(items.into_iter().collect())));
        self
    }

    /// Seats an opponent holding `capacity` unknown cards.
    pub fn with_opponent(mut self, name: impl Into<String>, capacity: usize) -> Self {
        self.seats.push((name.into(), SeatPlan::Opponent(capacity)));
        self
    }

    /// Number of seats so far.
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Checks the description and builds the table.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] if the seating is malformed, the hand sizes
    /// do not match the deck, or a self card is outside the universe.
    #[instrument(skip(self), fields(seats = self.seats.len()))]
    pub fn build(self) -> Result<Table, SetupError> {
        self.check()?;

        let mut hands = Vec::with_capacity(self.seats.len());
        let mut known = Vec::new();
        for (name, plan) in &self.seats {
            let hand = match plan {
                SeatPlan::Own(items) => {
                    known.extend_from_slice(items);
                    Hand::new(name, items.len(), &self.universe, true, items)?
                }
                SeatPlan::Opponent(capacity) => {
                    Hand::new(name, *capacity, &self.universe, false, &[])?
                }
            };
            hands.push(hand);
        }
        let solution = Hand::solution(&self.universe, &[])?;

        let mut table = Table::new(self.universe, hands, solution)?;
        new_known_card_update(&mut table, &known);
        info!(
            seats = table.seat_count(),
            cards = table.universe().len(),
            "Table set up"
        );
        Ok(table)
    }

    fn check(&self) -> Result<(), SetupError> {
        let selves = self
            .seats
            .iter()
            .filter(|(_, plan)| matches!(plan, SeatPlan::Own(_)))
            .count();
        match selves {
            0 => return Err(SetupError::MissingSelf),
            1 => {}
            n => return Err(SetupError::DuplicateSelf(n)),
        }
        if self.seats.len() < 2 {
            return Err(SetupError::NoOpponents);
        }

        for (index, (name, _)) in self.seats.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(SetupError::EmptyName(index));
            }
            if self.seats[..index].iter().any(|(other, _)| other == name) {
                return Err(SetupError::DuplicateName(name.clone()));
            }
        }

        for (_, plan) in &self.seats {
            if let SeatPlan::Own(items) = plan {
                for (index, item) in items.iter().enumerate() {
                    self.universe.get(*item)?;
                    if items[..index].contains(item) {
                        return Err(SetupError::DuplicateCard(*item));
                    }
                }
            }
        }

        let dealt: usize = self
            .seats
            .iter()
            .map(|(_, plan)| match plan {
                SeatPlan::Own(items) => items.len(),
                SeatPlan::Opponent(capacity) => *capacity,
            })
            .sum();
        let expected = self.universe.len().saturating_sub(Category::ALL.len());
        if dealt != expected {
            return Err(SetupError::CardCountMismatch { dealt, expected });
        }
        Ok(())
    }
}
