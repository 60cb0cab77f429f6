//! Hands: capacity-bounded confirmed sets over a checklist.
//!
//! The hidden solution is a hand too. It differs only in how it confirms
//! cards and counts slots, so both live in one type and dispatch on
//! [`HandKind`].

use crate::checklist::Checklist;
use crate::error::DeductionError;
use crate::item::{Category, ItemId, Universe};
use crate::status::CardHeld;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The three category slots of the solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSlots {
    person: Option<ItemId>,
    weapon: Option<ItemId>,
    room: Option<ItemId>,
}

impl SolutionSlots {
    /// The resolved item of a category, if any.
    pub fn get(&self, category: Category) -> Option<ItemId> {
        match category {
            Category::Person => self.person,
            Category::Weapon => self.weapon,
            Category::Room => self.room,
        }
    }

    /// The resolved person, if any.
    pub fn person(&self) -> Option<ItemId> {
        self.person
    }

    /// The resolved weapon, if any.
    pub fn weapon(&self) -> Option<ItemId> {
        self.weapon
    }

    /// The resolved room, if any.
    pub fn room(&self) -> Option<ItemId> {
        self.room
    }

    /// Returns true once every category is resolved.
    pub fn is_complete(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_some())
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<ItemId> {
        match category {
            Category::Person => &mut self.person,
            Category::Weapon => &mut self.weapon,
            Category::Room => &mut self.room,
        }
    }
}

/// What kind of owner a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandKind {
    /// A seated player holding `capacity` dealt cards.
    Ordinary {
        /// Cards dealt to this player.
        capacity: usize,
        /// True for the player running the assistant, whose hand is fully known.
        is_self: bool,
    },
    /// The hidden solution: one card per category.
    Solution(SolutionSlots),
}

/// Result of counting open slots against unknown cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotDeduction {
    /// True if any cell was resolved.
    pub advanced: bool,
    /// Items confirmed by this deduction. Empty when the only news was exclusion.
    pub newly_confirmed: Vec<ItemId>,
}

/// An owner's checklist plus the cards confirmed to be in it.
///
/// The universe is not serialized with the hand. A [`crate::Table`] rebinds
/// its own universe into every hand when it is built or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    name: String,
    #[serde(skip)]
    universe: Universe,
    checklist: Checklist,
    confirmed: Vec<ItemId>,
    kind: HandKind,
}

impl Hand {
    /// Creates a player hand.
    ///
    /// A self hand starts with every card it does not hold set to `No`;
    /// any other hand starts all `Unknown` apart from `known`.
    #[instrument(skip(name, universe, known), fields(name = %name.as_ref()))]
    pub fn new(
        name: impl AsRef<str>,
        capacity: usize,
        universe: &Universe,
        is_self: bool,
        known: &[ItemId],
    ) -> Result<Self, DeductionError> {
        let mut hand = Self {
            name: name.as_ref().to_string(),
            universe: universe.clone(),
            checklist: Checklist::new(universe.len(), CardHeld::Unknown),
            confirmed: Vec::with_capacity(capacity),
            kind: HandKind::Ordinary { capacity, is_self },
        };
        hand.seed(known)?;
        if is_self {
            for item in hand.checklist.unknown_items() {
                hand.checklist.resolve(item, CardHeld::No);
            }
        }
        Ok(hand)
    }

    /// Creates the solution hand, optionally with some slots already known.
    #[instrument(skip(universe, known))]
    pub fn solution(universe: &Universe, known: &[ItemId]) -> Result<Self, DeductionError> {
        let mut hand = Self {
            name: "Solution".to_string(),
            universe: universe.clone(),
            checklist: Checklist::new(universe.len(), CardHeld::Unknown),
            confirmed: Vec::with_capacity(Category::ALL.len()),
            kind: HandKind::Solution(SolutionSlots::default()),
        };
        hand.seed(known)?;
        Ok(hand)
    }

    fn seed(&mut self, known: &[ItemId]) -> Result<(), DeductionError> {
        for item in known {
            self.confirm(*item)?;
        }
        Ok(())
    }

    pub(crate) fn bind(&mut self, universe: &Universe) {
        self.universe = universe.clone();
    }

    /// Name of the owner.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The universe this hand is tracked over.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Kind of owner, including solution slots.
    pub fn kind(&self) -> &HandKind {
        &self.kind
    }

    /// The belief checklist.
    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    /// Number of cards this owner holds in total.
    pub fn capacity(&self) -> usize {
        match self.kind {
            HandKind::Ordinary { capacity, .. } => capacity,
            HandKind::Solution(_) => Category::ALL.len(),
        }
    }

    /// Returns true for the fully known hand of the assistant's user.
    pub fn is_self(&self) -> bool {
        matches!(self.kind, HandKind::Ordinary { is_self: true, .. })
    }

    /// Returns true for the solution hand.
    pub fn is_solution(&self) -> bool {
        matches!(self.kind, HandKind::Solution(_))
    }

    /// Resolved solution slot of a category. Always `None` for player hands.
    pub fn slot(&self, category: Category) -> Option<ItemId> {
        match &self.kind {
            HandKind::Solution(slots) => slots.get(category),
            HandKind::Ordinary { .. } => None,
        }
    }

    /// Status of an item in this hand's checklist.
    pub fn status(&self, item: ItemId) -> Result<CardHeld, DeductionError> {
        self.checklist.status(item)
    }

    /// Returns true if the item is confirmed in this hand.
    pub fn contains(&self, item: ItemId) -> bool {
        self.confirmed.contains(&item)
    }

    /// Items confirmed to be held, in the order they were learned.
    pub fn confirmed(&self) -> &[ItemId] {
        &self.confirmed
    }

    #[cfg(test)]
    pub(crate) fn confirmed_mut(&mut self) -> &mut Vec<ItemId> {
        &mut self.confirmed
    }

    /// Number of confirmed items.
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }

    /// Capacity not yet explained by confirmed items.
    pub fn open_slots(&self) -> usize {
        self.capacity().saturating_sub(self.confirmed.len())
    }

    /// Counts checklist cells with the given status.
    pub fn count(&self, status: CardHeld) -> usize {
        self.checklist.count(status)
    }

    /// Returns true once every card of this owner is known.
    pub fn is_fully_resolved(&self) -> bool {
        match &self.kind {
            HandKind::Solution(slots) => slots.is_complete(),
            HandKind::Ordinary { capacity, .. } => self.confirmed.len() == *capacity,
        }
    }

    /// Sets the status of an item, returning whether anything changed.
    ///
    /// `Yes` goes through [`Hand::confirm`], so it honours capacity and
    /// solution slots.
    #[instrument(skip(self), fields(hand = %self.name))]
    pub fn set_status(&mut self, item: ItemId, status: CardHeld) -> Result<bool, DeductionError> {
        match status {
            CardHeld::Yes => self.confirm(item),
            CardHeld::No | CardHeld::Unknown => self.checklist.set_status(item, status),
        }
    }

    /// Confirms that this hand holds an item.
    ///
    /// Does nothing if the item is already confirmed, the hand is full, or
    /// (for the solution) the item's category is already resolved. Confirming
    /// an item already marked `No` is a conflict.
    #[instrument(skip(self), fields(hand = %self.name))]
    pub fn confirm(&mut self, item: ItemId) -> Result<bool, DeductionError> {
        if !self.check_confirm(item)? {
            return Ok(false);
        }
        Ok(self.accept(item))
    }

    /// Checks a confirm without making it. `Ok(false)` means it would be a no-op.
    pub(crate) fn check_confirm(&self, item: ItemId) -> Result<bool, DeductionError> {
        let status = self.checklist.status(item)?;
        if self.absorbs(item) {
            return Ok(false);
        }
        if status == CardHeld::No {
            return Err(DeductionError::StatusConflict {
                item,
                from: CardHeld::No,
                to: CardHeld::Yes,
            });
        }
        Ok(true)
    }

    /// True if confirming `item` would be a no-op.
    fn absorbs(&self, item: ItemId) -> bool {
        match &self.kind {
            HandKind::Ordinary { capacity, .. } => {
                if self.confirmed.contains(&item) {
                    return true;
                }
                if self.confirmed.len() >= *capacity {
                    warn!(hand = %self.name, %item, capacity, "Hand already full, ignoring confirm");
                    return true;
                }
                false
            }
            HandKind::Solution(slots) => self
                .universe
                .category(item)
                .map(|category| slots.get(category).is_some())
                .unwrap_or(true),
        }
    }

    /// Confirms an `Unknown` item. Returns false for resolved cells,
    /// full hands, and resolved solution slots.
    pub(crate) fn accept(&mut self, item: ItemId) -> bool {
        if self.checklist.status(item) != Ok(CardHeld::Unknown) {
            return false;
        }
        match &mut self.kind {
            HandKind::Ordinary { capacity, .. } => {
                if self.confirmed.len() >= *capacity {
                    return false;
                }
                self.confirmed.push(item);
                self.checklist.resolve(item, CardHeld::Yes);
            }
            HandKind::Solution(slots) => {
                let Ok(category) = self.universe.category(item) else {
                    return false;
                };
                let slot = slots.slot_mut(category);
                if slot.is_some() {
                    return false;
                }
                *slot = Some(item);
                self.confirmed.push(item);
                self.checklist.resolve(item, CardHeld::Yes);
                for sibling in self.universe.of_category(category) {
                    self.checklist.resolve(sibling.id(), CardHeld::No);
                }
            }
        }
        debug!(hand = %self.name, %item, "Confirmed card");
        true
    }

    /// Marks an `Unknown` item as not held. Returns whether anything changed.
    pub(crate) fn exclude(&mut self, item: ItemId) -> bool {
        self.checklist.resolve(item, CardHeld::No)
    }

    /// Deduces cards by comparing open capacity against unknown cells.
    ///
    /// Player hands count slots globally: if the unknowns exactly fill the
    /// open slots they are all confirmed, and if no slots are open they are
    /// all excluded. The solution counts each category on its own: a
    /// category with a single unknown left resolves to it.
    #[instrument(skip(self), fields(hand = %self.name))]
    pub fn deduce_by_slot_count(&mut self) -> SlotDeduction {
        match self.kind {
            HandKind::Ordinary { capacity, .. } => {
                let unknown = self.checklist.unknown_items();
                if unknown.is_empty() {
                    return SlotDeduction::default();
                }
                let open = capacity.saturating_sub(self.confirmed.len());
                if open == 0 {
                    for item in &unknown {
                        self.exclude(*item);
                    }
                    debug!(excluded = unknown.len(), "Hand full, remaining cards excluded");
                    SlotDeduction {
                        advanced: true,
                        newly_confirmed: Vec::new(),
                    }
                } else if unknown.len() == open {
                    let newly_confirmed: Vec<ItemId> = unknown
                        .into_iter()
                        .filter(|item| self.accept(*item))
                        .collect();
                    SlotDeduction {
                        advanced: !newly_confirmed.is_empty(),
                        newly_confirmed,
                    }
                } else {
                    SlotDeduction::default()
                }
            }
            HandKind::Solution(slots) => {
                let mut newly_confirmed = Vec::new();
                for category in Category::ALL {
                    if slots.get(category).is_some() {
                        continue;
                    }
                    let candidates: Vec<ItemId> = self
                        .universe
                        .of_category(category)
                        .map(|item| item.id())
                        .filter(|id| self.checklist.status(*id) == Ok(CardHeld::Unknown))
                        .collect();
                    if let [only] = candidates.as_slice()
                        && self.accept(*only)
                    {
                        newly_confirmed.push(*only);
                    }
                }
                SlotDeduction {
                    advanced: !newly_confirmed.is_empty(),
                    newly_confirmed,
                }
            }
        }
    }
}
