//! Card identities and the universe arena that owns them.

use crate::error::DeductionError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Category of a card. Every item belongs to exactly one.
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
    strum::Display,
    strum::EnumIter,
)]
pub enum Category {
    /// A suspect.
    Person,
    /// A murder weapon.
    Weapon,
    /// A room of the mansion.
    Room,
}

impl Category {
    /// All categories, in accusation order.
    pub const ALL: [Category; 3] = [Category::Person, Category::Weapon, Category::Room];
}

/// Stable identifier of an item, assigned by its [`Universe`].
///
/// The id is the item's index in the universe arena, so checklists can be
/// plain vectors and membership is a range check.
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
#[display("#{}", _0)]
pub struct ItemId(usize);

impl ItemId {
    /// Creates an id from a raw index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this item.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single card: a name and a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
}

impl Item {
    /// Returns the id of this item.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the display name of this item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category of this item.
    pub fn category(&self) -> Category {
        self.category
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The full set of cards in play.
///
/// Built once per game and shared by every hand. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Universe {
    items: Arc<[Item]>,
}

impl Default for Universe {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

const STANDARD_PEOPLE: [&str; 6] = [
    "Col. Mustard",
    "Miss Scarlet",
    "Mr. Green",
    "Mrs. Peacock",
    "Mrs. White",
    "Prof. Plum",
];

const STANDARD_WEAPONS: [&str; 6] = [
    "Candlestick",
    "Revolver",
    "Rope",
    "Wrench",
    "Lead Pipe",
    "Knife",
];

const STANDARD_ROOMS: [&str; 9] = [
    "Study",
    "Library",
    "Conservatory",
    "Hall",
    "Kitchen",
    "Ballroom",
    "Dining Room",
    "Lounge",
    "Billiard Room",
];

impl Universe {
    /// Creates a universe from `(name, category)` pairs, assigning ids in order.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        let items: Vec<Item> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (name, category))| Item {
                id: ItemId::new(index),
                name: name.into(),
                category,
            })
            .collect();
        Self {
            items: items.into(),
        }
    }

    /// The 21-card universe of the classic board game.
    #[instrument]
    pub fn standard() -> Self {
        let people = STANDARD_PEOPLE.iter().map(|n| (*n, Category::Person));
        let weapons = STANDARD_WEAPONS.iter().map(|n| (*n, Category::Weapon));
        let rooms = STANDARD_ROOMS.iter().map(|n| (*n, Category::Room));
        Self::new(people.chain(weapons).chain(rooms))
    }

    /// A synthetic universe named `Person0..`, `Weapon0..`, `Room0..`.
    #[instrument]
    pub fn numbered(people: usize, weapons: usize, rooms: usize) -> Self {
        let people = (0..people).map(|i| (format!("Person{i}"), Category::Person));
        let weapons = (0..weapons).map(|i| (format!("Weapon{i}"), Category::Weapon));
        let rooms = (0..rooms).map(|i| (format!("Room{i}"), Category::Room));
        Self::new(people.chain(weapons).chain(rooms))
    }

    /// Number of items in the universe.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the universe holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in id order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// All item ids, in order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(Item::id)
    }

    /// Returns true if the id belongs to this universe.
    pub fn contains(&self, id: ItemId) -> bool {
        id.index() < self.items.len()
    }

    /// Looks up an item, failing with [`DeductionError::UnknownItem`].
    pub fn get(&self, id: ItemId) -> Result<&Item, DeductionError> {
        self.items
            .get(id.index())
            .ok_or(DeductionError::UnknownItem { item: id })
    }

    /// Returns the category of an item.
    pub fn category(&self, id: ItemId) -> Result<Category, DeductionError> {
        self.get(id).map(Item::category)
    }

    /// Returns the name of an item, or its id if it is not in this universe.
    pub fn name(&self, id: ItemId) -> String {
        self.get(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|_| id.to_string())
    }

    /// Finds an item by exact name.
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.items.iter().find(|item| item.name == name).map(Item::id)
    }

    /// Items belonging to one category.
    pub fn of_category(&self, category: Category) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }
}
