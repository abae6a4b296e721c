//! Card catalog lookup.
//!
//! The engine reads card metadata through the `CardCatalog` trait so that
//! hosts can plug in whatever card database they already ship.
//! `CardRegistry` is the in-memory implementation used by tests and by
//! hosts without a database of their own.

use rustc_hash::FxHashMap;

use super::definition::{CardClass, CardDefinition, CardId};

/// Read-only card metadata source.
pub trait CardCatalog {
    /// Look up a card definition. `None` for identifiers the catalog
    /// does not know.
    fn card(&self, id: &CardId) -> Option<&CardDefinition>;

    /// All secret cards a secret of `class` could be, in a stable order.
    fn secrets_for_class(&self, class: CardClass) -> Vec<CardId>;
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use secret_tracker::cards::{CardCatalog, CardClass, CardDefinition, CardId, CardRegistry, CardSet};
///
/// let hunter = CardClass::new(3);
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new("EX1_554", "Snake Trap", CardSet::new(2))
///         .with_class(hunter)
///         .as_secret(),
/// );
///
/// let found = registry.card(&CardId::new("EX1_554")).unwrap();
/// assert_eq!(found.name, "Snake Trap");
/// assert_eq!(registry.secrets_for_class(hunter).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    /// Registration order, so class pools come out deterministically.
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.order.push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
    }

    /// Register several cards at once (builder pattern).
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = CardDefinition>) -> Self {
        for card in cards {
            self.register(card);
        }
        self
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardDefinition> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(move |id| self.cards.get(id))
    }
}

impl CardCatalog for CardRegistry {
    fn card(&self, id: &CardId) -> Option<&CardDefinition> {
        self.get(id)
    }

    fn secrets_for_class(&self, class: CardClass) -> Vec<CardId> {
        self.iter()
            .filter(|c| c.is_secret_of(class))
            .map(|c| c.id.clone())
            .collect()
    }
}
