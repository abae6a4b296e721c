//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable catalog facts about a card: its
//! name, the set it was printed in, the class it belongs to and whether it
//! is a secret. Per-game facts (who played it, was it created) live on
//! `EntitySnapshot` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a card definition, as the game client spells it
/// (e.g. `"EX1_130"`).
///
/// An empty identifier means "not resolved yet" and is never a valid
/// candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is empty (unset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card set (expansion) identifier.
///
/// Opaque to the engine; it only compares sets against the active and
/// wild-only lists in `EngineConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet(pub u16);

impl CardSet {
    /// Create a new card set ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({})", self.0)
    }
}

/// Owning class identifier. Secrets are drawn from a per-class pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardClass(pub u16);

impl CardClass {
    /// Create a new class ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use secret_tracker::cards::{CardClass, CardDefinition, CardSet};
///
/// let ice_block = CardDefinition::new("EX1_295", "Ice Block", CardSet::new(3))
///     .with_class(CardClass::new(4))
///     .as_secret();
///
/// assert!(ice_block.secret);
/// assert_eq!(ice_block.id.as_str(), "EX1_295");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Set the card was printed in.
    pub set: CardSet,

    /// Owning class. `None` for neutral cards.
    pub class: Option<CardClass>,

    /// Is this a secret card?
    pub secret: bool,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, set: CardSet) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            set,
            class: None,
            secret: false,
        }
    }

    /// Set the owning class (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: CardClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Mark as a secret card (builder pattern).
    #[must_use]
    pub fn as_secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Check if this is a secret belonging to `class`.
    #[must_use]
    pub fn is_secret_of(&self, class: CardClass) -> bool {
        self.secret && self.class == Some(class)
    }
}
