//! Entity identification and boundary snapshots.
//!
//! Every object the game client reports (cards in play, secrets, heroes)
//! has a numeric `EntityId`. The tracker never holds the client's live
//! objects; the host copies the handful of facts the engine needs into an
//! `EntitySnapshot` when an event arrives.
//!
//! ## ID Layout
//!
//! The client hands out low ids to the objects each player starts the game
//! with (deck and starting hand). Anything above a configured threshold was
//! created later. See `EngineConfig::starting_entity_threshold`.
//!
//! ## Usage
//!
//! ```
//! use secret_tracker::cards::{CardClass, CardId};
//! use secret_tracker::core::{EntityId, EntitySnapshot};
//!
//! let mage = CardClass::new(4);
//! let hidden = EntitySnapshot::secret(EntityId(31), mage);
//! assert!(hidden.resolved_card().is_none());
//!
//! let revealed = hidden.clone().with_card(CardId::new("EX1_287"));
//! assert_eq!(revealed.resolved_card(), Some(&CardId::new("EX1_287")));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{CardClass, CardId};

/// Unique identifier for any game entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this id falls in the range reserved for starting objects.
    #[must_use]
    pub const fn is_starting(self, threshold: u32) -> bool {
        self.0 < threshold
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Read-only view of a client object, captured once at the boundary.
///
/// The engine only ever asks these five questions about an object, so the
/// host fills them in from whatever tag collection its client exposes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// The client's id for this object.
    pub id: EntityId,

    /// Resolved card identifier, if the object has been revealed.
    pub card_id: Option<CardId>,

    /// Owning class tag. Secrets without one are ignored.
    pub class: Option<CardClass>,

    /// Is this a secret-type hidden object?
    pub is_secret: bool,

    /// Was this object generated by an effect rather than drawn from the deck?
    pub created: bool,
}

impl EntitySnapshot {
    /// Create a snapshot of a plain object with no tags set.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            card_id: None,
            class: None,
            is_secret: false,
            created: false,
        }
    }

    /// Create a snapshot of a face-down secret owned by `class`.
    #[must_use]
    pub fn secret(id: EntityId, class: CardClass) -> Self {
        Self {
            is_secret: true,
            class: Some(class),
            ..Self::new(id)
        }
    }

    /// Set the resolved card id (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card_id: CardId) -> Self {
        self.card_id = Some(card_id);
        self
    }

    /// Set the owning class (builder pattern).
    #[must_use]
    pub fn with_class(mut self, class: CardClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Mark the object as a secret (builder pattern).
    #[must_use]
    pub fn as_secret(mut self) -> Self {
        self.is_secret = true;
        self
    }

    /// Mark the object as created by an effect (builder pattern).
    #[must_use]
    pub fn created(mut self) -> Self {
        self.created = true;
        self
    }

    /// The resolved card id, treating an empty identifier as unknown.
    #[must_use]
    pub fn resolved_card(&self) -> Option<&CardId> {
        self.card_id.as_ref().filter(|id| !id.is_empty())
    }

    /// Check if the object has a resolved card id.
    #[must_use]
    pub fn has_card_id(&self) -> bool {
        self.resolved_card().is_some()
    }
}

impl std::fmt::Display for EntitySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(card_id) = self.resolved_card() {
            write!(f, " [{}]", card_id)?;
        }
        if self.created {
            write!(f, " (created)")?;
        }
        Ok(())
    }
}
