//! Pending fast-combat state.
//!
//! When an attack is declared, several of the opponent's secrets may be
//! able to react to it. Normally the host excludes the ones that did not
//! react once the attack resolves. In fast combat the client reveals the
//! triggered secret before the attack event arrives, so the engine has to
//! apply those exclusions itself, right before the triggered secret is
//! removed.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::EntityId;

/// An attack whose secret exclusions have not been applied yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCombat {
    pub attacker: EntityId,
    pub defender: Option<EntityId>,
    /// Secret cards that would have triggered on this attack.
    pub would_trigger: Vec<CardId>,
}

impl PendingCombat {
    #[must_use]
    pub fn new(attacker: EntityId) -> Self {
        Self {
            attacker,
            defender: None,
            would_trigger: Vec::new(),
        }
    }

    /// Set the defending entity (builder pattern).
    #[must_use]
    pub fn with_defender(mut self, defender: EntityId) -> Self {
        self.defender = Some(defender);
        self
    }

    /// Add a card that would have triggered (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, card_id: impl Into<CardId>) -> Self {
        self.would_trigger.push(card_id.into());
        self
    }

    /// Whether `card_id` is one of the queued secrets for this attack.
    #[must_use]
    pub fn is_trigger(&self, card_id: &CardId) -> bool {
        self.would_trigger.contains(card_id)
    }

    /// Cards to exclude once `triggered` turned out to be the secret that
    /// fired. The triggered card itself is kept.
    pub fn exclusions<'a>(&'a self, triggered: &'a CardId) -> impl Iterator<Item = &'a CardId> {
        self.would_trigger.iter().filter(move |id| *id != triggered)
    }
}
