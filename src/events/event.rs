//! Secret lifecycle events.
//!
//! The host translates what it reads from the game client into these
//! events and feeds them to `SecretsManager::handle`. Each variant maps to
//! exactly one manager operation.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::EntitySnapshot;
use crate::secrets::PendingCombat;

/// An event the engine reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecretEvent {
    /// A new match started.
    Reset,
    /// Settings or match context changed; republish.
    Refresh,
    /// A face-down secret entered play.
    New(EntitySnapshot),
    /// A secret was revealed or left play.
    Removed(EntitySnapshot),
    /// A secret is about to be replaced; keep its exclusions.
    Saved(EntitySnapshot),
    /// These cards were proven impossible for every live secret.
    Exclude(Vec<CardId>),
    /// Manual include/exclude from the UI.
    Toggle(CardId),
    /// An attack was declared.
    CombatStarted(PendingCombat),
    /// The attack resolved without a secret triggering.
    CombatEnded,
}

impl SecretEvent {
    /// Create an exclusion event for a batch of cards.
    pub fn exclude<I, T>(card_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CardId>,
    {
        Self::Exclude(card_ids.into_iter().map(Into::into).collect())
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Refresh => "refresh",
            Self::New(_) => "new",
            Self::Removed(_) => "removed",
            Self::Saved(_) => "saved",
            Self::Exclude(_) => "exclude",
            Self::Toggle(_) => "toggle",
            Self::CombatStarted(_) => "combat_started",
            Self::CombatEnded => "combat_ended",
        }
    }
}

impl std::fmt::Display for SecretEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New(entity) | Self::Removed(entity) | Self::Saved(entity) => {
                write!(f, "{}({})", self.name(), entity)
            }
            Self::Exclude(card_ids) => write!(f, "exclude({} cards)", card_ids.len()),
            Self::Toggle(card_id) => write!(f, "toggle({})", card_id),
            Self::CombatStarted(combat) => write!(f, "combat_started({})", combat.attacker),
            _ => f.write_str(self.name()),
        }
    }
}
