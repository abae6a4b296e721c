//! Engine configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `LimitedRuleset`: active sets and ban lists for one limited mode family
//! - `EngineConfig`: both rulesets plus format and entity-id rules
//!
//! `GameMode` and `Format` describe the match currently being tracked and
//! are read from the host's `GameContext` on every recomputation.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, CardId, CardSet};
use crate::error::ConfigError;

/// Entity ids below this value belong to objects a player started with.
pub const DEFAULT_STARTING_ENTITY_THRESHOLD: u32 = 68;

/// Game mode of the match being tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    Ranked,
    Casual,
    Friendly,
    VsAi,
    /// Limited arena draft.
    Arena,
    /// PvP draft.
    PvpDraft,
    /// Paid PvP draft. Same rules as `PvpDraft`.
    PvpDraftPaid,
    #[default]
    Other,
}

impl GameMode {
    /// Does this mode enforce the constructed-deck copy limit?
    #[must_use]
    pub const fn has_card_limit(self) -> bool {
        matches!(self, Self::Ranked | Self::Casual | Self::Friendly | Self::VsAi)
    }

    /// Is this one of the PvP draft variants?
    #[must_use]
    pub const fn is_pvp_draft(self) -> bool {
        matches!(self, Self::PvpDraft | Self::PvpDraftPaid)
    }
}

/// Deck-construction format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Restricted format: wild-only sets are illegal.
    Standard,
    /// Unrestricted format.
    #[default]
    Wild,
}

/// Legality rules for one limited mode family.
///
/// Arena and PvP draft each get their own instance; the filter pipeline
/// treats them identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitedRuleset {
    /// Sets currently in rotation for this mode.
    pub current_sets: Vec<CardSet>,

    /// Secrets that cannot be drafted in this mode.
    pub banned_secrets: Vec<CardId>,

    /// Secrets that only exist in this mode.
    pub exclusive_secrets: Vec<CardId>,
}

impl LimitedRuleset {
    /// Create an empty ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active set (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: CardSet) -> Self {
        if !self.current_sets.contains(&set) {
            self.current_sets.push(set);
        }
        self
    }

    /// Ban a secret (builder pattern).
    #[must_use]
    pub fn with_banned(mut self, card_id: impl Into<CardId>) -> Self {
        self.banned_secrets.push(card_id.into());
        self
    }

    /// Mark a secret as exclusive to this mode (builder pattern).
    #[must_use]
    pub fn with_exclusive(mut self, card_id: impl Into<CardId>) -> Self {
        self.exclusive_secrets.push(card_id.into());
        self
    }

    /// Check if a card may appear in this mode: its set is active and it
    /// is not banned.
    #[must_use]
    pub fn allows(&self, card: &CardDefinition) -> bool {
        self.current_sets.contains(&card.set) && !self.is_banned(&card.id)
    }

    #[must_use]
    pub fn is_banned(&self, card_id: &CardId) -> bool {
        self.banned_secrets.contains(card_id)
    }

    #[must_use]
    pub fn is_exclusive(&self, card_id: &CardId) -> bool {
        self.exclusive_secrets.contains(card_id)
    }
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use secret_tracker::cards::CardSet;
/// use secret_tracker::core::{EngineConfig, LimitedRuleset};
///
/// let config = EngineConfig::new()
///     .with_arena(LimitedRuleset::new().with_set(CardSet::new(10)))
///     .with_wild_only_set(CardSet::new(1));
///
/// assert_eq!(config.starting_entity_threshold, 68);
/// assert!(config.is_wild_only(CardSet::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Arena ruleset. Its exclusive list also applies outside arena.
    pub arena: LimitedRuleset,

    /// PvP draft ruleset.
    pub pvp_draft: LimitedRuleset,

    /// Sets that are illegal in the standard format.
    pub wild_only_sets: Vec<CardSet>,

    /// Entity ids below this value are starting/deck objects.
    pub starting_entity_threshold: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arena: LimitedRuleset::default(),
            pvp_draft: LimitedRuleset::default(),
            wild_only_sets: Vec::new(),
            starting_entity_threshold: DEFAULT_STARTING_ENTITY_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with empty rulesets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_entity_threshold == 0 {
            return Err(ConfigError::Invalid(
                "starting_entity_threshold must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Set the arena ruleset.
    #[must_use]
    pub fn with_arena(mut self, ruleset: LimitedRuleset) -> Self {
        self.arena = ruleset;
        self
    }

    /// Set the PvP draft ruleset.
    #[must_use]
    pub fn with_pvp_draft(mut self, ruleset: LimitedRuleset) -> Self {
        self.pvp_draft = ruleset;
        self
    }

    /// Add a wild-only set.
    #[must_use]
    pub fn with_wild_only_set(mut self, set: CardSet) -> Self {
        self.wild_only_sets.push(set);
        self
    }

    /// Set the starting-object entity id threshold.
    #[must_use]
    pub fn with_starting_entity_threshold(mut self, threshold: u32) -> Self {
        self.starting_entity_threshold = threshold;
        self
    }

    #[must_use]
    pub fn is_wild_only(&self, set: CardSet) -> bool {
        self.wild_only_sets.contains(&set)
    }
}
