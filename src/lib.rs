//! # secret-tracker
//!
//! Inference engine for an opponent's face-down secrets in a collectible
//! card game.
//!
//! Every secret starts out as "any secret of its class". As the match goes
//! on, the host reports what it observes (a secret entering play, one
//! being revealed, an attack that should have triggered something) and
//! the engine narrows the candidates down, publishing a counted list of
//! cards the opponent could still be hiding.
//!
//! ## Design Principles
//!
//! 1. **Global Exclusion**: Which candidate list belongs to which hidden
//!    object is unknown, so ruling a card out applies to every live secret.
//!
//! 2. **Recompute, Don't Patch**: The published list is rebuilt from the
//!    live secrets on every change. Order of exclusions never matters.
//!
//! 3. **Injected World**: Match state, card metadata and mode rules come in
//!    through `GameContext`, `CardCatalog` and `EngineConfig`. The engine
//!    never inspects raw client tags.
//!
//! ## Modules
//!
//! - `core`: Entity ids and snapshots, match context, configuration
//! - `cards`: Card identifiers, definitions, catalog
//! - `secrets`: Secret state, manager, filter pipeline, observers
//! - `events`: Host-facing event enum
//! - `error`: Configuration errors

pub mod cards;
pub mod core;
pub mod error;
pub mod events;
pub mod secrets;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EntityId, EntitySnapshot, Format, GameContext, GameMode, LimitedRuleset,
    StaticGameContext,
};

pub use crate::cards::{CardCatalog, CardClass, CardDefinition, CardId, CardRegistry, CardSet};

pub use crate::secrets::{
    CandidateFilter, ChannelObserver, PendingCombat, Secret, SecretCard, SecretsManager,
    SecretsObserver, SecretsSnapshot,
};

pub use crate::events::SecretEvent;
pub use crate::error::ConfigError;
