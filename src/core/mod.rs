//! Core types: entities, match context, configuration.
//!
//! Everything the engine learns about the outside world passes through
//! this module: `EntitySnapshot` for client objects, `GameContext` for the
//! match, and `EngineConfig` for mode rules.

pub mod config;
pub mod context;
pub mod entity;

pub use config::{EngineConfig, Format, GameMode, LimitedRuleset, DEFAULT_STARTING_ENTITY_THRESHOLD};
pub use context::{GameContext, StaticGameContext};
pub use entity::{EntityId, EntitySnapshot};
