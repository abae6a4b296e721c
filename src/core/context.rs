//! Game context trait for host implementations.
//!
//! The host implements `GameContext` to tell the engine:
//! - Which mode and format the current match is played in
//! - Which of the opponent's objects have been revealed so far
//!
//! The engine reads the context on every recomputation and never caches
//! it, so the host may update it between events.

use super::config::{Format, GameMode};
use super::entity::EntitySnapshot;

/// Read-only view of the match being tracked.
pub trait GameContext {
    /// Current game mode.
    fn game_mode(&self) -> GameMode;

    /// Current deck-construction format.
    fn format(&self) -> Format;

    /// Opponent objects revealed so far, in reveal order.
    fn opponent_revealed(&self) -> &[EntitySnapshot];
}

/// A `GameContext` held entirely in memory.
///
/// Hosts that already keep a match model can implement `GameContext` on it
/// directly; this type covers tests and simple hosts.
#[derive(Clone, Debug, Default)]
pub struct StaticGameContext {
    pub mode: GameMode,
    pub format: Format,
    pub revealed: Vec<EntitySnapshot>,
}

impl StaticGameContext {
    #[must_use]
    pub fn new(mode: GameMode, format: Format) -> Self {
        Self {
            mode,
            format,
            revealed: Vec::new(),
        }
    }

    /// Record a revealed opponent object (builder pattern).
    #[must_use]
    pub fn with_revealed(mut self, entity: EntitySnapshot) -> Self {
        self.revealed.push(entity);
        self
    }

    /// Record a revealed opponent object.
    pub fn reveal(&mut self, entity: EntitySnapshot) {
        self.revealed.push(entity);
    }

    /// Start a new match: forget revealed objects and switch mode.
    pub fn start_match(&mut self, mode: GameMode, format: Format) {
        self.mode = mode;
        self.format = format;
        self.revealed.clear();
    }
}

impl GameContext for StaticGameContext {
    fn game_mode(&self) -> GameMode {
        self.mode
    }

    fn format(&self) -> Format {
        self.format
    }

    fn opponent_revealed(&self) -> &[EntitySnapshot] {
        &self.revealed
    }
}
