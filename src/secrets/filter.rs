//! Candidate filter pipeline.
//!
//! Turns the live secrets into the list the host displays:
//!
//! 1. Aggregate: per card id, count the secrets that could still be it.
//! 2. Copy limit: in constructed modes, a card the opponent has already
//!    played two starting copies of is forced to zero, unless a created
//!    secret could be it.
//! 3. Mode legality: arena and PvP draft keep only their active sets and
//!    drop banned ids; other modes drop arena-exclusive ids and, in
//!    standard, wild-only sets.
//!
//! The pipeline is recomputed from scratch every time. Secret counts are
//! tiny, and a full recompute stays correct no matter what order
//! exclusions arrived in.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardDefinition, CardId, CardSet};
use crate::core::{EngineConfig, EntitySnapshot, Format, GameContext, GameMode};

use super::secret::Secret;

/// One row of the published candidate list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretCard {
    pub card_id: CardId,
    pub name: String,
    pub set: CardSet,
    /// How many live secrets could be this card (after copy-limit adjustment).
    pub count: u32,
}

impl SecretCard {
    #[must_use]
    pub fn new(card: &CardDefinition, count: u32) -> Self {
        Self {
            card_id: card.id.clone(),
            name: card.name.clone(),
            set: card.set,
            count,
        }
    }
}

/// Raw candidate counts in first-seen order.
///
/// The count for an id is the number of secrets that track it and have not
/// excluded it. Ids excluded everywhere still appear, with a count of zero.
#[must_use]
pub fn aggregate_counts(secrets: &Vector<Secret>) -> Vec<(CardId, u32)> {
    let mut index: FxHashMap<&CardId, usize> = FxHashMap::default();
    let mut counts: Vec<(CardId, u32)> = Vec::new();

    for entry in secrets.iter().flat_map(|s| s.exclusions()) {
        let slot = *index.entry(&entry.card_id).or_insert_with(|| {
            counts.push((entry.card_id.clone(), 0));
            counts.len() - 1
        });
        if !entry.excluded {
            counts[slot].1 += 1;
        }
    }

    counts
}

/// Card ids a created secret could still be. These ignore the copy limit.
#[must_use]
pub fn card_limit_exempt(secrets: &Vector<Secret>) -> FxHashSet<CardId> {
    secrets
        .iter()
        .filter(|s| s.is_created())
        .flat_map(|s| s.candidates())
        .cloned()
        .collect()
}

/// Counts of starting-copy secrets the opponent has revealed, per card id.
///
/// Only revealed secrets with a resolved id below `threshold` that were not
/// created by an effect are counted.
#[must_use]
pub fn played_starting_copies(revealed: &[EntitySnapshot], threshold: u32) -> FxHashMap<CardId, u32> {
    let mut played = FxHashMap::default();
    for entity in revealed {
        if !entity.id.is_starting(threshold) || !entity.is_secret || entity.created {
            continue;
        }
        if let Some(card_id) = entity.resolved_card() {
            *played.entry(card_id.clone()).or_insert(0) += 1;
        }
    }
    played
}

/// The filter pipeline bound to one engine's configuration, match and catalog.
pub struct CandidateFilter<'a, G: ?Sized, C: ?Sized> {
    config: &'a EngineConfig,
    game: &'a G,
    catalog: &'a C,
}

impl<'a, G, C> CandidateFilter<'a, G, C>
where
    G: GameContext + ?Sized,
    C: CardCatalog + ?Sized,
{
    #[must_use]
    pub fn new(config: &'a EngineConfig, game: &'a G, catalog: &'a C) -> Self {
        Self { config, game, catalog }
    }

    /// Run the whole pipeline over `secrets`.
    #[must_use]
    pub fn apply(&self, secrets: &Vector<Secret>) -> Vec<SecretCard> {
        let mode = self.game.game_mode();
        let format = self.game.format();

        let exempt = card_limit_exempt(secrets);
        let played = played_starting_copies(
            self.game.opponent_revealed(),
            self.config.starting_entity_threshold,
        );
        let has_played_two = |card_id: &CardId| played.get(card_id).is_some_and(|&n| n >= 2);

        aggregate_counts(secrets)
            .into_iter()
            .filter_map(|(card_id, count)| {
                let Some(card) = self.catalog.card(&card_id) else {
                    tracing::warn!(card = %card_id, "secret candidate missing from catalog, dropped");
                    return None;
                };
                let count = if mode.has_card_limit()
                    && has_played_two(&card_id)
                    && !exempt.contains(&card_id)
                {
                    0
                } else {
                    count
                };
                Some((card, count))
            })
            .filter(|(card, _)| self.is_legal(card, mode, format))
            .map(|(card, count)| SecretCard::new(card, count))
            .collect()
    }

    /// Mode legality of a single card.
    #[must_use]
    pub fn is_legal(&self, card: &CardDefinition, mode: GameMode, format: Format) -> bool {
        let arena = &self.config.arena;
        let legal = if mode == GameMode::Arena {
            arena.allows(card)
        } else {
            !arena.is_exclusive(&card.id)
                && !(format == Format::Standard && self.config.is_wild_only(card.set))
        };

        legal && (!mode.is_pvp_draft() || self.config.pvp_draft.allows(card))
    }
}
