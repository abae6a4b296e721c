//! A single face-down secret and what it can no longer be.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{EntityId, EntitySnapshot};

/// One candidate card of a secret.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusionEntry {
    pub card_id: CardId,
    /// `true` once this secret has been proven not to be `card_id`.
    pub excluded: bool,
}

/// Exclusion state, in the order candidates were added.
///
/// Class pools rarely exceed a couple dozen secrets, so this stays inline.
pub type Exclusions = SmallVec<[ExclusionEntry; 16]>;

/// A live secret.
///
/// Entries are only ever inserted or flipped; a secret is never narrowed by
/// deleting candidates. Discarding the whole `Secret` is the only removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    entity: EntitySnapshot,
    excluded: Exclusions,
}

impl Secret {
    /// Create a secret with no candidates.
    #[must_use]
    pub fn new(entity: EntitySnapshot) -> Self {
        Self {
            entity,
            excluded: Exclusions::new(),
        }
    }

    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity.id
    }

    /// The snapshot taken when the secret was first observed.
    #[must_use]
    pub fn entity(&self) -> &EntitySnapshot {
        &self.entity
    }

    /// Is the originating object a created copy?
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.entity.created
    }

    /// All entries, excluded or not.
    #[must_use]
    pub fn exclusions(&self) -> &[ExclusionEntry] {
        &self.excluded
    }

    /// Card ids this secret could still be.
    pub fn candidates(&self) -> impl Iterator<Item = &CardId> {
        self.excluded.iter().filter(|e| !e.excluded).map(|e| &e.card_id)
    }

    /// Add a live candidate. Returns `false` if `card_id` is already tracked.
    pub fn add_candidate(&mut self, card_id: CardId) -> bool {
        if card_id.is_empty() || self.entry(&card_id).is_some() {
            return false;
        }
        self.excluded.push(ExclusionEntry {
            card_id,
            excluded: false,
        });
        true
    }

    /// Rule `card_id` out. No effect if it is not a candidate of this secret.
    pub fn exclude(&mut self, card_id: &CardId) {
        self.set_excluded(card_id, true);
    }

    /// Put `card_id` back in as a live candidate.
    pub fn include(&mut self, card_id: &CardId) {
        self.set_excluded(card_id, false);
    }

    /// Check if `card_id` is tracked and ruled out.
    #[must_use]
    pub fn is_excluded(&self, card_id: &CardId) -> bool {
        self.entry(card_id).is_some_and(|e| e.excluded)
    }

    /// Apply a saved exclusion pattern.
    ///
    /// Flags are copied for candidates both sides know; candidates only the
    /// saved pattern knows are appended.
    pub fn restore(&mut self, saved: &[ExclusionEntry]) {
        for entry in saved {
            match self.entry_mut(&entry.card_id) {
                Some(existing) => existing.excluded = entry.excluded,
                None => self.excluded.push(entry.clone()),
            }
        }
    }

    fn set_excluded(&mut self, card_id: &CardId, excluded: bool) {
        if let Some(entry) = self.entry_mut(card_id) {
            entry.excluded = excluded;
        }
    }

    fn entry(&self, card_id: &CardId) -> Option<&ExclusionEntry> {
        self.excluded.iter().find(|e| &e.card_id == card_id)
    }

    fn entry_mut(&mut self, card_id: &CardId) -> Option<&mut ExclusionEntry> {
        self.excluded.iter_mut().find(|e| &e.card_id == card_id)
    }
}
