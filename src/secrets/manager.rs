//! The secrets manager: live secret collection plus inference operations.
//!
//! Every state-changing operation ends by running the filter pipeline and
//! publishing the result to all observers. Operations that batch several
//! changes suppress the intermediate publishes and publish once at the end.
//!
//! ## Example
//!
//! ```
//! use secret_tracker::cards::{CardClass, CardDefinition, CardId, CardRegistry, CardSet};
//! use secret_tracker::core::{EngineConfig, EntityId, EntitySnapshot, Format, GameMode, StaticGameContext};
//! use secret_tracker::secrets::SecretsManager;
//!
//! let mage = CardClass::new(4);
//! let catalog = CardRegistry::new().with_cards(["EX1_287", "EX1_289", "EX1_294"].map(|id| {
//!     CardDefinition::new(id, id, CardSet::new(2)).with_class(mage).as_secret()
//! }));
//! let game = StaticGameContext::new(GameMode::Ranked, Format::Wild);
//! let mut secrets = SecretsManager::new(game, catalog, EngineConfig::default());
//!
//! assert!(secrets.new_secret(&EntitySnapshot::secret(EntityId(40), mage)));
//! secrets.exclude_one(&CardId::new("EX1_289"), true);
//!
//! let counts: Vec<_> = secrets.published().iter().map(|c| c.count).collect();
//! assert_eq!(counts, vec![1, 0, 1]);
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::core::{EngineConfig, EntityId, EntitySnapshot, GameContext};
use crate::events::SecretEvent;

use super::combat::PendingCombat;
use super::filter::{CandidateFilter, SecretCard};
use super::observer::SecretsObserver;
use super::secret::{Exclusions, Secret};

/// Serializable view of the engine, for debugging and host persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsSnapshot {
    pub secrets: Vector<Secret>,
    pub pending_combat: Option<PendingCombat>,
    pub candidates: Vec<SecretCard>,
}

/// Tracks the opponent's live secrets and publishes what they could be.
pub struct SecretsManager<G, C> {
    game: G,
    catalog: C,
    config: EngineConfig,
    /// Live secrets in the order they were observed.
    secrets: Vector<Secret>,
    /// Exclusion patterns saved under a resolved card id.
    saved_secrets: FxHashMap<CardId, Exclusions>,
    pending_combat: Option<PendingCombat>,
    /// Last list delivered to observers.
    published: Vec<SecretCard>,
    observers: Vec<Box<dyn SecretsObserver>>,
}

impl<G, C> SecretsManager<G, C>
where
    G: GameContext,
    C: CardCatalog,
{
    /// Create a manager with no live secrets and an empty published list.
    #[must_use]
    pub fn new(game: G, catalog: C, config: EngineConfig) -> Self {
        Self {
            game,
            catalog,
            config,
            secrets: Vector::new(),
            saved_secrets: FxHashMap::default(),
            pending_combat: None,
            published: Vec::new(),
            observers: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable match context. Changes show up on the next publish; call
    /// `refresh` to publish immediately.
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mutable configuration. Same refresh rules as `game_mut`.
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Live secrets in observation order.
    #[must_use]
    pub fn secrets(&self) -> &Vector<Secret> {
        &self.secrets
    }

    #[must_use]
    pub fn secret(&self, entity_id: EntityId) -> Option<&Secret> {
        self.secrets.iter().find(|s| s.entity_id() == entity_id)
    }

    #[must_use]
    pub fn has_active_secrets(&self) -> bool {
        !self.secrets.is_empty()
    }

    #[must_use]
    pub fn pending_combat(&self) -> Option<&PendingCombat> {
        self.pending_combat.as_ref()
    }

    /// The list most recently delivered to observers.
    #[must_use]
    pub fn published(&self) -> &[SecretCard] {
        &self.published
    }

    /// Run the filter pipeline against the current state without publishing.
    #[must_use]
    pub fn candidate_list(&self) -> Vec<SecretCard> {
        CandidateFilter::new(&self.config, &self.game, &self.catalog).apply(&self.secrets)
    }

    #[must_use]
    pub fn snapshot(&self) -> SecretsSnapshot {
        SecretsSnapshot {
            secrets: self.secrets.clone(),
            pending_combat: self.pending_combat.clone(),
            candidates: self.published.clone(),
        }
    }

    /// Register an observer. It receives every later publish.
    pub fn subscribe(&mut self, observer: Box<dyn SecretsObserver>) {
        self.observers.push(observer);
    }

    // === Lifecycle ===

    /// Forget everything about the current match and publish an empty list.
    pub fn reset(&mut self) {
        self.secrets.clear();
        self.saved_secrets.clear();
        self.pending_combat = None;
        self.publish(Vec::new());
    }

    /// Recompute and publish. Needed after `game_mut`/`config_mut` changes.
    pub fn refresh(&mut self) {
        let cards = self.candidate_list();
        self.publish(cards);
    }

    /// Start tracking a newly observed secret.
    ///
    /// Returns `false` without touching any state if the object is not a
    /// secret, has no owning class, or is already tracked.
    pub fn new_secret(&mut self, entity: &EntitySnapshot) -> bool {
        let Some(class) = entity.class.filter(|_| entity.is_secret) else {
            return false;
        };
        if self.secret(entity.id).is_some() {
            tracing::debug!(entity = %entity, "secret already tracked");
            return false;
        }

        // A known card cannot also be hiding behind one of the older secrets.
        if let Some(card_id) = entity.resolved_card() {
            self.exclude_one(card_id, false);
        }

        let mut secret = Secret::new(entity.clone());
        for card_id in self.catalog.secrets_for_class(class) {
            secret.add_candidate(card_id);
        }
        if let Some(saved) = entity.resolved_card().and_then(|id| self.saved_secrets.get(id)) {
            secret.restore(saved);
        }

        self.secrets.push_back(secret);
        if let Some(secret) = self.secrets.last() {
            for observer in &mut self.observers {
                observer.on_new_secret(secret);
            }
        }
        self.refresh();

        tracing::info!(entity = %entity, class = %class, "new secret");
        true
    }

    /// Stop tracking a secret that was revealed, destroyed or otherwise left play.
    ///
    /// The card id from `entity` is preferred over the one captured when the
    /// secret was first seen, since a reveal usually arrives with it.
    pub fn remove_secret(&mut self, entity: &EntitySnapshot) -> bool {
        let Some(index) = self.secrets.iter().position(|s| s.entity_id() == entity.id) else {
            tracing::info!(entity = %entity, "secret not found");
            return false;
        };

        self.handle_fast_combat(entity);

        let secret = self.secrets.remove(index);
        let card_id = entity
            .resolved_card()
            .or_else(|| secret.entity().resolved_card())
            .cloned();
        if let Some(card_id) = card_id {
            self.exclude_one(&card_id, false);
            self.saved_secrets.remove(&card_id);
        }

        self.refresh();
        true
    }

    /// Save a live secret's exclusion pattern under its resolved card id,
    /// so a secret that later resolves to the same card starts from it.
    pub fn save_secret(&mut self, entity: &EntitySnapshot) -> bool {
        let Some(secret) = self.secret(entity.id) else {
            return false;
        };
        let Some(card_id) = entity
            .resolved_card()
            .or_else(|| secret.entity().resolved_card())
            .cloned()
        else {
            return false;
        };
        let saved: Exclusions = secret.exclusions().iter().cloned().collect();
        self.saved_secrets.insert(card_id, saved);
        true
    }

    #[must_use]
    pub fn is_saved(&self, card_id: &CardId) -> bool {
        self.saved_secrets.contains_key(card_id)
    }

    // === Exclusion ===

    /// Exclude several cards and publish once after the last.
    ///
    /// Publishing rides on the last id: an empty batch, or one whose last id
    /// is empty, publishes nothing even if earlier ids were excluded. The
    /// next state-changing operation or `refresh` picks those up.
    pub fn exclude_many(&mut self, card_ids: &[CardId]) {
        let Some((last, rest)) = card_ids.split_last() else {
            return;
        };
        for card_id in rest {
            self.exclude_one(card_id, false);
        }
        self.exclude_one(last, true);
    }

    /// Rule `card_id` out for every live secret.
    ///
    /// Which secret corresponds to which hidden object is unknown, so
    /// evidence against one is evidence against all. Returns `false` for an
    /// empty id.
    pub fn exclude_one(&mut self, card_id: &CardId, publish: bool) -> bool {
        if card_id.is_empty() {
            return false;
        }
        for secret in self.secrets.iter_mut() {
            secret.exclude(card_id);
        }
        tracing::info!(card = %card_id, "excluded secret");
        if publish {
            self.refresh();
        }
        true
    }

    /// Manual override from the UI.
    ///
    /// If any live secret has ruled `card_id` out, it is put back in
    /// everywhere; otherwise it is ruled out everywhere.
    pub fn toggle(&mut self, card_id: &CardId) -> bool {
        if card_id.is_empty() {
            return false;
        }
        if self.secrets.iter().any(|s| s.is_excluded(card_id)) {
            for secret in self.secrets.iter_mut() {
                secret.include(card_id);
            }
        } else {
            self.exclude_one(card_id, false);
        }
        self.refresh();
        true
    }

    // === Combat ===

    /// Record an attack whose secret exclusions are still pending.
    pub fn begin_combat(&mut self, combat: PendingCombat) {
        self.pending_combat = Some(combat);
    }

    /// Drop the pending attack. Returns `false` if there was none.
    pub fn end_combat(&mut self) -> bool {
        self.pending_combat.take().is_some()
    }

    /// Apply the pending attack's exclusions if `trigger` is one of its
    /// queued secrets. Any other removal leaves the attack pending.
    fn handle_fast_combat(&mut self, trigger: &EntitySnapshot) {
        let Some(triggered) = trigger.resolved_card() else {
            return;
        };
        match self.pending_combat.take() {
            Some(combat) if combat.is_trigger(triggered) => {
                for card_id in combat.exclusions(triggered) {
                    self.exclude_one(card_id, false);
                }
            }
            other => self.pending_combat = other,
        }
    }

    // === Events ===

    /// Dispatch a host event. Returns whether it was accepted.
    pub fn handle(&mut self, event: &SecretEvent) -> bool {
        tracing::trace!(event = %event, "handling secret event");
        match event {
            SecretEvent::Reset => {
                self.reset();
                true
            }
            SecretEvent::Refresh => {
                self.refresh();
                true
            }
            SecretEvent::New(entity) => self.new_secret(entity),
            SecretEvent::Removed(entity) => self.remove_secret(entity),
            SecretEvent::Saved(entity) => self.save_secret(entity),
            SecretEvent::Exclude(card_ids) => {
                self.exclude_many(card_ids);
                !card_ids.is_empty()
            }
            SecretEvent::Toggle(card_id) => self.toggle(card_id),
            SecretEvent::CombatStarted(combat) => {
                self.begin_combat(combat.clone());
                true
            }
            SecretEvent::CombatEnded => self.end_combat(),
        }
    }

    fn publish(&mut self, cards: Vec<SecretCard>) {
        tracing::debug!(count = cards.len(), "publishing secret candidates");
        self.published = cards;
        for observer in &mut self.observers {
            observer.on_secrets_changed(&self.published);
        }
    }
}
