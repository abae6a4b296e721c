//! Candidate filter pipeline tests.
//!
//! These tests check copy-limit adjustment and per-mode legality, both
//! through `CandidateFilter` directly and through a full manager.

use im::Vector;
use secret_tracker::cards::{CardClass, CardDefinition, CardId, CardRegistry, CardSet};
use secret_tracker::core::{
    EngineConfig, EntityId, EntitySnapshot, Format, GameMode, LimitedRuleset, StaticGameContext,
};
use secret_tracker::secrets::{CandidateFilter, Secret, SecretCard, SecretsManager};

const HUNTER: CardClass = CardClass::new(3);
const SET_A: CardSet = CardSet::new(10);
const SET_B: CardSet = CardSet::new(11);

fn catalog(cards: &[(&str, CardSet)]) -> CardRegistry {
    CardRegistry::new().with_cards(
        cards
            .iter()
            .map(|(id, set)| CardDefinition::new(*id, *id, *set).with_class(HUNTER).as_secret()),
    )
}

fn secret(entity: EntitySnapshot, entries: &[(&str, bool)]) -> Secret {
    let mut secret = Secret::new(entity);
    for (id, excluded) in entries {
        let card_id = CardId::new(*id);
        secret.add_candidate(card_id.clone());
        if *excluded {
            secret.exclude(&card_id);
        }
    }
    secret
}

fn hidden(id: u32) -> EntitySnapshot {
    EntitySnapshot::secret(EntityId(id), HUNTER)
}

/// A starting-copy secret the opponent already revealed.
fn played(id: u32, card: &str) -> EntitySnapshot {
    hidden(id).with_card(CardId::new(card))
}

fn counts(cards: &[SecretCard]) -> Vec<(&str, u32)> {
    cards.iter().map(|c| (c.card_id.as_str(), c.count)).collect()
}

/// Two secrets with complementary exclusions each keep one candidate.
#[test]
fn test_two_secret_example() {
    let secrets = Vector::from(vec![
        secret(hidden(40), &[("A", false), ("B", true)]),
        secret(hidden(41), &[("A", true), ("B", false)]),
    ]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Other, Format::Wild);
    let catalog = catalog(&[("A", SET_A), ("B", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("A", 1), ("B", 1)]);
}

/// Two played starting copies force the count to zero in constructed modes.
#[test]
fn test_count_limit_forces_zero() {
    let secrets = Vector::from(vec![
        secret(hidden(40), &[("Y", false), ("Z", false)]),
        secret(hidden(41), &[("Y", false), ("Z", false)]),
    ]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Ranked, Format::Wild)
        .with_revealed(played(20, "Y"))
        .with_revealed(played(25, "Y"));
    let catalog = catalog(&[("Y", SET_A), ("Z", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("Y", 0), ("Z", 2)]);
}

/// A created secret that could be Y lifts the copy limit for Y.
#[test]
fn test_count_limit_skipped_for_created_secret() {
    let secrets = Vector::from(vec![
        secret(hidden(40), &[("Y", false)]),
        secret(hidden(95).created(), &[("Y", false)]),
    ]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Ranked, Format::Wild)
        .with_revealed(played(20, "Y"))
        .with_revealed(played(25, "Y"));
    let catalog = catalog(&[("Y", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("Y", 2)]);
}

/// A created secret that already ruled Y out gives no exemption.
#[test]
fn test_excluded_created_secret_gives_no_exemption() {
    let secrets = Vector::from(vec![
        secret(hidden(40), &[("Y", false)]),
        secret(hidden(95).created(), &[("Y", true)]),
    ]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Casual, Format::Wild)
        .with_revealed(played(20, "Y"))
        .with_revealed(played(25, "Y"));
    let catalog = catalog(&[("Y", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("Y", 0)]);
}

/// Copies that do not qualify as starting copies are ignored.
#[test]
fn test_count_limit_ignores_created_and_late_copies() {
    let secrets = Vector::from(vec![secret(hidden(40), &[("Y", false)])]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Ranked, Format::Wild)
        .with_revealed(played(20, "Y"))
        .with_revealed(played(21, "Y").created())
        .with_revealed(played(80, "Y"));
    let catalog = catalog(&[("Y", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("Y", 1)]);
}

/// Modes without a copy limit never force zero.
#[test]
fn test_no_count_limit_outside_constructed() {
    let secrets = Vector::from(vec![secret(hidden(40), &[("Y", false)])]);
    let config = EngineConfig::default();
    let game = StaticGameContext::new(GameMode::Other, Format::Wild)
        .with_revealed(played(20, "Y"))
        .with_revealed(played(25, "Y"));
    let catalog = catalog(&[("Y", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("Y", 1)]);
}

/// Arena keeps only cards from its active sets.
#[test]
fn test_arena_drops_inactive_sets() {
    let secrets = Vector::from(vec![secret(hidden(40), &[("IN", false), ("OUT", false)])]);
    let config = EngineConfig::new().with_arena(LimitedRuleset::new().with_set(SET_A));
    let game = StaticGameContext::new(GameMode::Arena, Format::Wild);
    let catalog = catalog(&[("IN", SET_A), ("OUT", SET_B)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("IN", 1)]);
}

/// Arena drops banned secrets; exclusive secrets stay legal there.
#[test]
fn test_arena_banned_and_exclusive() {
    let secrets = Vector::from(vec![secret(
        hidden(40),
        &[("OK", false), ("BANNED", false), ("ONLY_ARENA", false)],
    )]);
    let config = EngineConfig::new().with_arena(
        LimitedRuleset::new()
            .with_set(SET_A)
            .with_banned("BANNED")
            .with_exclusive("ONLY_ARENA"),
    );
    let game = StaticGameContext::new(GameMode::Arena, Format::Wild);
    let catalog = catalog(&[("OK", SET_A), ("BANNED", SET_A), ("ONLY_ARENA", SET_A)]);

    let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("OK", 1), ("ONLY_ARENA", 1)]);
}

/// Outside arena, arena-exclusive secrets and wild-only sets in standard are dropped.
#[test]
fn test_constructed_exclusive_and_standard() {
    let wild_set = CardSet::new(1);
    let secrets = Vector::from(vec![secret(
        hidden(40),
        &[("OK", false), ("ONLY_ARENA", false), ("OLD", false)],
    )]);
    let config = EngineConfig::new()
        .with_arena(LimitedRuleset::new().with_exclusive("ONLY_ARENA"))
        .with_wild_only_set(wild_set);
    let catalog = catalog(&[("OK", SET_A), ("ONLY_ARENA", SET_A), ("OLD", wild_set)]);

    let standard = StaticGameContext::new(GameMode::Ranked, Format::Standard);
    let cards = CandidateFilter::new(&config, &standard, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("OK", 1)]);

    let wild = StaticGameContext::new(GameMode::Ranked, Format::Wild);
    let cards = CandidateFilter::new(&config, &wild, &catalog).apply(&secrets);
    assert_eq!(counts(&cards), vec![("OK", 1), ("OLD", 1)]);
}

/// PvP draft applies its own ruleset on top of the non-arena branch.
#[test]
fn test_pvp_draft_ruleset() {
    let secrets = Vector::from(vec![secret(
        hidden(40),
        &[("OK", false), ("OUT", false), ("BANNED", false)],
    )]);
    let config = EngineConfig::new().with_pvp_draft(
        LimitedRuleset::new().with_set(SET_A).with_banned("BANNED"),
    );
    let catalog = catalog(&[("OK", SET_A), ("OUT", SET_B), ("BANNED", SET_A)]);

    for mode in [GameMode::PvpDraft, GameMode::PvpDraftPaid] {
        let game = StaticGameContext::new(mode, Format::Wild);
        let cards = CandidateFilter::new(&config, &game, &catalog).apply(&secrets);
        assert_eq!(counts(&cards), vec![("OK", 1)], "mode {:?}", mode);
    }
}

/// Settings changes reach the published list only after a refresh.
#[test]
fn test_manager_refresh_after_settings_change() {
    let catalog = catalog(&[("IN", SET_A), ("OUT", SET_B)]);
    let game = StaticGameContext::new(GameMode::Arena, Format::Wild);
    let config = EngineConfig::new().with_arena(LimitedRuleset::new().with_set(SET_A).with_set(SET_B));
    let mut secrets = SecretsManager::new(game, catalog, config);

    secrets.new_secret(&hidden(40));
    assert_eq!(counts(secrets.published()), vec![("IN", 1), ("OUT", 1)]);

    secrets.config_mut().arena = LimitedRuleset::new().with_set(SET_A);
    assert_eq!(secrets.published().len(), 2);

    secrets.refresh();
    assert_eq!(counts(secrets.published()), vec![("IN", 1)]);
}

/// End to end: the opponent plays two copies of a secret, a third shows up.
#[test]
fn test_manager_count_limit_end_to_end() {
    let catalog = catalog(&[("Y", SET_A), ("Z", SET_A)]);
    let game = StaticGameContext::new(GameMode::Ranked, Format::Wild);
    let mut secrets = SecretsManager::new(game, catalog, EngineConfig::default());

    for (id, card) in [(20, "Y"), (25, "Y")] {
        secrets.new_secret(&hidden(id));
        let revealed = played(id, card);
        secrets.remove_secret(&revealed);
        secrets.game_mut().reveal(revealed);
    }

    secrets.new_secret(&hidden(30));
    assert_eq!(counts(secrets.published()), vec![("Y", 0), ("Z", 1)]);

    secrets.new_secret(&hidden(96).created());
    assert_eq!(counts(secrets.published()), vec![("Y", 2), ("Z", 2)]);
}
