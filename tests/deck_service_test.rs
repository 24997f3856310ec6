//! Tests for DeckService
//!
//! Covers deck creation modes, opening decks and draw semantics, including
//! the mapping of storage failures onto service error kinds.

use std::collections::HashSet;
use std::sync::Arc;

use rstest::rstest;
use uuid::Uuid;

use cardsgame::application::services::DeckService;
use cardsgame::application::ApplicationError;
use cardsgame::domain::{default_set, shuffled_set, Rank, Suit, MAX_CARDS};
use cardsgame::infrastructure::traits::DeckRepository;
use cardsgame::infrastructure::MemoryDeckRepository;
use cardsgame::util::testing::init_test_setup;

const NO_CODES: &[&str] = &[];

/// Helper to build a service over a fresh in-memory repository
fn setup() -> (DeckService, Arc<MemoryDeckRepository>) {
    init_test_setup();
    let repository = Arc::new(MemoryDeckRepository::new());
    let service = DeckService::new(repository.clone());
    (service, repository)
}

fn codes(cards: &[cardsgame::domain::Card]) -> Vec<&'static str> {
    cards.iter().map(|c| c.code()).collect()
}

// ============================================================
// card sets
// ============================================================

#[test]
fn given_default_set_then_one_card_per_suit_and_rank() {
    let cards = default_set();

    let pairs: HashSet<(Suit, Rank)> = cards.iter().map(|c| (c.suit, c.rank)).collect();
    assert_eq!(cards.len(), MAX_CARDS);
    assert_eq!(pairs.len(), MAX_CARDS);
}

#[test]
fn given_two_shuffled_sets_then_both_are_permutations_and_differ() {
    let first = shuffled_set();
    let second = shuffled_set();

    let expected: HashSet<&str> = codes(&default_set()).into_iter().collect();
    assert_eq!(first.len(), MAX_CARDS);
    assert_eq!(second.len(), MAX_CARDS);
    assert_eq!(codes(&first).into_iter().collect::<HashSet<_>>(), expected);
    assert_eq!(codes(&second).into_iter().collect::<HashSet<_>>(), expected);
    // 1 in 52! chance of a false failure
    assert_ne!(first, second, "two shuffles should differ");
}

// ============================================================
// create_deck()
// ============================================================

#[test]
fn given_no_codes_and_no_shuffle_when_creating_then_default_order() {
    // Arrange
    let (service, _) = setup();

    // Act
    let deck = service.create_deck(false, NO_CODES).unwrap();

    // Assert
    assert_eq!(deck.remaining(), MAX_CARDS);
    assert!(!deck.shuffled());
    assert_eq!(deck.cards(), default_set().as_slice());
}

#[test]
fn given_shuffle_when_creating_then_full_shuffled_deck() {
    let (service, _) = setup();

    let deck = service.create_deck(true, NO_CODES).unwrap();

    assert!(deck.shuffled());
    assert_eq!(deck.remaining(), MAX_CARDS);
    assert_ne!(deck.cards(), default_set().as_slice());
}

#[test]
fn given_codes_and_shuffle_when_creating_then_codes_win_and_order_kept() {
    let (service, _) = setup();

    let deck = service.create_deck(true, &["SQ", "D5"]).unwrap();

    assert!(!deck.shuffled(), "explicit codes override shuffle");
    assert_eq!(deck.remaining(), 2);
    assert_eq!(codes(deck.cards()), vec!["SQ", "D5"]);
}

#[test]
fn given_known_codes_when_creating_then_resolves_cards() {
    let (service, _) = setup();

    let deck = service.create_deck(false, &["SK", "H8"]).unwrap();

    assert_eq!(deck.cards()[0].suit, Suit::Spades);
    assert_eq!(deck.cards()[0].rank, Rank::King);
    assert_eq!(deck.cards()[1].suit, Suit::Hearts);
    assert_eq!(deck.cards()[1].rank, Rank::Eight);
}

#[test]
fn given_unknown_code_when_creating_then_invalid_card_code_and_nothing_stored() {
    let (service, repository) = setup();

    let result = service.create_deck(false, &["SA", "ZZ"]);

    assert!(matches!(result, Err(ApplicationError::InvalidCardCode(ref c)) if c == "ZZ"));
    assert!(repository.is_empty());
}

#[test]
fn given_created_deck_then_stored_in_repository() {
    let (service, repository) = setup();

    let deck = service.create_deck(false, NO_CODES).unwrap();

    assert_eq!(repository.get_by_id(deck.id()).unwrap(), deck);
    assert_eq!(service.deck_count(), 1);
}

// ============================================================
// open_deck()
// ============================================================

#[test]
fn given_no_decks_when_opening_then_deck_not_found() {
    let (service, _) = setup();
    let id = Uuid::new_v4();

    let result = service.open_deck(id);

    assert!(matches!(result, Err(ApplicationError::DeckNotFound(missing)) if missing == id));
}

#[test]
fn given_other_deck_exists_when_opening_unknown_id_then_deck_not_found() {
    let (service, _) = setup();
    service.create_deck(false, NO_CODES).unwrap();

    let result = service.open_deck(Uuid::new_v4());

    assert!(matches!(result, Err(ApplicationError::DeckNotFound(_))));
}

#[test]
fn given_created_deck_when_opening_then_same_deck() {
    let (service, _) = setup();
    let created = service.create_deck(true, NO_CODES).unwrap();

    let opened = service.open_deck(created.id()).unwrap();

    assert_eq!(opened, created);
}

// ============================================================
// draw_cards()
// ============================================================

#[test]
fn given_fresh_deck_when_drawing_five_then_front_cards_removed() {
    // Arrange
    let (service, _) = setup();
    let deck = service.create_deck(true, NO_CODES).unwrap();
    let expected = deck.cards()[..5].to_vec();

    // Act
    let drawn = service.draw_cards(deck.id(), 5).unwrap();

    // Assert
    assert_eq!(drawn, expected);
    let after = service.open_deck(deck.id()).unwrap();
    assert_eq!(after.remaining(), MAX_CARDS - 5);
    assert_eq!(after.cards().len(), MAX_CARDS - 5);
    assert!(drawn.iter().all(|c| !after.cards().contains(c)));
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MIN)]
fn given_non_positive_amount_when_drawing_then_invalid_amount_and_unchanged(#[case] amount: i64) {
    let (service, _) = setup();
    let deck = service.create_deck(false, NO_CODES).unwrap();

    let result = service.draw_cards(deck.id(), amount);

    assert!(matches!(result, Err(ApplicationError::InvalidAmount(a)) if a == amount));
    assert_eq!(service.open_deck(deck.id()).unwrap(), deck);
}

#[test]
fn given_full_deck_when_drawing_53_then_not_enough_cards_and_unchanged() {
    let (service, _) = setup();
    let deck = service.create_deck(false, NO_CODES).unwrap();

    let result = service.draw_cards(deck.id(), 53);

    assert!(matches!(
        result,
        Err(ApplicationError::NotEnoughCards {
            requested: 53,
            remaining: 52
        })
    ));
    assert_eq!(service.open_deck(deck.id()).unwrap().remaining(), MAX_CARDS);
}

#[test]
fn given_unknown_deck_when_drawing_then_deck_not_found() {
    let (service, _) = setup();
    service.create_deck(false, NO_CODES).unwrap();

    let result = service.draw_cards(Uuid::new_v4(), 1);

    assert!(matches!(result, Err(ApplicationError::DeckNotFound(_))));
}

#[test]
fn given_exhausted_deck_when_drawing_then_not_enough_cards_but_still_open() {
    let (service, _) = setup();
    let deck = service.create_deck(false, &["SA", "SA"]).unwrap();

    service.draw_cards(deck.id(), 2).unwrap();
    let result = service.draw_cards(deck.id(), 1);

    assert!(matches!(
        result,
        Err(ApplicationError::NotEnoughCards { remaining: 0, .. })
    ));
    let opened = service.open_deck(deck.id()).unwrap();
    assert_eq!(opened.remaining(), 0);
    assert!(opened.cards().is_empty());
}

// ============================================================
// find_card()
// ============================================================

#[test]
fn given_drawn_card_when_finding_then_card_not_found() {
    let (service, _) = setup();
    let deck = service.create_deck(false, NO_CODES).unwrap();
    assert_eq!(service.find_card(deck.id(), "sa").unwrap().code(), "SA");

    service.draw_cards(deck.id(), 1).unwrap();

    assert!(matches!(
        service.find_card(deck.id(), "SA"),
        Err(ApplicationError::CardNotFound { .. })
    ));
    assert!(matches!(
        service.find_card(Uuid::new_v4(), "SA"),
        Err(ApplicationError::DeckNotFound(_))
    ));
}
