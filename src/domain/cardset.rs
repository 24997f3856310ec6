//! Card set builder: canonical, shuffled, and code-selected card sequences

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::{Card, DomainError, Rank, Suit, MAX_CARDS};

/// The canonical 52 cards: suits in order, ranks in order within each suit.
pub fn default_set() -> Vec<Card> {
    let mut cards = Vec::with_capacity(MAX_CARDS);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// The canonical set in uniformly random order, using the thread-local
/// OS-seeded generator.
pub fn shuffled_set() -> Vec<Card> {
    shuffled_set_with(&mut rand::thread_rng())
}

/// The canonical set permuted with a caller-supplied generator.
pub fn shuffled_set_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = default_set();
    // Fisher-Yates
    cards.shuffle(rng);
    cards
}

/// Resolve card codes (case-insensitive) in the caller's order.
///
/// Duplicates resolve independently. The first unknown code fails the whole
/// call; no partially resolved cards are returned.
pub fn set_by_codes<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, DomainError> {
    let canonical = default_set();
    let cards = codes
        .iter()
        .map(|code| {
            let code = code.as_ref();
            canonical
                .iter()
                .find(|card| card.code().eq_ignore_ascii_case(code))
                .copied()
                .ok_or_else(|| DomainError::InvalidCardCode(code.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("set_by_codes: resolved {} cards", cards.len());
    Ok(cards)
}
