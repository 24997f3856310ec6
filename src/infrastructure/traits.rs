//! Storage boundary traits
//!
//! The deck service only talks to storage through these traits, so the
//! in-memory implementation can be swapped or wrapped in tests.

use uuid::Uuid;

use crate::domain::{Card, Deck};
use crate::infrastructure::RepositoryResult;

/// Deck storage abstraction.
///
/// Implementations are shared between request handlers and must make every
/// per-deck read and write mutually exclusive.
pub trait DeckRepository: Send + Sync {
    /// Insert the deck, replacing any deck stored under the same id.
    fn add(&self, deck: Deck);

    /// Snapshot of the deck with the given id.
    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Deck>;

    /// First card in the deck's current cards whose code matches.
    /// `NotFound` for an unknown deck, `CardNotFound` when the deck lacks the card.
    fn card_by_code(&self, id: Uuid, code: &str) -> RepositoryResult<Card>;

    /// Atomically remove and return the first `amount` cards.
    ///
    /// Fails with `InvalidParameters` for `amount <= 0` (before lookup),
    /// `NotFound` for an unknown id and `Truncate` when fewer than `amount`
    /// cards remain. Failures leave the deck untouched.
    fn draw_cards(&self, id: Uuid, amount: i64) -> RepositoryResult<Vec<Card>>;

    /// Number of decks held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
