//! In-memory deck repository

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::{Card, Deck};
use crate::infrastructure::traits::DeckRepository;
use crate::infrastructure::{RepositoryError, RepositoryResult};

type DeckHandle = Arc<Mutex<Deck>>;

/// Process-lifetime deck storage with one lock per deck.
///
/// The map lock is only held to insert or to clone out a deck handle, so
/// draws on different decks never wait on each other.
#[derive(Debug, Default)]
pub struct MemoryDeckRepository {
    decks: RwLock<HashMap<Uuid, DeckHandle>>,
}

impl MemoryDeckRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self, id: Uuid) -> RepositoryResult<DeckHandle> {
        self.decks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }
}

// Deck mutations cannot panic halfway, so a poisoned lock still guards a
// consistent deck.
fn lock(handle: &DeckHandle) -> MutexGuard<'_, Deck> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DeckRepository for MemoryDeckRepository {
    fn add(&self, deck: Deck) {
        let id = deck.id();
        debug!("add: id={}, cards={}", id, deck.remaining());
        self.decks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(Mutex::new(deck)));
    }

    fn get_by_id(&self, id: Uuid) -> RepositoryResult<Deck> {
        let handle = self.handle(id)?;
        let deck = lock(&handle).clone();
        Ok(deck)
    }

    fn card_by_code(&self, id: Uuid, code: &str) -> RepositoryResult<Card> {
        let handle = self.handle(id)?;
        let deck = lock(&handle);
        deck.card_by_code(code)
            .copied()
            .ok_or_else(|| RepositoryError::CardNotFound {
                deck: id,
                code: code.to_string(),
            })
    }

    fn draw_cards(&self, id: Uuid, amount: i64) -> RepositoryResult<Vec<Card>> {
        if amount <= 0 {
            return Err(RepositoryError::InvalidParameters(amount));
        }
        let requested =
            usize::try_from(amount).map_err(|_| RepositoryError::InvalidParameters(amount))?;

        let handle = self.handle(id)?;
        let mut deck = lock(&handle);
        let remaining = deck.remaining();
        let cards = deck
            .take_front(requested)
            .ok_or(RepositoryError::Truncate {
                requested,
                remaining,
            })?;
        trace!(
            "draw_cards: id={}, drew={}, remaining={}",
            id,
            cards.len(),
            deck.remaining()
        );
        Ok(cards)
    }

    fn len(&self) -> usize {
        self.decks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
