//! Deck service
//!
//! Builds card sets, stores decks and draws from them through the repository.

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::application::ApplicationResult;
use crate::domain::{self, Card, Deck};
use crate::infrastructure::traits::DeckRepository;

/// Service for creating, opening and drawing from decks.
pub struct DeckService {
    repository: Arc<dyn DeckRepository>,
}

impl DeckService {
    /// Create a new deck service.
    pub fn new(repository: Arc<dyn DeckRepository>) -> Self {
        Self { repository }
    }

    /// Create and store a new deck.
    ///
    /// Explicit `codes` select the cards in the given order and force an
    /// unshuffled deck; otherwise the full set is used, shuffled on request.
    #[instrument(level = "debug", skip(self, codes), fields(n_codes = codes.len()))]
    pub fn create_deck<S: AsRef<str>>(
        &self,
        shuffle: bool,
        codes: &[S],
    ) -> ApplicationResult<Deck> {
        let (shuffled, cards) = if !codes.is_empty() {
            (false, domain::set_by_codes(codes)?)
        } else if shuffle {
            (true, domain::shuffled_set())
        } else {
            (false, domain::default_set())
        };

        let deck = Deck::new(shuffled, cards);
        self.repository.add(deck.clone());
        info!(
            "created deck {} (shuffled={}, remaining={})",
            deck.id(),
            deck.shuffled(),
            deck.remaining()
        );
        Ok(deck)
    }

    /// Snapshot of an existing deck.
    #[instrument(level = "debug", skip(self))]
    pub fn open_deck(&self, id: Uuid) -> ApplicationResult<Deck> {
        Ok(self.repository.get_by_id(id)?)
    }

    /// Draw `amount` cards from the top of the deck.
    #[instrument(level = "debug", skip(self))]
    pub fn draw_cards(&self, id: Uuid, amount: i64) -> ApplicationResult<Vec<Card>> {
        let cards = self.repository.draw_cards(id, amount)?;
        debug!("draw_cards: id={}, drew={}", id, cards.len());
        Ok(cards)
    }

    /// Look up a card still in the deck by its code.
    #[instrument(level = "debug", skip(self))]
    pub fn find_card(&self, id: Uuid, code: &str) -> ApplicationResult<Card> {
        Ok(self.repository.card_by_code(id, code)?)
    }

    /// Number of decks currently held.
    pub fn deck_count(&self) -> usize {
        self.repository.len()
    }
}
