//! Wire representations of cards and decks
//!
//! Kept separate from the domain entities: the API shape is free to differ
//! from how decks are held in memory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Card, Deck};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDto {
    pub value: String,
    pub suit: String,
    pub code: String,
}

/// Deck with its remaining cards, returned when opening a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDto {
    pub deck_id: Uuid,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardDto>,
}

/// Deck without cards, returned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummaryDto {
    pub deck_id: Uuid,
    pub shuffled: bool,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub ok: bool,
    pub decks: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            value: card.rank.to_string(),
            suit: card.suit.to_string(),
            code: card.code().to_string(),
        }
    }
}

impl From<&Deck> for DeckDto {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
            cards: to_card_dtos(deck.cards()),
        }
    }
}

impl From<&Deck> for DeckSummaryDto {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
        }
    }
}

pub fn to_card_dtos(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(CardDto::from).collect()
}
