//! Domain entities: cards and decks

use std::fmt;

use uuid::Uuid;

/// Number of cards in the canonical set.
pub const MAX_CARDS: usize = 52;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Display name, e.g. "SPADES".
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Spades => "SPADES",
            Suit::Diamonds => "DIAMONDS",
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card rank. `One` through `Nine` are ranks of their own, distinct from `Ace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Display name, e.g. "ACE", "7", "QUEEN".
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::One => "1",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card codes indexed by `[suit][rank]`: suit letter followed by rank symbol.
const CODES: [[&str; 13]; 4] = [
    [
        "SA", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "SJ", "SQ", "SK",
    ],
    [
        "DA", "D1", "D2", "D3", "D4", "D5", "D6", "D7", "D8", "D9", "DJ", "DQ", "DK",
    ],
    [
        "CA", "C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9", "CJ", "CQ", "CK",
    ],
    [
        "HA", "H1", "H2", "H3", "H4", "H5", "H6", "H7", "H8", "H9", "HJ", "HQ", "HK",
    ],
];

/// A playing card. The code is always derived from `(suit, rank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Face value; serialized as `value` on the wire.
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { rank, suit }
    }

    /// Two-character code, e.g. "SA", "D1", "HK".
    pub fn code(&self) -> &'static str {
        CODES[self.suit.index()][self.rank.index()]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({})", self.rank, self.suit, self.code())
    }
}

/// A deck of cards. The front of `cards` is the next card to draw.
///
/// `remaining` is not stored separately: it is the length of `cards`,
/// so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: Uuid,
    shuffled: bool,
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck with a fresh v4 id.
    pub fn new(shuffled: bool, cards: Vec<Card>) -> Self {
        Self::with_id(Uuid::new_v4(), shuffled, cards)
    }

    pub fn with_id(id: Uuid, shuffled: bool, cards: Vec<Card>) -> Self {
        Self {
            id,
            shuffled,
            cards,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// First card with the given code, compared case-insensitively.
    pub fn card_by_code(&self, code: &str) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.code().eq_ignore_ascii_case(code))
    }

    /// Remove and return the first `amount` cards, or `None` if fewer remain.
    pub fn take_front(&mut self, amount: usize) -> Option<Vec<Card>> {
        if amount > self.cards.len() {
            return None;
        }
        Some(self.cards.drain(..amount).collect())
    }
}
