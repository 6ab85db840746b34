use crate::cards::{Card, Color, Value};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a standard UNO deck.
pub const STANDARD_DECK_SIZE: usize = 104;

/// Copies of each wild face in a standard deck.
const WILD_COPIES: usize = 2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("the draw pile is empty")]
    Empty,
}

/// The draw pile. The top of the pile is the end of the sequence.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 104-card deck in a fixed order. No shuffling happens here.
    ///
    /// ```
    /// use uno_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for &color in &Color::PLAYABLE {
            for &value in &Value::NUMBERS {
                cards.push(Card::new(color, value));
                if value != Value::Zero {
                    cards.push(Card::new(color, value));
                }
            }
            for &value in &Value::ACTIONS {
                cards.push(Card::new(color, value));
                cards.push(Card::new(color, value));
            }
        }
        for &value in &Value::WILDS {
            for _ in 0..WILD_COPIES {
                cards.push(Card::wild(value));
            }
        }
        Self { cards }
    }

    /// A pile in caller-chosen order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left to draw.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    ///
    /// This is a Fisher-Yates pass from the last index down, so every permutation
    /// is equally likely given a fair source.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the pile.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }
}
