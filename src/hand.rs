use crate::cards::{Card, Color};
use crate::deck::{Deck, DeckError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("card index {index} out of range for a hand of {len}")]
    InvalidIndex { index: usize, len: usize },
}

/// The single legality rule: match color, match value, or play a wild.
///
/// ```
/// use uno_rs::cards::{Card, Color, Value};
/// use uno_rs::hand::can_play;
///
/// let top = Card::new(Color::Red, Value::Seven);
/// assert!(can_play(&Card::new(Color::Red, Value::Five), &top));
/// assert!(can_play(&Card::new(Color::Blue, Value::Seven), &top));
/// assert!(can_play(&Card::wild(Value::Wild), &top));
/// assert!(!can_play(&Card::new(Color::Blue, Value::Five), &top));
/// ```
pub fn can_play(card: &Card, top: &Card) -> bool {
    card.color() == top.color() || card.value() == top.value() || card.color() == Color::Wild
}

/// Cards held by one seat, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Move the top card of `deck` into this hand. Nothing moves on an empty deck.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<&Card, DeckError> {
        let card = deck.draw()?;
        self.cards.push(card);
        Ok(&self.cards[self.cards.len() - 1])
    }

    /// Whether any card in the hand is legal on `top`.
    pub fn has_playable(&self, top: &Card) -> bool {
        self.cards.iter().any(|c| can_play(c, top))
    }

    /// Remove and return the card at `index` if it is legal on `top`.
    ///
    /// Returns `Ok(None)` and leaves the hand untouched for an illegal card.
    pub fn play(&mut self, index: usize, top: &Card) -> Result<Option<Card>, HandError> {
        let card = self.cards.get(index).ok_or(HandError::InvalidIndex { index, len: self.len() })?;
        if !can_play(card, top) {
            return Ok(None);
        }
        Ok(Some(self.cards.remove(index)))
    }
}
