//! Opponent decisions. Both functions are pure so the computer's play is
//! reproducible from the hand order alone.

use crate::cards::{Card, Color};
use crate::hand::can_play;

/// Index of the first card in hand order that is legal on `top`.
///
/// ```
/// use uno_rs::cards::{parse_cards, Card, Color, Value};
/// use uno_rs::strategy::choose_move;
///
/// let hand = parse_cards("b1 r4 w r9").unwrap();
/// let top = Card::new(Color::Red, Value::Seven);
/// assert_eq!(choose_move(&hand, &top), Some(1));
/// ```
pub fn choose_move(hand: &[Card], top: &Card) -> Option<usize> {
    hand.iter().position(|card| can_play(card, top))
}

/// Color for a wild the computer just played: the most common concrete color left
/// in its hand. Ties go to the earlier color in [`Color::PLAYABLE`]; a hand with no
/// colored cards picks [`Color::DEFAULT`].
pub fn choose_wild_color(hand: &[Card]) -> Color {
    let count = |color: Color| hand.iter().filter(|c| c.color() == color).count();
    let mut best = Color::DEFAULT;
    let mut best_count = count(best);
    for &color in &Color::PLAYABLE {
        let n = count(color);
        if n > best_count {
            best = color;
            best_count = n;
        }
    }
    best
}
