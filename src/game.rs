use crate::cards::{Card, CardError, Color};
use crate::deck::{Deck, DeckError, STANDARD_DECK_SIZE};
use crate::hand::{Hand, HandError};
use crate::strategy;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Cards dealt to each side at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Largest hand size that still leaves a card for the discard slot.
pub const MAX_HAND_SIZE: usize = (STANDARD_DECK_SIZE - 1) / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Computer,
}

impl Seat {
    pub const fn other(self) -> Seat {
        match self {
            Seat::Player => Seat::Computer,
            Seat::Computer => Seat::Player,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Seat::Player => "Player",
            Seat::Computer => "Computer",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the turn state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingColorChoice,
    ComputerTurn,
    GameOver(Seat),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingPlayerMove => f.write_str("awaiting the player's move"),
            Phase::AwaitingColorChoice => f.write_str("awaiting a wild color choice"),
            Phase::ComputerTurn => f.write_str("on the computer's turn"),
            Phase::GameOver(winner) => write!(f, "the game is over ({winner} won)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    TopCard,
    Play,
    Draw,
    Win,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::TopCard => "Top card",
            HistoryVerb::Play => "Play",
            HistoryVerb::Draw => "Draw",
            HistoryVerb::Win => "Win",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    /// `None` for the opening top card.
    pub seat: Option<Seat>,
    pub verb: HistoryVerb,
    /// Hidden (`None`) for cards the computer draws.
    pub card: Option<Card>,
}

/// Outcome of the computer's turn, for adapters that narrate it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ComputerMove {
    Played(Card),
    Drew,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("hand size must be between 1 and {max}, got {got}")]
    HandSize { got: usize, max: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("{card} cannot be played on {top}")]
    IllegalMove { card: Card, top: Card },
    #[error("cannot {action} while {phase}")]
    IllegalState { action: &'static str, phase: Phase },
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Settings applied to every game created from them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    pub hand_size: usize,
    /// Fixed seed for reproducible games; `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { hand_size: DEFAULT_HAND_SIZE, seed: None }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Result<Self, ConfigError> {
        self.hand_size = hand_size;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 || self.hand_size > MAX_HAND_SIZE {
            return Err(ConfigError::HandSize { got: self.hand_size, max: MAX_HAND_SIZE });
        }
        Ok(())
    }
}

/// The whole state of one game: draw pile, both hands, the discard slot and the
/// turn state machine.
///
/// ```
/// use uno_rs::game::{Game, GameConfig, Phase, Seat};
///
/// let game = Game::new(GameConfig::default().with_seed(7)).unwrap();
/// assert_eq!(game.player_hand().len(), 7);
/// assert_eq!(game.computer_hand().len(), 7);
/// assert_eq!(game.deck_remaining(), 104 - 15);
/// assert_eq!(game.turn(), Seat::Player);
/// assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
    deck: Deck,
    player: Hand,
    computer: Hand,
    top_card: Card,
    turn: Seat,
    phase: Phase,
    pending_wild: Option<Card>,
    message: String,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Shuffle a fresh standard deck and deal a new game.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::seeded(config, seed)
    }

    /// Deal a new game from `deck` as given, without shuffling. The last card of the
    /// deck goes to the player first.
    pub fn from_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self::deal(config, seed, rng, deck)
    }

    fn seeded(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle_with(&mut rng);
        Self::deal(config, seed, rng, deck)
    }

    fn deal(
        config: GameConfig,
        seed: u64,
        rng: ChaCha8Rng,
        mut deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let mut player = Hand::new();
        let mut computer = Hand::new();
        for _ in 0..config.hand_size {
            player.draw(&mut deck)?;
            computer.draw(&mut deck)?;
        }
        let mut top_card = deck.draw()?;
        if top_card.is_wild() {
            top_card = top_card.bind_color(Color::DEFAULT)?;
        }
        let mut game = Self {
            config,
            seed,
            rng,
            deck,
            player,
            computer,
            top_card,
            turn: Seat::Player,
            phase: Phase::AwaitingPlayerMove,
            pending_wild: None,
            message: "Your turn!".to_string(),
            history: Vec::new(),
        };
        game.record(None, HistoryVerb::TopCard, Some(game.top_card.clone()));
        info!("new game (seed {seed}), top card {}", game.top_card);
        Ok(game)
    }

    /// Replace this game with a brand-new one. The next seed comes from this game's
    /// RNG, so a seeded configuration replays the same sequence of games.
    pub fn start(&mut self) -> Result<(), GameError> {
        let seed: u64 = self.rng.random();
        *self = Self::seeded(self.config.clone(), seed)?;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed this game's deck was shuffled with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the active discard
    pub fn top_card(&self) -> &Card {
        &self.top_card
    }

    pub fn player_hand(&self) -> &[Card] {
        self.player.as_slice()
    }

    pub fn computer_hand(&self) -> &[Card] {
        self.computer.as_slice()
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.seat_hand(seat).as_slice()
    }

    fn seat_hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Player => &self.player,
            Seat::Computer => &self.computer,
        }
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending_wild_choice(&self) -> bool {
        self.pending_wild.is_some()
    }

    /// The wild card waiting for a color, if any.
    pub fn pending_wild(&self) -> Option<&Card> {
        self.pending_wild.as_ref()
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.phase {
            Phase::GameOver(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Last status line for the user. Advisory only.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// The side to move can neither play nor draw, so the round cannot go on.
    pub fn is_stalled(&self) -> bool {
        let hand = match self.phase {
            Phase::AwaitingPlayerMove => &self.player,
            Phase::ComputerTurn => &self.computer,
            _ => return false,
        };
        self.deck.is_empty() && !hand.has_playable(&self.top_card)
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 || self.history.is_empty() {
            return Vec::new();
        }
        let len = self.history.len();
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Play the card at `index` from the player's hand.
    ///
    /// A wild card waits in the pending slot until [`Game::choose_wild_color`]; any
    /// other card goes on top and the turn passes to the computer. On error nothing
    /// changes.
    pub fn player_play(&mut self, index: usize) -> Result<(), GameError> {
        self.expect_phase(Phase::AwaitingPlayerMove, "play a card")?;
        let Some(card) = self.player.play(index, &self.top_card)? else {
            return Err(self.illegal_move(index));
        };
        debug!("player plays {card}");
        if !card.is_wild() {
            self.place(Seat::Player, card);
            self.finish_move(Seat::Player);
            return Ok(());
        }
        if self.player.is_empty() {
            // Last card: nobody is left to ask, the game ends on this play.
            let card = card.bind_color(strategy::choose_wild_color(self.player.as_slice()))?;
            self.place(Seat::Player, card);
            self.finish_move(Seat::Player);
            return Ok(());
        }
        self.pending_wild = Some(card);
        self.phase = Phase::AwaitingColorChoice;
        self.message = "You played a wild card! Choose a color.".to_string();
        Ok(())
    }

    /// Bind the pending wild card to `color` and put it on top.
    pub fn choose_wild_color(&mut self, color: Color) -> Result<(), GameError> {
        self.expect_phase(Phase::AwaitingColorChoice, "choose a color")?;
        if color.is_wild() {
            return Err(CardError::WildColor.into());
        }
        let Some(pending) = self.pending_wild.as_ref() else {
            return Err(GameError::IllegalState { action: "choose a color", phase: self.phase });
        };
        let card = pending.clone().bind_color(color)?;
        self.pending_wild = None;
        debug!("player names {color}");
        self.place(Seat::Player, card);
        self.finish_move(Seat::Player);
        Ok(())
    }

    /// Draw one card for the player. Drawing always ends the turn.
    pub fn player_draw(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::AwaitingPlayerMove, "draw a card")?;
        let card = match self.player.draw(&mut self.deck) {
            Ok(card) => card.clone(),
            Err(err) => {
                warn!("player draw failed: {err}");
                return Err(err.into());
            }
        };
        debug!("player draws {card}");
        self.record(Some(Seat::Player), HistoryVerb::Draw, Some(card.clone()));
        self.pass_turn(Seat::Computer);
        self.message = format!("You drew {card}. Computer's turn!");
        Ok(())
    }

    /// Run the computer's turn: play the first legal card, otherwise draw one.
    pub fn computer_turn(&mut self) -> Result<ComputerMove, GameError> {
        self.expect_phase(Phase::ComputerTurn, "run the computer's turn")?;
        let mv = match strategy::choose_move(self.computer.as_slice(), &self.top_card) {
            Some(index) => {
                let Some(card) = self.computer.play(index, &self.top_card)? else {
                    return Err(self.illegal_move(index));
                };
                let card = if card.is_wild() {
                    card.bind_color(strategy::choose_wild_color(self.computer.as_slice()))?
                } else {
                    card
                };
                debug!("computer plays {card}");
                self.message = format!("Computer played {card}.");
                self.place(Seat::Computer, card.clone());
                ComputerMove::Played(card)
            }
            None => {
                if let Err(err) = self.computer.draw(&mut self.deck) {
                    warn!("computer draw failed: {err}");
                    return Err(err.into());
                }
                debug!("computer draws");
                self.record(Some(Seat::Computer), HistoryVerb::Draw, None);
                self.message = "Computer drew a card.".to_string();
                ComputerMove::Drew
            }
        };
        if !self.check_winner() {
            self.pass_turn(Seat::Player);
            self.message.push_str(" Your turn!");
        }
        Ok(mv)
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::IllegalState { action, phase: self.phase });
        }
        Ok(())
    }

    fn illegal_move(&self, index: usize) -> GameError {
        let hand = self.seat_hand(self.turn);
        match hand.get(index) {
            Some(card) => GameError::IllegalMove { card: card.clone(), top: self.top_card.clone() },
            None => HandError::InvalidIndex { index, len: hand.len() }.into(),
        }
    }

    fn place(&mut self, seat: Seat, card: Card) {
        self.record(Some(seat), HistoryVerb::Play, Some(card.clone()));
        self.top_card = card;
    }

    fn finish_move(&mut self, seat: Seat) {
        if self.check_winner() {
            return;
        }
        self.pass_turn(seat.other());
        if seat == Seat::Player {
            self.message = "Computer's turn!".to_string();
        }
    }

    fn check_winner(&mut self) -> bool {
        let winner = if self.player.is_empty() {
            Seat::Player
        } else if self.computer.is_empty() {
            Seat::Computer
        } else {
            return false;
        };
        self.phase = Phase::GameOver(winner);
        self.message = format!("{winner} wins!");
        self.record(Some(winner), HistoryVerb::Win, None);
        info!("game over: {winner} wins");
        true
    }

    fn pass_turn(&mut self, to: Seat) {
        self.turn = to;
        self.phase = match to {
            Seat::Player => Phase::AwaitingPlayerMove,
            Seat::Computer => Phase::ComputerTurn,
        };
    }

    fn record(&mut self, seat: Option<Seat>, verb: HistoryVerb, card: Option<Card>) {
        self.history.push(HistoryEntry { seat, verb, card });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn stacked(player: &str, computer: &str, top: &str, rest: &str) -> Game {
        let player = parse_cards(player).unwrap();
        let computer = parse_cards(computer).unwrap();
        assert_eq!(player.len(), computer.len());
        let config = GameConfig::default().with_hand_size(player.len()).unwrap();
        let mut order = Vec::new();
        for (p, c) in player.into_iter().zip(computer) {
            order.push(p);
            order.push(c);
        }
        order.extend(parse_cards(top).unwrap());
        order.extend(parse_cards(rest).unwrap());
        order.reverse();
        Game::from_deck(config, Deck::from_cards(order)).unwrap()
    }

    #[test]
    fn deal_order_alternates_and_flips_top() {
        let g = stacked("r1 r2", "g1 g2", "b5", "y9");
        assert_eq!(g.player_hand(), parse_cards("r1 r2").unwrap().as_slice());
        assert_eq!(g.computer_hand(), parse_cards("g1 g2").unwrap().as_slice());
        assert_eq!(g.top_card().code(), "b5");
        assert_eq!(g.deck_remaining(), 1);
        assert_eq!(g.history_len(), 1);
    }

    #[test]
    fn wild_top_card_gets_default_color() {
        let g = stacked("r1", "g1", "w+4", "");
        assert_eq!(g.top_card().color(), Color::DEFAULT);
        assert!(g.top_card().is_wild());
    }

    #[test]
    fn history_paging() {
        let mut g = stacked("b1 r2", "b2 g3", "b9", "y1 y2 y3");
        g.player_play(0).unwrap();
        g.computer_turn().unwrap();
        g.player_draw().unwrap();
        assert_eq!(g.history_len(), 4);
        let recent = g.history_recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[1].verb, HistoryVerb::Draw);
        let older = g.history_recent_offset(2, 2);
        assert_eq!(older[0].verb, HistoryVerb::TopCard);
        assert_eq!(older[1].verb, HistoryVerb::Play);
        assert!(g.history_recent_offset(0, 0).is_empty());
    }

    #[test]
    fn config_rejects_bad_hand_sizes() {
        assert!(GameConfig::default().with_hand_size(0).is_err());
        assert_eq!(
            GameConfig::default().with_hand_size(MAX_HAND_SIZE + 1),
            Err(ConfigError::HandSize { got: MAX_HAND_SIZE + 1, max: MAX_HAND_SIZE })
        );
        assert_eq!(GameConfig::default().with_hand_size(MAX_HAND_SIZE).unwrap().hand_size, 51);
    }

    #[test]
    fn phase_messages_read_naturally() {
        let err = GameError::IllegalState { action: "draw a card", phase: Phase::ComputerTurn };
        assert_eq!(err.to_string(), "cannot draw a card while on the computer's turn");
    }
}
