// Engine boundary for adapters. The TUI, the scripted driver and the computer
// agent drive a game through this trait and never reach into `Game` internals.

use crate::cards::{Card, Color};
use crate::game::{ComputerMove, Game, GameError, Phase, Seat};

pub trait GameEngine {
    // Game lifecycle
    fn start(&mut self) -> Result<(), GameError>;

    // Moves
    fn player_play(&mut self, index: usize) -> Result<(), GameError>;
    fn player_draw(&mut self) -> Result<(), GameError>;
    fn choose_wild_color(&mut self, color: Color) -> Result<(), GameError>;
    fn computer_turn(&mut self) -> Result<ComputerMove, GameError>;

    // Queries
    fn top_card(&self) -> &Card;
    fn player_hand(&self) -> &[Card];
    fn computer_hand(&self) -> &[Card];
    fn turn(&self) -> Seat;
    fn phase(&self) -> Phase;
    fn is_pending_wild_choice(&self) -> bool;
    fn pending_wild(&self) -> Option<&Card>;
    fn winner(&self) -> Option<Seat>;
    fn message(&self) -> &str;
    fn deck_remaining(&self) -> usize;
}

impl GameEngine for Game {
    fn start(&mut self) -> Result<(), GameError> {
        self.start()
    }

    fn player_play(&mut self, index: usize) -> Result<(), GameError> {
        self.player_play(index)
    }
    fn player_draw(&mut self) -> Result<(), GameError> {
        self.player_draw()
    }
    fn choose_wild_color(&mut self, color: Color) -> Result<(), GameError> {
        self.choose_wild_color(color)
    }
    fn computer_turn(&mut self) -> Result<ComputerMove, GameError> {
        self.computer_turn()
    }

    fn top_card(&self) -> &Card {
        self.top_card()
    }
    fn player_hand(&self) -> &[Card] {
        self.player_hand()
    }
    fn computer_hand(&self) -> &[Card] {
        self.computer_hand()
    }
    fn turn(&self) -> Seat {
        self.turn()
    }
    fn phase(&self) -> Phase {
        self.phase()
    }
    fn is_pending_wild_choice(&self) -> bool {
        self.is_pending_wild_choice()
    }
    fn pending_wild(&self) -> Option<&Card> {
        self.pending_wild()
    }
    fn winner(&self) -> Option<Seat> {
        self.winner()
    }
    fn message(&self) -> &str {
        self.message()
    }
    fn deck_remaining(&self) -> usize {
        self.deck_remaining()
    }
}
