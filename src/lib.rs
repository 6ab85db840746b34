//! uno-rs: a two-player UNO rules engine
//!
//! Goals:
//! - One human player against a simple computer opponent
//! - An explicit, reproducible game state (seeded shuffles)
//! - No panics for invalid moves; every rejected move is a `Result` error and
//!   leaves the game untouched
//!
//! ## Quick start: a scripted turn
//! ```
//! use uno_rs::cards::{parse_cards, Color};
//! use uno_rs::deck::Deck;
//! use uno_rs::game::{Game, GameConfig, Phase};
//!
//! // Cards are dealt from the end: player r1, computer g2, player w, computer g3, top r9.
//! let mut order = parse_cards("r1 g2 w g3 r9 y4").unwrap();
//! order.reverse();
//! let config = GameConfig::default().with_hand_size(2).unwrap();
//! let mut game = Game::from_deck(config, Deck::from_cards(order)).unwrap();
//!
//! game.player_play(1).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingColorChoice);
//! game.choose_wild_color(Color::Green).unwrap();
//! assert_eq!(game.top_card().color(), Color::Green);
//! assert_eq!(game.phase(), Phase::ComputerTurn);
//! ```
//!
//! ## Playing
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin uno-rs
//! ```
//! or pipe commands through the line driver:
//! ```sh
//! printf 'draw\nshow\n' | UNO_SEED=7 RUST_LOG=debug cargo run --bin uno-rs
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod hand;
pub mod script;
pub mod strategy;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
