//! Line-oriented driver: one command per line, no terminal UI.
//!
//! Commands are the [`Action`] forms (`play N`, `draw`, `color C`, `new`) plus
//! `show` and `quit`. Lines starting with `#` are comments. The computer replies
//! right after each player move, without a delay.

use crate::agents::{apply_action, Action};
use crate::engine::GameEngine;
use crate::game::{ComputerMove, Game, GameConfig, GameError, Phase, Seat};
use log::{debug, warn};
use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ScriptError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// What happened over a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScriptSummary {
    pub commands: usize,
    pub errors: usize,
    pub winner: Option<Seat>,
}

/// Run commands from `input` against a new game, writing the board to `output`.
pub fn run_script<R: BufRead, W: Write>(
    config: GameConfig,
    input: R,
    output: W,
) -> Result<ScriptSummary, ScriptError> {
    let game = Game::new(config)?;
    run_script_with(game, input, output)
}

/// Same as [`run_script`] for an already dealt game.
pub fn run_script_with<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    mut output: W,
) -> Result<ScriptSummary, ScriptError> {
    let mut summary = ScriptSummary::default();
    write_board(&game, &mut output)?;
    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.is_empty() || cmd.starts_with('#') {
            continue;
        }
        summary.commands += 1;
        debug!("script: {cmd}");
        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "q" => break,
            "show" | "s" => {
                write_board(&game, &mut output)?;
                continue;
            }
            _ => {}
        }
        let action = match cmd.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                summary.errors += 1;
                writeln!(output, "error: {err}")?;
                continue;
            }
        };
        if let Err(err) = step(&mut game, action, &mut output)? {
            summary.errors += 1;
            warn!("script command '{cmd}' rejected: {err}");
            writeln!(output, "error: {err}")?;
        }
        write_board(&game, &mut output)?;
    }
    summary.winner = game.winner();
    Ok(summary)
}

/// Apply one action and, when the turn passes, the computer's reply. The outer
/// `Result` carries output failures, the inner one game rejections.
fn step<W: Write>(
    game: &mut Game,
    action: Action,
    output: &mut W,
) -> io::Result<Result<(), GameError>> {
    if let Err(err) = apply_action(game, action) {
        return Ok(Err(err));
    }
    if game.phase() != Phase::ComputerTurn {
        return Ok(Ok(()));
    }
    match game.computer_turn() {
        Ok(ComputerMove::Played(card)) => writeln!(output, "computer plays {card}")?,
        Ok(ComputerMove::Drew) => writeln!(output, "computer draws a card")?,
        Err(err) => return Ok(Err(err)),
    }
    Ok(Ok(()))
}

/// Render the board as plain text.
pub fn write_board<W: Write>(game: &dyn GameEngine, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "top: {} | deck: {} | computer: {} cards",
        game.top_card(),
        game.deck_remaining(),
        game.computer_hand().len()
    )?;
    let hand: Vec<String> = game
        .player_hand()
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{i}:{}", card.code()))
        .collect();
    writeln!(output, "hand: {}", hand.join(" "))?;
    if let Some(card) = game.pending_wild() {
        writeln!(output, "pending: {card}")?;
    }
    writeln!(output, "> {}", game.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;

    fn stacked_game() -> Game {
        // player: r1 w ; computer: g2 g3 ; top r9 ; y4 then y5 left to draw
        let mut order = parse_cards("r1 g2 w g3 r9 y4 y5").unwrap();
        order.reverse();
        let config = GameConfig::default().with_hand_size(2).unwrap();
        Game::from_deck(config, Deck::from_cards(order)).unwrap()
    }

    fn run(script: &str) -> (ScriptSummary, String) {
        let mut out = Vec::new();
        let summary = run_script_with(stacked_game(), script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_through_a_wild_to_a_win() {
        let (summary, out) = run("play 1\ncolor red\nplay 0\n");
        assert_eq!(summary.commands, 3);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.winner, Some(Seat::Player));
        assert!(out.contains("pending: Wild"));
        assert!(out.contains("computer draws a card"));
        assert!(out.contains("Player wins!"));
    }

    #[test]
    fn rejected_moves_are_reported_and_skipped() {
        let (summary, out) = run("# comment\n\nplay 7\ncolor red\nbogus\nquit\ndraw\n");
        assert_eq!(summary.commands, 4);
        assert_eq!(summary.errors, 3);
        assert_eq!(summary.winner, None);
        assert!(out.contains("error: card index 7 out of range for a hand of 2"));
        assert!(out.contains("error: cannot choose a color while awaiting the player's move"));
        assert!(out.contains("error: unknown command: 'bogus'"));
    }

    #[test]
    fn computer_replies_after_a_draw() {
        let (summary, out) = run("draw\nshow\n");
        assert_eq!(summary.errors, 0);
        assert!(out.contains("computer draws a card"));
        assert!(out.contains("hand: 0:r1 1:w 2:y4"));
    }
}
