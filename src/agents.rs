//! Agents: the glue between a frontend and the engine.
//!
//! Human input arrives as [`Action`] intents (from key presses or script lines)
//! and is applied with [`apply_action`]. The computer side is driven by
//! [`ComputerAgent`], which owns the pause between the player's move and the
//! computer's reply so frontends stay thin.

use crate::cards::{Color, ColorParseError};
use crate::engine::GameEngine;
use crate::game::GameError;
use std::fmt;
use std::str::FromStr;

mod computer;

pub use computer::ComputerAgent;

/// Player intents, typically produced by a UI or a script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Play(usize),
    Draw,
    ChooseColor(Color),
    NewGame,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play(index) => write!(f, "play {index}"),
            Action::Draw => f.write_str("draw"),
            Action::ChooseColor(color) => write!(f, "color {}", color.name().to_lowercase()),
            Action::NewGame => f.write_str("new"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionParseError {
    #[error("unknown command: '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid card index: '{0}'")]
    Index(String),
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Accepts `play N`, `draw`, `color C` and `new`, or their first letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ActionParseError::Unknown(s.to_string()));
        };
        let arg = words.next();
        match verb.to_ascii_lowercase().as_str() {
            "play" | "p" => {
                let raw = arg.ok_or(ActionParseError::MissingArgument("play"))?;
                raw.parse::<usize>()
                    .map(Action::Play)
                    .map_err(|_| ActionParseError::Index(raw.to_string()))
            }
            "draw" | "d" => Ok(Action::Draw),
            "color" | "c" => {
                let raw = arg.ok_or(ActionParseError::MissingArgument("color"))?;
                Ok(Action::ChooseColor(raw.parse()?))
            }
            "new" | "n" => Ok(Action::NewGame),
            _ => Err(ActionParseError::Unknown(s.trim().to_string())),
        }
    }
}

/// Apply a player intent to the engine.
pub fn apply_action(engine: &mut dyn GameEngine, action: Action) -> Result<(), GameError> {
    match action {
        Action::Play(index) => engine.player_play(index),
        Action::Draw => engine.player_draw(),
        Action::ChooseColor(color) => engine.choose_wild_color(color),
        Action::NewGame => engine.start(),
    }
}
