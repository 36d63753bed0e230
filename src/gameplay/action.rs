#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("did not understand move: {0}")]
pub struct UnknownMove(String);

/// The closed set of Blackjack moves. Stay and Double are terminal for a
/// hand once recorded, but the engine enforces that, not the enum.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    #[default]
    Hit,
    Stay,
    Double,
    Split,
    Quit,
}

impl Move {
    pub const ALL: [Self; 5] = [Move::Hit, Move::Stay, Move::Double, Move::Split, Move::Quit];

    pub fn name(&self) -> &'static str {
        match self {
            Move::Hit => "Hit",
            Move::Stay => "Stay",
            Move::Double => "Double",
            Move::Split => "Split",
            Move::Quit => "Quit",
        }
    }

    /// the number shown next to the move in the CLI prompt
    pub fn ordinal(&self) -> usize {
        match self {
            Move::Hit => 1,
            Move::Stay => 2,
            Move::Double => 3,
            Move::Split => 4,
            Move::Quit => 5,
        }
    }
}

/// boundary conversion for CLI input: a number 1-5 or a case-insensitive
/// name. this is the only place an integer code becomes a Move.
impl TryFrom<&str> for Move {
    type Error = UnknownMove;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "1" | "hit" => Ok(Move::Hit),
            "2" | "stay" => Ok(Move::Stay),
            "3" | "double" => Ok(Move::Double),
            "4" | "split" => Ok(Move::Split),
            "5" | "quit" => Ok(Move::Quit),
            other => Err(UnknownMove(other.to_string())),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Move::Hit => write!(f, "{}", "HIT".cyan()),
            Move::Stay => write!(f, "{}", "STAY".yellow()),
            Move::Double => write!(f, "{}", "DOUBLE".green()),
            Move::Split => write!(f, "{}", "SPLIT".magenta()),
            Move::Quit => write!(f, "{}", "QUIT".red()),
        }
    }
}

use colored::*;
use std::fmt::{Display, Formatter};
