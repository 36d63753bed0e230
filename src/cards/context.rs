use super::rank::Rank;
use crate::Score;

/// GameContext names the game a Card is scored under. Closed set: adding a
/// game means adding a variant and a value arm here, never touching Card.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum GameContext {
    #[default]
    Blackjack,
}

impl GameContext {
    /// point value of a rank under this context.
    /// Blackjack: Ace is 11 (demotion to 1 belongs to hand valuation,
    /// not the card), face cards are 10, numeric ranks at face value.
    pub fn value(&self, rank: Rank) -> Score {
        match self {
            GameContext::Blackjack => match rank {
                Rank::Ace => 11,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
                numeric => numeric as Score,
            },
        }
    }
}

impl std::fmt::Display for GameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GameContext::Blackjack => write!(f, "Blackjack"),
        }
    }
}
