use super::context::GameContext;
use super::rank::Rank;
use super::suit::Suit;
use crate::Score;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("cannot compare cards from different game contexts")]
    ContextMismatch,
}

/// An immutable playing card. Created once when a Deck is built and only ever
/// relocated between piles and hands after that.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    context: GameContext,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit, context: GameContext) -> Self {
        Self {
            rank,
            suit,
            context,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn context(&self) -> GameContext {
        self.context
    }

    /// point value under this card's own context
    pub fn value(&self) -> Score {
        self.context.value(self.rank)
    }

    /// game-value ordering. Ten and King compare Equal under Blackjack.
    /// comparing across contexts is a caller bug and reported as such.
    pub fn compare(&self, other: &Self) -> std::result::Result<Ordering, CardError> {
        if self.context != other.context {
            return Err(CardError::ContextMismatch);
        }
        Ok(self.value().cmp(&other.value()))
    }
}

/// rank and suit only. the context a card is scored under is not identity.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}
impl Eq for Card {}
impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
