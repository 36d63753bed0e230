use super::action::Move;
use super::value::Total;
use crate::cards::card::Card;
use crate::{Chips, Score};

/// One hand of cards and its derived state. The score and soft flag are
/// snapshots: they refresh only when a caller recomputes them, never
/// automatically on mutation.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    score: Score,
    soft: bool,
    last: Move,
    wager: Chips,
}

impl Hand {
    pub const WAGER: Chips = 50;

    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
            soft: false,
            last: Move::Hit,
            wager: Self::WAGER,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn is_soft(&self) -> bool {
        self.soft
    }
    pub fn last(&self) -> Move {
        self.last
    }
    pub fn wager(&self) -> Chips {
        self.wager
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub fn set_last(&mut self, last: Move) {
        self.last = last;
    }
    pub fn set_total(&mut self, total: Total) {
        self.score = total.score;
        self.soft = total.soft;
    }

    /// 21 on exactly two cards
    pub fn is_blackjack(&self) -> bool {
        self.score == 21 && self.cards.len() == 2
    }
    /// over 21
    pub fn is_bust(&self) -> bool {
        self.score > 21
    }

    /// Remove and return the second card, for a split. None unless the hand
    /// holds exactly two cards.
    pub fn take_second(&mut self) -> Option<Card> {
        match self.cards.len() {
            2 => Some(self.cards.remove(1)),
            _ => None,
        }
    }

    /// Empty the hand into the given pile and reset derived state.
    pub fn drain_into(&mut self, pile: &mut Vec<Card>) {
        pile.append(&mut self.cards);
        self.score = 0;
        self.soft = false;
        self.last = Move::Hit;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
