use crate::cards::card::Card;
use crate::Score;

/// the result of scoring a hand: the point total and whether an Ace is
/// still being counted as 11.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Total {
    pub score: Score,
    pub soft: bool,
}

/// Score a hand. Non-Ace cards sum at their point value; each Ace counts as
/// 11 when the running total stays at or under 21 and as 1 otherwise, and at
/// most one Ace is demoted from 11 to 1 afterwards if the total overshot.
/// Sorting by point value first means Aces are folded in after everything
/// else, which is what makes the single demotion sufficient for any number
/// of Aces. An empty hand scores 0 and is not soft.
pub fn evaluate(cards: &[Card]) -> Total {
    let mut values = cards.iter().map(|card| card.value()).collect::<Vec<_>>();
    values.sort_unstable();
    let mut base: Score = 0;
    let mut aces: Score = 0;
    for value in values {
        if value < 11 {
            base += value;
        } else if base + aces + 11 <= 21 {
            aces += 11;
        } else {
            aces += 1;
        }
    }
    if base + aces > 21 && aces > 10 {
        aces -= 10;
    }
    Total {
        score: base + aces,
        soft: aces > 10,
    }
}
