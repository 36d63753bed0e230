//! Move legality and execution. Pure decision and transition logic over a
//! Player, a hand index, and a Deck; no state of its own. Per hand this is
//! a two-state machine: Active (accepting moves) until Stay or Double is
//! recorded or a forced Stay lands (bust, blackjack, dealer threshold), and
//! Frozen from then on. Split forks one Active hand into two.

use super::action::Move;
use super::player::Player;
use crate::cards::deck::Deck;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    Illegal(Move),
    #[error("deck exhausted mid-move")]
    Exhausted,
}

/// Stay and Quit are always legal. Hit needs a live score, Double and Split
/// defer to the player-state predicates. Relies on the stored score being
/// fresh, like everything here.
pub fn is_legal(player: &Player, hand: usize, mv: Move) -> bool {
    match mv {
        Move::Stay | Move::Quit => true,
        Move::Hit => player.hand(hand).score() < 21,
        Move::Double => player.can_double_down(hand),
        Move::Split => player.can_split(hand),
    }
}

/// Apply a single move to a hand and rescore it. Illegal requests are
/// rejected up front with nothing mutated. Quit is a session signal, not a
/// hand mutation, and is a no-op here; execute() handles it.
pub fn perform(
    player: &mut Player,
    hand: usize,
    mv: Move,
    deck: &mut Deck,
) -> Result<(), EngineError> {
    if !is_legal(player, hand, mv) {
        return Err(EngineError::Illegal(mv));
    }
    match mv {
        Move::Quit => Ok(()),
        Move::Stay => {
            player.set_last_move(hand, Move::Stay);
            player.calculate_hand_score(hand);
            Ok(())
        }
        // a Double would also raise the wager; wagering is out of scope
        Move::Hit | Move::Double => {
            let card = deck.draw().ok_or(EngineError::Exhausted)?;
            player.deal(hand, card);
            player.set_last_move(hand, mv);
            player.calculate_hand_score(hand);
            Ok(())
        }
        Move::Split => {
            let next = player.next_hand();
            if !player.split_cards(hand, next) {
                return Err(EngineError::Illegal(Move::Split));
            }
            player.set_last_move(hand, Move::Split);
            let first = deck.draw().ok_or(EngineError::Exhausted)?;
            let second = deck.draw().ok_or(EngineError::Exhausted)?;
            player.deal(hand, first);
            player.deal(next, second);
            player.calculate_hand_score(hand);
            player.calculate_hand_score(next);
            Ok(())
        }
    }
}

/// The move the rules force next, if any. A hand that already Stayed is
/// frozen. The dealer hits below 17 and on soft 17, and stays otherwise; a
/// player at 21 or more (blackjack or bust) is forced to Stay; anything
/// else is a free choice. Rescores the hand before deciding.
pub fn required(player: &mut Player, hand: usize) -> Option<Move> {
    player.calculate_hand_score(hand);
    if player.last_move(hand) == Move::Stay {
        return None;
    }
    let score = player.hand(hand).score();
    if player.is_dealer() {
        if score < 17 || (score == 17 && player.hand(hand).is_soft()) {
            Some(Move::Hit)
        } else {
            Some(Move::Stay)
        }
    } else if score >= 21 {
        Some(Move::Stay)
    } else {
        None
    }
}

/// Apply a move, then keep applying whatever the rules force until nothing
/// is forced: the dealer hits itself to a stand, a busted or blackjack hand
/// stays itself. Ok(false) on Quit, without touching the hand. Iteration is
/// bounded: every forced Hit grows a hand toward a certain bust.
pub fn execute(
    player: &mut Player,
    hand: usize,
    mv: Move,
    deck: &mut Deck,
) -> Result<bool, EngineError> {
    if mv == Move::Quit {
        return Ok(false);
    }
    let mut next = mv;
    loop {
        perform(player, hand, next, deck)?;
        match required(player, hand) {
            Some(forced) => {
                log::debug!("{} forced to {} on hand {}", player.name(), forced, hand);
                next = forced;
            }
            None => return Ok(true),
        }
    }
}

/// A hand takes no more moves once it busted, hit blackjack, or recorded a
/// Stay or Double.
pub fn is_done(player: &Player, hand: usize) -> bool {
    player.did_bust(hand)
        || player.has_blackjack(hand)
        || matches!(player.last_move(hand), Move::Stay | Move::Double)
}
