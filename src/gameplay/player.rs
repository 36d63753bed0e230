use super::action::Move;
use super::hand::Hand;
use super::value;
use crate::cards::card::Card;
use crate::Chips;
use std::cmp::Ordering;

/// A seat at the table: a name, a dealer flag, winnings, and one or more
/// hands. Hand 0 always exists; extra hands appear only through splits, and
/// only for non-dealers.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    dealer: bool,
    winnings: Chips,
    hands: Vec<Hand>,
}

impl Player {
    pub fn new(name: &str, dealer: bool) -> Self {
        Self {
            name: name.to_string(),
            dealer,
            winnings: 500,
            hands: vec![Hand::new()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_dealer(&self) -> bool {
        self.dealer
    }
    pub fn winnings(&self) -> Chips {
        self.winnings
    }
    pub fn add_winnings(&mut self, amount: Chips) {
        self.winnings += amount;
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }
    pub fn hand(&self, hand: usize) -> &Hand {
        &self.hands[hand]
    }
    pub fn hand_mut(&mut self, hand: usize) -> &mut Hand {
        &mut self.hands[hand]
    }

    /// Append a fresh empty hand and return its index. Used by splits.
    pub fn next_hand(&mut self) -> usize {
        self.hands.push(Hand::new());
        self.hands.len() - 1
    }

    pub fn deal(&mut self, hand: usize, card: Card) {
        self.hands[hand].push(card);
    }

    /// A split needs exactly two cards of equal game value. Ten and King
    /// split; Ten and Nine do not. The dealer never splits.
    pub fn can_split(&self, hand: usize) -> bool {
        if self.dealer {
            return false;
        }
        match self.hands[hand].cards() {
            [a, b] => matches!(a.compare(b), Ok(Ordering::Equal)),
            _ => false,
        }
    }

    /// A double needs exactly two cards and no blackjack. Dealer never doubles.
    pub fn can_double_down(&self, hand: usize) -> bool {
        if self.dealer || self.has_blackjack(hand) {
            return false;
        }
        self.hands[hand].cards().len() == 2
    }

    /// Move the second card of `from` into `to`. False, with nothing moved,
    /// if the source is unsplittable or the target already has cards.
    pub fn split_cards(&mut self, from: usize, to: usize) -> bool {
        if !self.can_split(from) || !self.hands[to].cards().is_empty() {
            return false;
        }
        match self.hands[from].take_second() {
            Some(card) => {
                self.hands[to].push(card);
                true
            }
            None => false,
        }
    }

    pub fn has_blackjack(&self, hand: usize) -> bool {
        self.hands[hand].is_blackjack()
    }
    pub fn did_bust(&self, hand: usize) -> bool {
        self.hands[hand].is_bust()
    }

    pub fn last_move(&self, hand: usize) -> Move {
        self.hands[hand].last()
    }
    pub fn set_last_move(&mut self, hand: usize, last: Move) {
        self.hands[hand].set_last(last);
    }

    /// Recompute the stored score and soft flag for a hand. Callers own the
    /// freshness contract: run this after any mutation.
    pub fn calculate_hand_score(&mut self, hand: usize) {
        let total = value::evaluate(self.hands[hand].cards());
        self.hands[hand].set_total(total);
    }

    /// Drain every card from every hand for burning and reset to a single
    /// fresh hand, ready for the next round.
    pub fn burn_all(&mut self) -> Vec<Card> {
        let mut cards = Vec::new();
        for hand in self.hands.iter_mut() {
            hand.drain_into(&mut cards);
        }
        self.hands.truncate(1);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::context::GameContext;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Hearts, GameContext::Blackjack)
    }

    fn dealt(ranks: &[Rank]) -> Player {
        let mut player = Player::new("Tyler", false);
        for &rank in ranks {
            player.deal(0, card(rank));
        }
        player.calculate_hand_score(0);
        player
    }

    #[test]
    fn split_is_value_based() {
        assert!(dealt(&[Rank::Ten, Rank::King]).can_split(0));
        assert!(dealt(&[Rank::Ace, Rank::Ace]).can_split(0));
        assert!(!dealt(&[Rank::Ten, Rank::Nine]).can_split(0));
        assert!(!dealt(&[Rank::Ten, Rank::King, Rank::Two]).can_split(0));
    }

    #[test]
    fn dealer_never_splits_or_doubles() {
        let mut dealer = Player::new("Dealer", true);
        dealer.deal(0, card(Rank::Eight));
        dealer.deal(0, card(Rank::Eight));
        dealer.calculate_hand_score(0);
        assert!(!dealer.can_split(0));
        assert!(!dealer.can_double_down(0));
    }

    #[test]
    fn double_down_rules() {
        assert!(!dealt(&[Rank::Five, Rank::Six]).can_split(0));
        assert!(dealt(&[Rank::Five, Rank::Six]).can_double_down(0));
        assert!(!dealt(&[Rank::Ace, Rank::King]).can_double_down(0)); // blackjack
        assert!(!dealt(&[Rank::Two, Rank::Three, Rank::Four]).can_double_down(0));
    }

    #[test]
    fn split_moves_one_card() {
        let mut player = dealt(&[Rank::Eight, Rank::Eight]);
        let to = player.next_hand();
        assert!(player.split_cards(0, to));
        assert_eq!(player.hand(0).cards().len(), 1);
        assert_eq!(player.hand(to).cards().len(), 1);
    }

    #[test]
    fn split_refuses_occupied_target() {
        let mut player = dealt(&[Rank::Eight, Rank::Eight]);
        let to = player.next_hand();
        player.deal(to, card(Rank::Two));
        assert!(!player.split_cards(0, to));
        assert_eq!(player.hand(0).cards().len(), 2);
    }

    #[test]
    fn split_refuses_unequal_values() {
        let mut player = dealt(&[Rank::Ten, Rank::Nine]);
        let to = player.next_hand();
        assert!(!player.split_cards(0, to));
    }

    #[test]
    fn blackjack_and_bust() {
        assert!(dealt(&[Rank::Ace, Rank::King]).has_blackjack(0));
        assert!(!dealt(&[Rank::Seven, Rank::Seven, Rank::Seven]).has_blackjack(0));
        assert!(dealt(&[Rank::King, Rank::Queen, Rank::Five]).did_bust(0));
        assert!(!dealt(&[Rank::King, Rank::Queen]).did_bust(0));
    }

    #[test]
    fn scores_are_snapshots() {
        let mut player = dealt(&[Rank::Five]);
        player.deal(0, card(Rank::Six));
        assert_eq!(player.hand(0).score(), 5); // stale until recomputed
        player.calculate_hand_score(0);
        assert_eq!(player.hand(0).score(), 11);
    }

    #[test]
    fn burn_all_resets() {
        let mut player = dealt(&[Rank::Eight, Rank::Eight]);
        let to = player.next_hand();
        player.split_cards(0, to);
        let cards = player.burn_all();
        assert_eq!(cards.len(), 2);
        assert_eq!(player.hands().len(), 1);
        assert!(player.hand(0).cards().is_empty());
        assert_eq!(player.hand(0).score(), 0);
        assert_eq!(player.last_move(0), Move::Hit);
    }
}
