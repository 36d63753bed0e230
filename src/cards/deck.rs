use super::card::Card;
use super::context::GameContext;
use super::rank::Rank;
use super::suit::Suit;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::collections::VecDeque;

/// A multi-pack pool of cards split into two disjoint piles: the active pile
/// (FIFO draw order) and the burn pile (inert until a full shuffle merges it
/// back). Every card the Deck created is in exactly one of {active, burn, a
/// hand} at all times; cards are never created or destroyed after build.
#[derive(Debug)]
pub struct Deck {
    active: VecDeque<Card>,
    burn: Vec<Card>,
    packs: usize,
    context: GameContext,
    rng: SmallRng,
}

impl Deck {
    /// cards per pack. four suits of thirteen dealt ranks.
    pub const PACK: usize = 52;

    /// Build a shuffled deck of `packs` x 52 cards. A pack count under 1 is
    /// clamped to 1 rather than rejected.
    pub fn new(packs: usize, context: GameContext) -> Self {
        Self::build(packs, context, SmallRng::from_os_rng())
    }

    /// Same as ::new() but with a caller-supplied seed, so shuffles (and
    /// therefore whole games) are reproducible.
    pub fn seeded(packs: usize, context: GameContext, seed: u64) -> Self {
        Self::build(packs, context, SmallRng::seed_from_u64(seed))
    }

    fn build(packs: usize, context: GameContext, rng: SmallRng) -> Self {
        let packs = std::cmp::max(packs, 1);
        let mut deck = Self {
            active: VecDeque::with_capacity(packs * Self::PACK),
            burn: Vec::with_capacity(packs * Self::PACK),
            packs,
            context,
            rng,
        };
        for _ in 0..packs {
            for suit in Suit::ALL {
                for rank in Rank::DEALT {
                    deck.burn.push(Card::new(rank, suit, context));
                }
            }
        }
        deck.full_shuffle();
        deck
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
    pub fn burn_count(&self) -> usize {
        self.burn.len()
    }
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
    pub fn packs(&self) -> usize {
        self.packs
    }
    pub fn context(&self) -> GameContext {
        self.context
    }

    /// Draw the head of the active pile. None when the pile is exhausted;
    /// when and whether to reshuffle is the caller's policy, not the Deck's.
    pub fn draw(&mut self) -> Option<Card> {
        self.active.pop_front()
    }

    /// Discard a single card onto the burn pile.
    pub fn burn_card(&mut self, card: Card) {
        self.burn.push(card);
    }

    /// Discard a whole hand onto the burn pile, emptying the hand.
    pub fn burn_hand(&mut self, cards: &mut Vec<Card>) {
        self.burn.append(cards);
    }

    /// Merge the active pile into the burn pile, permute everything into a
    /// fresh active pile, and leave the burn pile empty.
    pub fn full_shuffle(&mut self) {
        log::debug!(
            "full shuffle over {} cards",
            self.active.len() + self.burn.len()
        );
        let mut pool = std::mem::take(&mut self.burn);
        pool.extend(self.active.drain(..));
        self.active = self.permute(pool);
    }

    /// Permute only the active pile. The burn pile is untouched.
    pub fn partial_shuffle(&mut self) {
        log::debug!("partial shuffle over {} cards", self.active.len());
        let pool = self.active.drain(..).collect();
        self.active = self.permute(pool);
    }

    /// Uniform permutation by random removal: pick a uniformly random
    /// remaining card, append it to the new draw order, repeat.
    fn permute(&mut self, mut pool: Vec<Card>) -> VecDeque<Card> {
        let mut active = VecDeque::with_capacity(pool.len());
        while !pool.is_empty() {
            let index = self.rng.random_range(0..pool.len());
            active.push_back(pool.swap_remove(index));
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn deck(packs: usize, seed: u64) -> Deck {
        Deck::seeded(packs, GameContext::Blackjack, seed)
    }

    fn census(deck: &Deck) -> HashMap<Card, usize> {
        let mut count = HashMap::new();
        for card in deck.active.iter().chain(deck.burn.iter()) {
            *count.entry(*card).or_insert(0) += 1;
        }
        count
    }

    #[test]
    fn build_counts() {
        let deck = deck(2, 0);
        assert_eq!(deck.active_count(), 2 * Deck::PACK);
        assert_eq!(deck.burn_count(), 0);
        assert!(!deck.is_empty());
    }

    #[test]
    fn pack_count_clamped() {
        assert_eq!(deck(0, 0).active_count(), Deck::PACK);
        assert_eq!(deck(0, 0).packs(), 1);
    }

    #[test]
    fn no_jokers_dealt() {
        let mut deck = deck(1, 7);
        assert!(!std::iter::from_fn(|| deck.draw()).any(|c| c.rank() == Rank::Joker));
    }

    #[test]
    fn draw_is_fifo() {
        let mut deck = deck(1, 42);
        let head = *deck.active.front().unwrap();
        assert_eq!(deck.draw(), Some(head));
        assert_eq!(deck.active_count(), Deck::PACK - 1);
    }

    #[test]
    fn draw_from_empty_is_none() {
        let mut deck = deck(1, 1);
        for _ in 0..Deck::PACK {
            assert!(deck.draw().is_some());
        }
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn conservation() {
        let mut deck = deck(1, 9);
        let mut hand = vec![deck.draw().unwrap(), deck.draw().unwrap()];
        let burned = deck.draw().unwrap();
        deck.burn_card(burned);
        assert_eq!(
            deck.active_count() + deck.burn_count() + hand.len(),
            Deck::PACK
        );
        deck.burn_hand(&mut hand);
        assert!(hand.is_empty());
        assert_eq!(deck.active_count() + deck.burn_count(), Deck::PACK);
        assert_eq!(deck.burn_count(), 3);
    }

    #[test]
    fn full_shuffle_reclaims_burn() {
        let mut deck = deck(1, 5);
        for _ in 0..10 {
            let card = deck.draw().unwrap();
            deck.burn_card(card);
        }
        let before = census(&deck);
        deck.full_shuffle();
        assert_eq!(deck.burn_count(), 0);
        assert_eq!(deck.active_count(), Deck::PACK);
        assert_eq!(census(&deck), before);
    }

    #[test]
    fn partial_shuffle_leaves_burn() {
        let mut deck = deck(1, 5);
        for _ in 0..10 {
            let card = deck.draw().unwrap();
            deck.burn_card(card);
        }
        let before = census(&deck);
        deck.partial_shuffle();
        assert_eq!(deck.burn_count(), 10);
        assert_eq!(deck.active_count(), Deck::PACK - 10);
        assert_eq!(census(&deck), before);
    }

    #[test]
    fn one_card_shuffle_is_noop() {
        let mut deck = deck(1, 3);
        for _ in 0..(Deck::PACK - 1) {
            let card = deck.draw().unwrap();
            deck.burn_card(card);
        }
        let last = *deck.active.front().unwrap();
        deck.partial_shuffle();
        assert_eq!(deck.draw(), Some(last));
    }

    #[test]
    fn seeded_decks_agree() {
        let mut a = deck(1, 123);
        let mut b = deck(1, 123);
        for _ in 0..Deck::PACK {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
