//! Terminal formatting for hands and scores. Pure string builders fed with
//! Player state; the CLI decides when to print them. All of these read the
//! stored scores, so callers recompute before rendering.

/// "Dealer has Blackjack!", "Dealer is showing:", or "Name's Hand N:".
pub fn header(player: &Player, hand: usize) -> String {
    if player.is_dealer() && player.has_blackjack(hand) {
        return format!("{}", "Dealer has Blackjack!".green().bold());
    }
    if player.is_dealer() {
        return format!("{} is showing:", player.name());
    }
    format!("{}'s Hand {}:", player.name(), hand + 1)
}

/// the score tag shown next to a player's hand: "Soft 17", "18", or
/// "Blackjack!" for a soft two-card 21.
pub fn score_tag(player: &Player, hand: usize) -> String {
    let hand = player.hand(hand);
    if hand.is_blackjack() && hand.is_soft() {
        return format!("{}", "Blackjack!".green().bold());
    }
    match hand.is_soft() {
        true => format!("Soft {}", hand.score()),
        false => format!("{}", hand.score()),
    }
}

/// one card per line, indented. the dealer shows only the up-card until
/// their blackjack is revealed.
pub fn cards(player: &Player, hand: usize) -> String {
    let reveal = !player.is_dealer() || player.has_blackjack(hand);
    player
        .hand(hand)
        .cards()
        .iter()
        .take(match reveal {
            true => usize::MAX,
            false => 1,
        })
        .map(|card| format!("\t{}", card))
        .collect::<Vec<String>>()
        .join("\n")
}

/// full render of one hand: header, score tag for non-dealers, cards.
pub fn render(player: &Player, hand: usize) -> String {
    match player.is_dealer() {
        true => format!("{}\n{}\n", header(player, hand), cards(player, hand)),
        false => format!(
            "{} {}\n{}\n",
            header(player, hand),
            score_tag(player, hand),
            cards(player, hand)
        ),
    }
}

/// "Name busted on hand 1 with a score of 25"
pub fn bust(player: &Player, hand: usize) -> String {
    let against = match player.is_dealer() {
        true => String::new(),
        false => format!("hand {} ", hand + 1),
    };
    format!(
        "{}",
        format!(
            "{} busted on {}with a score of {}",
            player.name(),
            against,
            player.hand(hand).score()
        )
        .red()
    )
}

/// "Name's Hand 1 score: 21" (the dealer gets no hand number)
pub fn final_score(player: &Player, hand: usize) -> String {
    match player.is_dealer() {
        true => format!("{}'s score: {}", player.name(), player.hand(hand).score()),
        false => format!(
            "{}'s Hand {} score: {}",
            player.name(),
            hand + 1,
            player.hand(hand).score()
        ),
    }
}

use super::player::Player;
use colored::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::context::GameContext;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn dealt(name: &str, dealer: bool, ranks: &[Rank]) -> Player {
        let mut player = Player::new(name, dealer);
        for &rank in ranks {
            player.deal(0, Card::new(rank, Suit::Spades, GameContext::Blackjack));
        }
        player.calculate_hand_score(0);
        player
    }

    #[test]
    fn headers() {
        colored::control::set_override(false);
        let player = dealt("Tyler", false, &[Rank::Ten, Rank::Six]);
        assert_eq!(header(&player, 0), "Tyler's Hand 1:");
        let dealer = dealt("Dealer", true, &[Rank::Ten, Rank::Six]);
        assert_eq!(header(&dealer, 0), "Dealer is showing:");
        let natural = dealt("Dealer", true, &[Rank::Ace, Rank::King]);
        assert_eq!(header(&natural, 0), "Dealer has Blackjack!");
    }

    #[test]
    fn score_tags() {
        colored::control::set_override(false);
        assert_eq!(score_tag(&dealt("p", false, &[Rank::Ace, Rank::Six]), 0), "Soft 17");
        assert_eq!(score_tag(&dealt("p", false, &[Rank::Ten, Rank::Eight]), 0), "18");
        assert_eq!(
            score_tag(&dealt("p", false, &[Rank::Ace, Rank::King]), 0),
            "Blackjack!"
        );
    }

    #[test]
    fn dealer_hides_hole_card() {
        colored::control::set_override(false);
        let dealer = dealt("Dealer", true, &[Rank::Nine, Rank::Eight]);
        assert_eq!(cards(&dealer, 0), "\t9 of Spades");
        let player = dealt("p", false, &[Rank::Nine, Rank::Eight]);
        assert_eq!(cards(&player, 0), "\t9 of Spades\n\t8 of Spades");
    }

    #[test]
    fn final_scores() {
        colored::control::set_override(false);
        let player = dealt("Tyler", false, &[Rank::Ten, Rank::Nine]);
        assert_eq!(final_score(&player, 0), "Tyler's Hand 1 score: 19");
        let dealer = dealt("Dealer", true, &[Rank::Nine, Rank::Eight]);
        assert_eq!(final_score(&dealer, 0), "Dealer's score: 17");
    }
}
