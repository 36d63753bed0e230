use anyhow::Context;
use blackjack::cards::card::Card;
use blackjack::cards::context::GameContext;
use blackjack::cards::deck::Deck;
use blackjack::gameplay::action::Move;
use blackjack::gameplay::engine;
use blackjack::gameplay::player::Player;
use blackjack::gameplay::show;
use blackjack::strategy::chart::Chart;
use clap::Parser;
use colored::Colorize;
use dialoguer::Input;

/// Command-line Blackjack against a dealer who hits soft 17, with an
/// optional table-driven basic strategy advisor.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// number of 52-card packs shuffled into the shoe
    #[arg(long, default_value_t = 6)]
    packs: usize,
    /// your name at the table
    #[arg(long, default_value = "Player")]
    name: String,
    /// path to the strategy grid resource
    #[arg(long, default_value = "strategyGrid")]
    strategy: String,
    /// seed the shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    blackjack::log();
    let args = Args::parse();
    let chart = match Chart::load(&args.strategy) {
        Ok(chart) => Some(chart),
        Err(e) => {
            log::warn!("playing without recommendations: {}", e);
            None
        }
    };
    let deck = match args.seed {
        Some(seed) => Deck::seeded(args.packs, GameContext::Blackjack, seed),
        None => Deck::new(args.packs, GameContext::Blackjack),
    };
    Table::new(&args.name, deck, chart).run()
}

struct Table {
    players: Vec<Player>,
    deck: Deck,
    chart: Option<Chart>,
}

impl Table {
    /// everyone before the last seat is a player; the last seat is the house
    fn new(name: &str, deck: Deck, chart: Option<Chart>) -> Self {
        Self {
            players: vec![Player::new(name, false), Player::new("Dealer", true)],
            deck,
            chart,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        log::info!("dealing from {} packs", self.deck.packs());
        while self.round()? {
            self.sweep();
            println!("{}", "-".repeat(21));
        }
        Ok(())
    }

    /// one full round. Ok(false) once the player quits.
    fn round(&mut self) -> anyhow::Result<bool> {
        self.open()?;
        let dealer = self.dealer();
        if !self.players[dealer].has_blackjack(0) {
            for seat in 0..dealer {
                if !self.turns(seat)? {
                    return Ok(false);
                }
            }
            self.house()?;
        } else {
            println!("{}", show::render(&self.players[self.dealer()], 0));
        }
        self.settle();
        Ok(true)
    }

    /// two passes of one card to every seat, burning a card after each pass
    fn open(&mut self) -> anyhow::Result<()> {
        for _ in 0..2 {
            for seat in 0..self.players.len() {
                let card = self.draw()?;
                self.players[seat].deal(0, card);
            }
            let burn = self.draw()?;
            self.deck.burn_card(burn);
        }
        for seat in 0..self.players.len() {
            self.players[seat].calculate_hand_score(0);
        }
        Ok(())
    }

    /// play out every hand the seat accumulates (splits grow the list)
    fn turns(&mut self, seat: usize) -> anyhow::Result<bool> {
        let mut hand = 0;
        while hand < self.players[seat].hands().len() {
            self.players[seat].calculate_hand_score(hand);
            while !engine::is_done(&self.players[seat], hand) {
                println!("{}", show::render(&self.players[seat], hand));
                println!("{}", show::render(&self.players[self.dealer()], 0));
                let mv = self.choose(seat, hand)?;
                match engine::execute(&mut self.players[seat], hand, mv, &mut self.deck) {
                    Ok(true) => (),
                    Ok(false) => return Ok(false),
                    Err(e) => return Err(e).context("executing move"),
                }
                if self.players[seat].did_bust(hand) {
                    println!("{}", show::bust(&self.players[seat], hand));
                }
            }
            hand += 1;
        }
        Ok(true)
    }

    /// prompt until the input parses to a legal move
    fn choose(&self, seat: usize, hand: usize) -> anyhow::Result<Move> {
        self.advise(seat, hand);
        let player = &self.players[seat];
        let prompt = format!(
            "{}: {}?",
            player.name(),
            Move::ALL
                .iter()
                .map(|m| format!("{} ({})", m.name(), m.ordinal()))
                .collect::<Vec<String>>()
                .join(", ")
        );
        loop {
            let input: String = Input::new()
                .with_prompt(prompt.as_str())
                .interact_text()
                .context("reading move")?;
            match Move::try_from(input.as_str()) {
                Ok(mv) if engine::is_legal(player, hand, mv) => return Ok(mv),
                Ok(mv) => println!("{} is not legal here, please try again", mv),
                Err(e) => println!("{}, please try again", e),
            }
        }
    }

    /// print the chart's recommendation when one is loaded and defined
    fn advise(&self, seat: usize, hand: usize) {
        let Some(ref chart) = self.chart else {
            return;
        };
        let upcard = self.upcard();
        match chart.recommend(self.players[seat].hand(hand).cards(), &upcard) {
            Ok(mv) => println!("{} {}", "advisor suggests".dimmed(), mv),
            Err(e) => log::debug!("no recommendation: {}", e),
        }
    }

    /// dealer plays out their forced moves
    fn house(&mut self) -> anyhow::Result<()> {
        let dealer = self.dealer();
        if let Some(mv) = engine::required(&mut self.players[dealer], 0) {
            engine::execute(&mut self.players[dealer], 0, mv, &mut self.deck)
                .context("dealer play")?;
        }
        Ok(())
    }

    /// print every final score
    fn settle(&mut self) {
        println!();
        for seat in 0..self.players.len() {
            for hand in 0..self.players[seat].hands().len() {
                self.players[seat].calculate_hand_score(hand);
                println!("{}", show::final_score(&self.players[seat], hand));
            }
        }
    }

    /// burn every hand back to the deck, reshuffling once the shoe runs low
    fn sweep(&mut self) {
        for seat in 0..self.players.len() {
            let mut cards = self.players[seat].burn_all();
            self.deck.burn_hand(&mut cards);
        }
        if self.deck.active_count() < self.players.len() * 5 {
            log::info!("shuffling deck");
            self.deck.full_shuffle();
        }
    }

    fn dealer(&self) -> usize {
        self.players.len() - 1
    }

    fn upcard(&self) -> Card {
        self.players[self.dealer()].hand(0).cards()[0]
    }

    /// the shoe should never run dry mid-deal, but if it does, reclaim the
    /// burn pile before giving up
    fn draw(&mut self) -> anyhow::Result<Card> {
        if self.deck.is_empty() {
            log::info!("shuffling deck");
            self.deck.full_shuffle();
        }
        self.deck.draw().context("every card is in a hand")
    }
}
