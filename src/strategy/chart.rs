use crate::cards::card::Card;
use crate::gameplay::action::Move;
use crate::gameplay::value;
use crate::Score;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("strategy table unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("malformed strategy table at line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },
    #[error("no strategy defined for player {player} vs dealer {dealer}")]
    Undefined { player: Score, dealer: Score },
}

/// which of the three grids a lookup goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grid {
    /// two cards of unequal value, keyed by the smaller one. rows are the
    /// soft totals Ace+2 .. Ace+10, and two-card hard hands land here too.
    OneAce,
    /// two cards of equal value, keyed by that value (2..11)
    Pair,
    /// three or more cards, keyed by the full hand total (5..20)
    Sum,
}

impl Grid {
    /// smallest player-axis value the grid covers
    fn offset(&self) -> Score {
        match self {
            Grid::OneAce | Grid::Pair => 2,
            Grid::Sum => 5,
        }
    }
    fn rows(&self) -> usize {
        match self {
            Grid::OneAce => 9,
            Grid::Pair => 10,
            Grid::Sum => 16,
        }
    }
}

/// the dealer axis is always up-card values 2..=11
const COLS: usize = 10;
const DEALER_LO: Score = 2;

/// Basic-strategy lookup tables, built once from the line-oriented grid
/// resource and read-only afterwards. Rows are player values, columns are
/// dealer up-card values 2..=11.
#[derive(Debug, Clone)]
pub struct Chart {
    one_ace: [[Option<Move>; COLS]; 9],
    pair: [[Option<Move>; COLS]; 10],
    sum: [[Option<Move>; COLS]; 16],
}

impl Chart {

    /// Read and parse the grid resource. Both failure modes (missing file,
    /// parse error) are recoverable: report them and play unadvised.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse the line-oriented grid format: `//` lines are comments, a `;;`
    /// line is followed by the dealer-axis values, a `;#` line is followed
    /// by the player-axis values for the next grid (one-ace, pair, sum in
    /// order), and every other line is one comma-separated row of move
    /// codes (h, s, d, p) laid out by the most recent axes.
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let mut chart = Self {
            one_ace: [[None; COLS]; 9],
            pair: [[None; COLS]; 10],
            sum: [[None; COLS]; 16],
        };
        let mut lines = text.lines().enumerate();
        let mut dealers: Vec<Score> = Vec::new();
        let mut players: Vec<Score> = Vec::new();
        let mut grid: Option<Grid> = None;
        let mut row = 0;
        while let Some((n, line)) = lines.next() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            match line {
                ";;" => {
                    let (n, axis) = lines.next().ok_or(ChartError::Malformed {
                        line: n + 1,
                        reason: "missing dealer axis after ;;",
                    })?;
                    dealers = Self::axis(n + 1, axis)?;
                }
                ";#" => {
                    let (n, axis) = lines.next().ok_or(ChartError::Malformed {
                        line: n + 1,
                        reason: "missing player axis after ;#",
                    })?;
                    players = Self::axis(n + 1, axis)?;
                    grid = Some(match grid {
                        None => Grid::OneAce,
                        Some(Grid::OneAce) => Grid::Pair,
                        Some(Grid::Pair) => Grid::Sum,
                        Some(Grid::Sum) => {
                            return Err(ChartError::Malformed {
                                line: n + 1,
                                reason: "more than three grids",
                            })
                        }
                    });
                    row = 0;
                }
                codes => {
                    let grid = grid.ok_or(ChartError::Malformed {
                        line: n + 1,
                        reason: "move row before any ;# header",
                    })?;
                    let player = *players.get(row).ok_or(ChartError::Malformed {
                        line: n + 1,
                        reason: "more rows than player axis values",
                    })?;
                    for (col, code) in codes.split(',').enumerate() {
                        let dealer = *dealers.get(col).ok_or(ChartError::Malformed {
                            line: n + 1,
                            reason: "more columns than dealer axis values",
                        })?;
                        let mv = Self::code(n + 1, code.trim())?;
                        *chart.slot(grid, player, dealer).ok_or(ChartError::Malformed {
                            line: n + 1,
                            reason: "axis value out of table range",
                        })? = Some(mv);
                    }
                    row += 1;
                }
            }
        }
        Ok(chart)
    }

    /// Recommend a move for a hand against a dealer up-card. Three or more
    /// cards go through the sum grid by total value; two cards of equal
    /// value through the pair grid; any other two cards through the
    /// one-ace grid by the smaller value. Anything the tables do not cover
    /// is an Undefined error, not a guess.
    pub fn recommend(&self, cards: &[Card], upcard: &Card) -> Result<Move, ChartError> {
        let dealer = upcard.value();
        let (grid, player) = match cards {
            [a, b] if a.value() == b.value() => (Grid::Pair, a.value()),
            [a, b] => (Grid::OneAce, a.value().min(b.value())),
            longer if longer.len() > 2 => (Grid::Sum, value::evaluate(longer).score),
            short => {
                // a 0- or 1-card hand is outside the tables' contract
                return Err(ChartError::Undefined {
                    player: value::evaluate(short).score,
                    dealer,
                });
            }
        };
        self.cell(grid, player, dealer)
            .ok_or(ChartError::Undefined { player, dealer })
    }

    fn cell(&self, grid: Grid, player: Score, dealer: Score) -> Option<Move> {
        let row = player.checked_sub(grid.offset())? as usize;
        let col = dealer.checked_sub(DEALER_LO)? as usize;
        if row >= grid.rows() || col >= COLS {
            return None;
        }
        match grid {
            Grid::OneAce => self.one_ace[row][col],
            Grid::Pair => self.pair[row][col],
            Grid::Sum => self.sum[row][col],
        }
    }

    fn slot(&mut self, grid: Grid, player: Score, dealer: Score) -> Option<&mut Option<Move>> {
        let row = player.checked_sub(grid.offset())? as usize;
        let col = dealer.checked_sub(DEALER_LO)? as usize;
        if row >= grid.rows() || col >= COLS {
            return None;
        }
        match grid {
            Grid::OneAce => Some(&mut self.one_ace[row][col]),
            Grid::Pair => Some(&mut self.pair[row][col]),
            Grid::Sum => Some(&mut self.sum[row][col]),
        }
    }

    fn axis(line: usize, text: &str) -> Result<Vec<Score>, ChartError> {
        text.split(',')
            .map(|v| {
                v.trim().parse::<Score>().map_err(|_| ChartError::Malformed {
                    line,
                    reason: "axis value is not an integer",
                })
            })
            .collect()
    }

    fn code(line: usize, code: &str) -> Result<Move, ChartError> {
        match code {
            "h" => Ok(Move::Hit),
            "s" => Ok(Move::Stay),
            "d" => Ok(Move::Double),
            "p" => Ok(Move::Split),
            _ => Err(ChartError::Malformed {
                line,
                reason: "unknown move code",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::context::GameContext;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    const GRID: &str = include_str!("../../strategyGrid");

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Diamonds, GameContext::Blackjack)
    }

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| card(r)).collect()
    }

    #[test]
    fn parses_shipped_grid() {
        assert!(Chart::parse(GRID).is_ok());
    }

    #[test]
    fn shipped_grid_is_fully_populated() {
        let chart = Chart::parse(GRID).unwrap();
        for dealer in 2..=11 {
            for player in 2..=10 {
                assert!(chart.cell(Grid::OneAce, player, dealer).is_some());
            }
            for player in 2..=11 {
                assert!(chart.cell(Grid::Pair, player, dealer).is_some());
            }
            for player in 5..=20 {
                assert!(chart.cell(Grid::Sum, player, dealer).is_some());
            }
        }
    }

    #[test]
    fn canonical_lookups() {
        let chart = Chart::parse(GRID).unwrap();
        // eights split against a six
        let eights = hand(&[Rank::Eight, Rank::Eight]);
        assert_eq!(chart.recommend(&eights, &card(Rank::Six)).unwrap(), Move::Split);
        // aces always split
        let aces = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(chart.recommend(&aces, &card(Rank::Ten)).unwrap(), Move::Split);
        // a Ten/King pair stands
        let royals = hand(&[Rank::Ten, Rank::King]);
        assert_eq!(chart.recommend(&royals, &card(Rank::Six)).unwrap(), Move::Stay);
        // hard 17 with three cards stands everywhere
        let hard = hand(&[Rank::Ten, Rank::Five, Rank::Two]);
        assert_eq!(chart.recommend(&hard, &card(Rank::Ace)).unwrap(), Move::Stay);
        // soft eighteen doubles into a weak dealer
        let soft = hand(&[Rank::Ace, Rank::Seven]);
        assert_eq!(chart.recommend(&soft, &card(Rank::Five)).unwrap(), Move::Double);
        // eleven doubles against a five
        let eleven = hand(&[Rank::Six, Rank::Three, Rank::Two]);
        assert_eq!(chart.recommend(&eleven, &card(Rank::Five)).unwrap(), Move::Double);
    }

    #[test]
    fn short_hand_is_undefined() {
        let chart = Chart::parse(GRID).unwrap();
        assert!(matches!(
            chart.recommend(&hand(&[Rank::Five]), &card(Rank::Six)),
            Err(ChartError::Undefined { .. })
        ));
        assert!(matches!(
            chart.recommend(&[], &card(Rank::Six)),
            Err(ChartError::Undefined { .. })
        ));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let text = "// a comment\n\n;;\n2,3\n;#\n2\nh,s\n";
        let chart = Chart::parse(text).unwrap();
        assert_eq!(chart.cell(Grid::OneAce, 2, 2), Some(Move::Hit));
        assert_eq!(chart.cell(Grid::OneAce, 2, 3), Some(Move::Stay));
    }

    #[test]
    fn unknown_code_is_malformed() {
        let text = ";;\n2,3\n;#\n2\nh,x\n";
        assert!(matches!(
            Chart::parse(text),
            Err(ChartError::Malformed { line: 5, .. })
        ));
    }

    #[test]
    fn row_before_header_is_malformed() {
        assert!(matches!(
            Chart::parse("h,s,h\n"),
            Err(ChartError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn truncated_header_is_malformed() {
        assert!(matches!(
            Chart::parse("// grid\n;;"),
            Err(ChartError::Malformed { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        assert!(matches!(
            Chart::load("no/such/strategyGrid"),
            Err(ChartError::Unavailable(_))
        ));
    }
}
