// Core domain types shared by vision, engine, storage and overlay.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn as_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses compact notation like "Ah", "Ts", "9c". "10h" is accepted.
    pub fn parse(s: &str) -> Option<Card> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("10") {
            let mut chars = rest.chars();
            let suit = Suit::from_char(chars.next()?)?;
            if chars.next().is_some() {
                return None;
            }
            return Some(Card {
                rank: Rank::Ten,
                suit,
            });
        }
        let mut chars = s.chars();
        let rank = Rank::from_char(chars.next()?)?;
        let suit = Suit::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Card { rank, suit })
    }

    /// Parses UI text like "10 spade" or "K heart" as emitted by some clients.
    pub fn parse_ui(s: &str) -> Option<Card> {
        let mut parts = s.split_whitespace();
        let rank_word = parts.next()?;
        let suit_word = parts.next()?;
        let rank = match rank_word {
            "10" => Rank::Ten,
            other => Rank::from_char(other.chars().next()?)?,
        };
        let suit = match suit_word.to_ascii_lowercase().as_str() {
            "club" | "clubs" => Suit::Clubs,
            "diamond" | "diamonds" => Suit::Diamonds,
            "heart" | "hearts" => Suit::Hearts,
            "spade" | "spades" => Suit::Spades,
            _ => return None,
        };
        Some(Card { rank, suit })
    }

    pub fn to_display(self) -> String {
        format!("{}{}", self.rank.as_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_char(), self.suit.as_char())
    }
}

/// Exactly two distinct hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCards {
    pub first: Card,
    pub second: Card,
}

impl HoleCards {
    pub fn new(first: Card, second: Card) -> Option<HoleCards> {
        if first == second {
            return None;
        }
        Some(HoleCards { first, second })
    }

    /// Canonical hand notation: pairs "TT", suited "AKs", offsuit "Q9o",
    /// higher rank first.
    pub fn hand_notation(&self) -> String {
        let (a, b) = (self.first, self.second);
        if a.rank == b.rank {
            return format!("{}{}", a.rank.as_char(), b.rank.as_char());
        }
        let (high, low) = if a.rank.value() >= b.rank.value() {
            (a, b)
        } else {
            (b, a)
        };
        let suffix = if a.suit == b.suit { 's' } else { 'o' };
        format!("{}{}{}", high.rank.as_char(), low.rank.as_char(), suffix)
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Unknown,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Unknown => "unknown",
        }
    }
}

/// Community cards. Counts other than 0/3/4/5 map to Stage::Unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCards {
    pub cards: Vec<Card>,
}

impl BoardCards {
    pub fn new(cards: Vec<Card>) -> BoardCards {
        BoardCards { cards }
    }

    pub fn stage(&self) -> Stage {
        match self.cards.len() {
            0 => Stage::Preflop,
            3 => Stage::Flop,
            4 => Stage::Turn,
            5 => Stage::River,
            _ => Stage::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Table positions, 9-max naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Utg,
    UtgPlus1,
    UtgPlus2,
    Lojack,
    Hijack,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
    Unknown,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::UtgPlus1 => "UTG+1",
            Position::UtgPlus2 => "UTG+2",
            Position::Lojack => "LJ",
            Position::Hijack => "HJ",
            Position::Cutoff => "CO",
            Position::Button => "BTN",
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
            Position::Unknown => "UNKNOWN",
        }
    }

    /// Accepts canonical names plus legacy MP/MP+1 aliases.
    pub fn parse(s: &str) -> Position {
        match s.to_uppercase().as_str() {
            "UTG" => Position::Utg,
            "UTG+1" | "UTG1" => Position::UtgPlus1,
            "UTG+2" | "UTG2" | "MP" => Position::UtgPlus2,
            "LJ" | "MP+1" | "MP1" => Position::Lojack,
            "HJ" | "HIJACK" => Position::Hijack,
            "CO" | "CUTOFF" => Position::Cutoff,
            "BTN" | "BUTTON" | "BU" => Position::Button,
            "SB" => Position::SmallBlind,
            "BB" => Position::BigBlind,
            _ => Position::Unknown,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Raise => "raise",
            Action::AllIn => "all_in",
        }
    }
}

/// Per-field recognition confidence for one polled frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognitionConfidence {
    pub hero_cards: f32,
    pub board_cards: f32,
    pub dealer: f32,
    pub turn_indicator: f32,
}

/// One polled snapshot of a table window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub window_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub stage: Stage,
    pub dealer_seat: Option<usize>,
    pub hero_position: Option<Position>,
    pub active_positions: Vec<Position>,
    pub hero_cards: Option<HoleCards>,
    pub board_cards: BoardCards,
    pub pot_bb: Option<f64>,
    pub hero_stack_bb: Option<f64>,
    pub hero_turn: bool,
    pub confidence: RecognitionConfidence,
}

/// A chart recommendation for a preflop spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreflopDecision {
    pub action: Action,
    pub sizing_bb: Option<f64>,
    pub confidence: f64,
    pub source: String,
    pub reasoning: String,
}

/// Emitted once per hand when the turn indicator settles on hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroTurnEvent {
    pub window_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub hand: Option<String>,
    pub hero_position: Option<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_parse() {
        assert_eq!(Card::parse("Ah"), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(Card::parse("10s"), Some(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!(Card::parse("Ts"), Card::parse("10s"));
        assert_eq!(Card::parse("Xx"), None);
        assert_eq!(Card::parse(""), None);
        assert_eq!(Card::parse("Ahh"), None);
    }

    #[test]
    fn test_card_parse_non_ascii() {
        // multibyte input must fail cleanly, never slice mid-character
        assert_eq!(Card::parse("é"), None);
        assert_eq!(Card::parse("éh"), None);
        assert_eq!(Card::parse("A♥"), None);
    }

    #[test]
    fn test_card_parse_ui() {
        assert_eq!(
            Card::parse_ui("10 spade"),
            Some(Card::new(Rank::Ten, Suit::Spades))
        );
        assert_eq!(
            Card::parse_ui("K hearts"),
            Some(Card::new(Rank::King, Suit::Hearts))
        );
        assert_eq!(Card::parse_ui("banana"), None);
    }

    #[test]
    fn test_hand_notation_ordering() {
        let hand =
            HoleCards::new(Card::parse("9d").unwrap(), Card::parse("Qc").unwrap()).unwrap();
        assert_eq!(hand.hand_notation(), "Q9o");

        let suited =
            HoleCards::new(Card::parse("Kh").unwrap(), Card::parse("Ah").unwrap()).unwrap();
        assert_eq!(suited.hand_notation(), "AKs");

        let pair =
            HoleCards::new(Card::parse("Tc").unwrap(), Card::parse("Td").unwrap()).unwrap();
        assert_eq!(pair.hand_notation(), "TT");
    }

    #[test]
    fn test_hole_cards_reject_duplicate() {
        let c = Card::parse("As").unwrap();
        assert!(HoleCards::new(c, c).is_none());
    }

    #[test]
    fn test_board_stage_from_count() {
        let cards: Vec<Card> = ["Ah", "Kd", "7c", "2s", "9h"]
            .iter()
            .map(|s| Card::parse(s).unwrap())
            .collect();
        assert_eq!(BoardCards::new(vec![]).stage(), Stage::Preflop);
        assert_eq!(BoardCards::new(cards[..3].to_vec()).stage(), Stage::Flop);
        assert_eq!(BoardCards::new(cards[..4].to_vec()).stage(), Stage::Turn);
        assert_eq!(BoardCards::new(cards.clone()).stage(), Stage::River);
        assert_eq!(BoardCards::new(cards[..2].to_vec()).stage(), Stage::Unknown);
    }

    #[test]
    fn test_position_aliases() {
        assert_eq!(Position::parse("MP"), Position::UtgPlus2);
        assert_eq!(Position::parse("MP+1"), Position::Lojack);
        assert_eq!(Position::parse("button"), Position::Button);
        assert_eq!(Position::parse("??"), Position::Unknown);
    }
}
