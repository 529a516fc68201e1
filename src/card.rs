//! Tarneeb deck: the standard 52 French-suited cards.

use std::{fmt::Display, str::FromStr};

use ansi_term::ANSIString;
use serde::{Deserialize, Serialize};

use crate::deck;

/// Card suit.
///
/// Declaration order is the enumeration order used to break ties. Hands are
/// sorted in [`hand_order`](Suit::hand_order) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

impl Suit {
    /// All suits, in enumeration order.
    pub fn all_suits() -> &'static [Suit; 4] {
        static SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];
        &SUITS
    }

    /// Position of the suit in a sorted hand: ♠ ♣ ♥ ♦.
    pub fn hand_order(self) -> u8 {
        match self {
            Suit::Spade => 0,
            Suit::Club => 1,
            Suit::Heart => 2,
            Suit::Diamond => 3,
        }
    }

    /// Returns true for hearts & diamonds.
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    /// Returns a string representation of the suit, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        if self.is_red() {
            Red.paint(self.to_string())
        } else {
            self.to_string().into()
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Club => "♣",
            Suit::Diamond => "♦",
        })
    }
}

impl TryFrom<char> for Suit {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'S' | 's' | '♠' => Suit::Spade,
            'H' | 'h' | '♥' => Suit::Heart,
            'C' | 'c' | '♣' => Suit::Club,
            'D' | 'd' | '♦' => Suit::Diamond,
            _ => return Err(()),
        })
    }
}

impl FromStr for Suit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => match s.to_ascii_lowercase().as_str() {
                "spade" | "spades" => Ok(Suit::Spade),
                "heart" | "hearts" => Ok(Suit::Heart),
                "club" | "clubs" => Ok(Suit::Club),
                "diamond" | "diamonds" => Ok(Suit::Diamond),
                _ => Err(()),
            },
        }
    }
}

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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
    /// Returns an array of all ranks, lowest first.
    pub fn all_ranks() -> &'static [Rank; 13] {
        static RANKS: [Rank; 13] = [
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ];
        &RANKS
    }

    /// Numeric value of the rank: 2 through 14, where 11 through 14 are the
    /// jack, queen, king and ace.
    pub fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Returns true for jack and above.
    pub fn is_honor(self) -> bool {
        self >= Rank::Jack
    }
}

impl TryFrom<char> for Rank {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(()),
        })
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card rank.
    pub rank: Rank,
    /// Card suit.
    pub suit: Suit,
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses cards written as rank followed by suit, e.g. `"7S"`, `"10h"`,
/// `"TD"` or `"A♠"`.
impl FromStr for Card {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit = s.chars().last().ok_or(())?;
        let rank = &s[..s.len() - suit.len_utf8()];
        let rank = match rank {
            "10" => Rank::Ten,
            _ => {
                let mut chars = rank.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::try_from(c)?,
                    _ => return Err(()),
                }
            }
        };
        Ok(Card::new(rank, suit.try_into()?))
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Card::from_str(&s).map_err(|()| serde::de::Error::custom(format!("invalid card {s:?}")))
    }
}

impl Card {
    /// Creates a new [`Card`].
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns a string representation of the card, decorated with ANSI color codes.
    pub fn to_ansi_string(self) -> ANSIString<'static> {
        use ansi_term::Colour::Red;
        if self.suit.is_red() {
            Red.paint(self.to_string())
        } else {
            self.to_string().into()
        }
    }

    /// Sort key for cards in hand: by suit in hand order, then by rank.
    pub fn hand_key(self) -> (u8, Rank) {
        (self.suit.hand_order(), self.rank)
    }

    /// Returns true if the card belongs to the trump suit.
    pub fn is_trump(self, trump: Option<Suit>) -> bool {
        trump == Some(self.suit)
    }

    /// Returns true if this card takes over from `best` as the provisional
    /// winner of a trick with the given lead suit.
    ///
    /// A trump beats any non-trump, and a higher trump beats a lower one. A
    /// card of the lead suit only beats a lower card of the lead suit, and
    /// never a trump. Any other card never wins.
    pub fn beats(self, best: Card, lead: Suit, trump: Option<Suit>) -> bool {
        if self.is_trump(trump) {
            !best.is_trump(trump) || self.rank > best.rank
        } else if self.suit == lead {
            !best.is_trump(trump) && best.suit == lead && self.rank > best.rank
        } else {
            false
        }
    }
}

/// A tarneeb deck.
pub type Deck = deck::Deck<Card>;
impl Default for Deck {
    fn default() -> Self {
        itertools::iproduct!(Rank::all_ranks(), Suit::all_suits())
            .map(|(&rank, &suit)| Card { rank, suit })
            .collect()
    }
}
