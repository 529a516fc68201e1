//! Per-seat state.

use std::fmt::Display;

use delegate::delegate;
use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit};

/// A seat's status line, as shown during bidding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    /// Nothing to show.
    #[default]
    Idle,
    /// Waiting for its turn to bid.
    Waiting,
    /// An automated seat is deciding.
    Thinking,
    /// The seat has dropped out of the bidding.
    Passed,
    /// The seat's standing bid.
    Bid(u8),
    /// A human seat is expected to act.
    YourTurn,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Waiting => f.write_str("WAITING"),
            Status::Thinking => f.write_str("THINKING"),
            Status::Passed => f.write_str("PASS"),
            Status::Bid(n) => write!(f, "BID: {n}"),
            Status::YourTurn => f.write_str("YOUR TURN"),
        }
    }
}

/// The cards held by one seat, kept sorted by [`Card::hand_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl From<Vec<Card>> for Hand {
    fn from(mut cards: Vec<Card>) -> Self {
        cards.sort_unstable_by_key(|c| c.hand_key());
        cards.dedup();
        Self { cards }
    }
}

impl Hand {
    delegate! {
        to self.cards {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn contains(&self, card: &Card) -> bool;
        }
    }

    /// The cards, in sorted order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes the card from the hand, if it is held.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        self.cards
            .iter()
            .position(|c| *c == card)
            .map(|idx| self.cards.remove(idx))
    }

    /// Returns true if the hand holds any card of the given suit.
    pub fn has_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit == suit)
    }
}

/// A seat at the table, and everything the engine tracks about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Table position.
    pub seat: Seat,
    /// Cards held.
    pub hand: Hand,
    /// If true, the seat's decisions are made by the automated policy.
    pub automated: bool,
    /// Tricks won so far this round.
    pub tricks_won: u8,
    /// The seat's latest bid this round, or zero.
    pub bid: u8,
    /// Status line.
    pub status: Status,
}

impl Player {
    /// Creates a new [`Player`] with an empty hand.
    pub fn new(seat: Seat, automated: bool) -> Self {
        Self {
            seat,
            hand: Hand::default(),
            automated,
            tricks_won: 0,
            bid: 0,
            status: Status::default(),
        }
    }

    /// Resets the per-round state and takes up a freshly dealt hand.
    pub fn deal(&mut self, cards: Vec<Card>) {
        self.hand = Hand::from(cards);
        self.tricks_won = 0;
        self.bid = 0;
        self.status = Status::Waiting;
    }

    /// Returns true if the seat has dropped out of the bidding.
    pub fn has_passed(&self) -> bool {
        self.status == Status::Passed
    }

    /// The status to show while this seat is expected to act.
    pub fn turn_status(&self) -> Status {
        if self.automated {
            Status::Thinking
        } else {
            Status::YourTurn
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn cards(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|s| Card::from_str(s).unwrap()).collect()
    }

    #[test]
    fn test_hand_is_sorted() {
        let hand = Hand::from(cards(&["2D", "AS", "3S", "KH", "2C", "TH"]));
        assert_eq!(cards(&["3S", "AS", "2C", "TH", "KH", "2D"]), hand.cards());
        assert!(hand.has_suit(Suit::Heart));
    }

    #[test]
    fn test_hand_remove() {
        let mut hand = Hand::from(cards(&["2D", "AS"]));
        assert_eq!(None, hand.remove(Card::from_str("KS").unwrap()));
        assert_eq!(2, hand.len());
        let ace = Card::from_str("AS").unwrap();
        assert_eq!(Some(ace), hand.remove(ace));
        assert!(!hand.contains(&ace));
        assert_eq!(1, hand.len());
    }

    #[test]
    fn test_status_display() {
        assert_eq!("", Status::Idle.to_string());
        assert_eq!("BID: 8", Status::Bid(8).to_string());
        assert_eq!("PASS", Status::Passed.to_string());
    }

    #[test]
    fn test_deal_resets() {
        let mut player = Player::new(Seat::East, true);
        player.tricks_won = 4;
        player.bid = 9;
        player.status = Status::Passed;
        player.deal(cards(&["AS"]));
        assert_eq!(0, player.tricks_won);
        assert_eq!(0, player.bid);
        assert_eq!(Status::Waiting, player.status);
        assert_eq!(Status::Thinking, player.turn_status());
    }
}
