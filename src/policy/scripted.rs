//! A scripted policy, for testing.

use std::collections::{HashMap, VecDeque};
use std::str::FromStr;
use std::sync::Mutex;

use super::{Card, PlayerView, Policy, Robot, Suit};
use crate::Seat;

#[derive(Debug, Default, Clone)]
struct Inner {
    bids: HashMap<Seat, VecDeque<Option<u8>>>,
    trump: HashMap<Seat, Suit>,
    plays: HashMap<Seat, VecDeque<Card>>,
}

/// Replays queued decisions per seat, and defers to [`Robot`] once a seat's
/// script runs dry.
#[derive(Debug, Default)]
pub struct Scripted(Mutex<Inner>);

impl Policy for Scripted {
    fn bid(&self, view: &PlayerView) -> Option<u8> {
        let mut inner = self.0.lock().unwrap();
        match inner.bids.get_mut(&view.seat).and_then(VecDeque::pop_front) {
            Some(bid) => bid,
            None => Robot.bid(view),
        }
    }

    fn choose_trump(&self, view: &PlayerView) -> Suit {
        let inner = self.0.lock().unwrap();
        match inner.trump.get(&view.seat) {
            Some(&suit) => suit,
            None => Robot.choose_trump(view),
        }
    }

    fn play(&self, view: &PlayerView) -> Card {
        let mut inner = self.0.lock().unwrap();
        match inner.plays.get_mut(&view.seat).and_then(VecDeque::pop_front) {
            Some(card) => card,
            None => Robot.play(view),
        }
    }
}

impl Scripted {
    pub fn bids(self, seat: Seat, value: u8) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.bids.entry(seat).or_default().push_back(Some(value));
        drop(inner);
        self
    }

    pub fn passes(self, seat: Seat) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.bids.entry(seat).or_default().push_back(None);
        drop(inner);
        self
    }

    pub fn names_trump(self, seat: Seat, suit: Suit) -> Self {
        let mut inner = self.0.lock().unwrap();
        inner.trump.insert(seat, suit);
        drop(inner);
        self
    }

    pub fn plays(self, seat: Seat, card: &str) -> Self {
        let card = Card::from_str(card).unwrap();
        let mut inner = self.0.lock().unwrap();
        inner.plays.entry(seat).or_default().push_back(card);
        drop(inner);
        self
    }
}
