//! Robot player

use itertools::Itertools;

use crate::{valid_moves, Card, PlayerView, Policy, Seat, Suit, Trick, MIN_BID};

/// The automated policy: a simple counting heuristic for bids and trump, and
/// an aggressive card-play rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Policy for Robot {
    fn bid(&self, view: &PlayerView) -> Option<u8> {
        let strength = bid_strength(view.hand);
        let target = bid_target(strength);
        log::debug!(
            "{}: strength {strength} in [{}], target {target}",
            view.seat,
            view.hand.iter().join(" ")
        );
        if target > view.highest_bid {
            Some(target)
        } else {
            None
        }
    }

    fn choose_trump(&self, view: &PlayerView) -> Suit {
        longest_suit(view.hand)
    }

    fn play(&self, view: &PlayerView) -> Card {
        select_card(view.seat, view.hand, view.trick, view.trump)
    }
}

/// The best single-suit strength of the hand: for each suit, the number of
/// cards held plus the number of those that are jack or higher.
pub fn bid_strength(hand: &[Card]) -> usize {
    Suit::all_suits()
        .iter()
        .map(|&suit| {
            let cards = hand.iter().filter(|c| c.suit == suit);
            let count = cards.clone().count();
            let honors = cards.filter(|c| c.rank.is_honor()).count();
            count + honors
        })
        .max()
        .unwrap_or_default()
}

/// Maps a strength to the bid it supports, or zero if it doesn't support one.
pub fn bid_target(strength: usize) -> u8 {
    match strength {
        9.. => 9,
        8 => 8,
        6 | 7 => MIN_BID,
        _ => 0,
    }
}

/// The suit with the most cards in hand; ties go to the suit that comes
/// first in [`Suit::all_suits`].
pub fn longest_suit(hand: &[Card]) -> Suit {
    let mut best = (0, Suit::all_suits()[0]);
    for &suit in Suit::all_suits() {
        let count = hand.iter().filter(|c| c.suit == suit).count();
        if count > best.0 {
            best = (count, suit);
        }
    }
    best.1
}

/// Chooses a card to play from `hand` into `trick`.
///
/// Leading, play the highest card. If the partner is winning the trick, play
/// the lowest. Otherwise, play the highest card if it takes the trick, and the
/// lowest if it doesn't.
pub fn select_card(seat: Seat, hand: &[Card], trick: &Trick, trump: Option<Suit>) -> Card {
    let mut cards = valid_moves(hand, trick.lead_suit());
    // Equal ranks keep hand order.
    cards.sort_by_key(|c| (c.rank, c.suit.hand_order()));
    let lowest = *cards.first().expect("hand is non-empty");
    let highest = *cards.last().expect("hand is non-empty");

    let (Some(lead), Some((winner, best))) = (trick.lead_suit(), trick.best(trump)) else {
        return highest;
    };
    if winner == seat.partner() {
        lowest
    } else if highest.beats(best, lead, trump) {
        highest
    } else {
        lowest
    }
}
