//! Deal strategies.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{RoundConfig, HAND_SIZE};
use crate::{Card, DealError, Deck, Seat};

/// How dealt hands are assigned to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealBias {
    /// Hands are dealt straight off a shuffled deck.
    #[default]
    Uniform,
    /// One or two randomly chosen seats receive the strongest hands.
    Favored,
}

/// Weighs a hand heavily towards high cards: tens and above count the square
/// of their rank, lower cards count their rank.
pub fn hand_strength(hand: &[Card]) -> u32 {
    hand.iter()
        .map(|c| {
            let rank = u32::from(c.rank.value());
            if rank >= 10 {
                rank * rank
            } else {
                rank
            }
        })
        .sum()
}

/// Deals four hands, then hands the strongest to one or two lucky seats and
/// the rest to the other seats in random order.
pub(super) fn favored<R: Rng + ?Sized>(
    dealer: Seat,
    mut deck: Deck,
    rng: &mut R,
) -> Result<RoundConfig, DealError> {
    if deck.len() < HAND_SIZE * 4 {
        return Err(DealError::IncompleteDeck);
    }
    let piles = deck.deal(4, HAND_SIZE);
    assign_by_strength(dealer, piles, seating_order(rng))
}

/// Picks one or two lucky seats, followed by the remaining seats shuffled.
fn seating_order<R: Rng + ?Sized>(rng: &mut R) -> Vec<Seat> {
    let lucky_count = rng.gen_range(1..=2);
    let lucky: Vec<Seat> = Seat::all_seats()
        .choose_multiple(rng, lucky_count)
        .copied()
        .collect();
    let mut others: Vec<Seat> = Seat::all_seats()
        .iter()
        .filter(|s| !lucky.contains(s))
        .copied()
        .collect();
    others.shuffle(rng);
    log::debug!("favoring {lucky:?} in the deal");
    lucky.into_iter().chain(others).collect()
}

/// Gives the strongest pile to the first seat in `order`, the next strongest
/// to the second, and so on.
fn assign_by_strength(
    dealer: Seat,
    mut piles: Vec<Vec<Card>>,
    order: Vec<Seat>,
) -> Result<RoundConfig, DealError> {
    piles.sort_by_key(|pile| std::cmp::Reverse(hand_strength(pile)));
    let hands: HashMap<Seat, Vec<Card>> = order.into_iter().zip(piles).collect();
    RoundConfig::new(dealer, hands)
}
