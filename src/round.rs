//! Round state & the deal.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Card, DealError, Deck, Seat, Suit, Trick};

mod deal;
pub use deal::DealBias;

/// The number of cards dealt to each seat, and so the number of tricks in a
/// round.
pub const HAND_SIZE: usize = 13;

/// The standing bid before anyone has bid. Valid bids are strictly greater.
pub const NO_BID: u8 = 6;

/// The lowest legal bid.
pub const MIN_BID: u8 = 7;

/// The highest legal bid: every trick.
pub const MAX_BID: u8 = 13;

/// The phases of a round. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Seats take turns bidding or passing.
    Bidding,
    /// A human bid winner must name trump.
    ChoosingTrump,
    /// Seats take turns playing cards into the current trick.
    Playing,
    /// The current trick is complete, and awaits resolution.
    Resolving,
    /// All tricks have been played and scored.
    RoundEnd,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Bidding => "bidding",
            Phase::ChoosingTrump => "choosing trump",
            Phase::Playing => "playing",
            Phase::Resolving => "resolving",
            Phase::RoundEnd => "round end",
        })
    }
}

/// The state of the round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// The active phase.
    pub phase: Phase,
    /// The dealer of this round.
    pub dealer: Seat,
    /// The seat expected to bid or pass.
    pub current_bidder: Seat,
    /// The standing bid; [`NO_BID`] until someone bids.
    pub highest_bid: u8,
    /// The seat holding the standing bid.
    pub bid_winner: Option<Seat>,
    /// Trump, once declared.
    pub trump: Option<Suit>,
    /// The trick in progress.
    pub current_trick: Trick,
    /// The seat that led the current trick.
    pub trick_leader: Seat,
    /// The seat expected to play.
    pub turn: Seat,
    /// Number of tricks resolved so far.
    pub tricks_played: u8,
    /// A human-readable description of the latest transition.
    pub message: String,
}

impl RoundState {
    /// A fresh round, ready for bidding.
    pub fn new(dealer: Seat) -> Self {
        let first = dealer.next();
        Self {
            phase: Phase::Bidding,
            dealer,
            current_bidder: first,
            highest_bid: NO_BID,
            bid_winner: None,
            trump: None,
            current_trick: Trick::default(),
            trick_leader: first,
            turn: first,
            tricks_played: 0,
            message: "Bidding phase".into(),
        }
    }
}

/// What a single seat can see of the round: its own hand, plus public state.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    /// The seat this view belongs to.
    pub seat: Seat,
    /// The dealer of the round.
    pub dealer: Seat,
    /// The seat's own cards, in hand order.
    pub hand: &'a [Card],
    /// The trick in progress.
    pub trick: &'a Trick,
    /// Trump, once named.
    pub trump: Option<Suit>,
    /// The highest bid so far, or [`NO_BID`].
    pub highest_bid: u8,
    /// The seat holding the highest bid.
    pub bid_winner: Option<Seat>,
}

impl PlayerView<'_> {
    /// The cards this seat may legally play into the current trick.
    pub fn valid_moves(&self) -> Vec<Card> {
        self.trick.filter(self.hand)
    }
}

/// The cards dealt for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// The dealer for this round.
    dealer: Seat,
    /// Each player's hand, as dealt.
    hands: HashMap<Seat, Vec<Card>>,
}

impl RoundConfig {
    /// Creates a new [`RoundConfig`] from explicit hands.
    pub fn new(dealer: Seat, hands: HashMap<Seat, Vec<Card>>) -> Result<Self, DealError> {
        let mut round = Self { dealer, hands };
        round.validate()?;
        round.canonicalize();
        Ok(round)
    }

    /// Deals the deck with the specified dealer, starting with the seat to
    /// their left.
    pub fn from_deck(dealer: Seat, mut deck: Deck) -> Result<Self, DealError> {
        if deck.len() < HAND_SIZE * 4 {
            return Err(DealError::IncompleteDeck);
        }
        let hands = dealer
            .next_n(4)
            .into_iter()
            .zip(deck.deal(4, HAND_SIZE))
            .collect();
        Self::new(dealer, hands)
    }

    /// Shuffles a fresh deck and deals it according to `bias`.
    pub fn random_with<R: Rng + ?Sized>(dealer: Seat, bias: DealBias, rng: &mut R) -> Self {
        let deck = Deck::shuffled(rng);
        let config = match bias {
            DealBias::Uniform => Self::from_deck(dealer, deck),
            DealBias::Favored => deal::favored(dealer, deck, rng),
        };
        config.expect("standard deck deals cleanly")
    }

    /// Returns the dealer for this round.
    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// Returns the hand dealt to the specified seat.
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.hands.get(&seat).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks that the hands partition a full deck: four hands of thirteen,
    /// with no card dealt twice.
    pub fn validate(&self) -> Result<(), DealError> {
        let mut seen: HashSet<Card> = HashSet::with_capacity(HAND_SIZE * 4);
        for &seat in Seat::all_seats() {
            let hand = self.hands.get(&seat).ok_or(DealError::MissingHand(seat))?;
            if hand.len() != HAND_SIZE {
                return Err(DealError::InvalidHandSize(seat, hand.len()));
            }
            seen.extend(hand.iter().copied());
        }
        if seen.len() == HAND_SIZE * 4 {
            Ok(())
        } else {
            Err(DealError::DuplicateCard)
        }
    }

    /// Canonicalizes the configuration.
    pub fn canonicalize(&mut self) {
        for hand in self.hands.values_mut() {
            hand.sort_unstable_by_key(|c| (c.suit, c.rank));
        }
    }
}
