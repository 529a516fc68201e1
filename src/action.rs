//! Actions

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{Card, Seat, Suit};

/// Types of actions that drive the round forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Bid, or pass.
    Bid,
    /// Name trump after winning the bid.
    ChooseTrump,
    /// Play a card into the current trick.
    Play,
    /// Settle a complete trick.
    Resolve,
    /// Move on from a finished round to the next deal.
    Continue,
}

impl Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionType::Bid => "bid",
            ActionType::ChooseTrump => "choose trump",
            ActionType::Play => "play",
            ActionType::Resolve => "resolve trick",
            ActionType::Continue => "continue",
        })
    }
}

/// The payload for actions that a seat can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionData {
    /// Drop out of the bidding.
    Pass,
    /// Bid to win at least this many tricks.
    Bid { value: u8 },
    /// Declare trump.
    Trump { suit: Suit },
    /// Play a card.
    Card { card: Card },
}

/// The action that the game's state machine expects to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectAction {
    /// The seat expected to take the action.
    pub seat: Seat,
    /// The type of action.
    pub action: ActionType,
}

impl ExpectAction {
    /// Create a new [`ExpectAction`].
    pub fn new(seat: Seat, action: ActionType) -> Self {
        Self { seat, action }
    }

    /// Bind in a payload to create an [`Action`].
    pub fn with_data(self, data: ActionData) -> Action {
        Action::new(self.seat, data)
    }
}

/// An action taken by a seat during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The seat taking the action.
    pub seat: Seat,
    /// The action payload.
    pub data: ActionData,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.data {
            ActionData::Pass => write!(f, "{} passes", self.seat),
            ActionData::Bid { value } => write!(f, "{} bids {value}", self.seat),
            ActionData::Trump { suit } => write!(f, "{} names {suit} trump", self.seat),
            ActionData::Card { card } => write!(f, "{} plays {card}", self.seat),
        }
    }
}

impl Action {
    /// Create a new [`Action`].
    pub fn new(seat: Seat, data: ActionData) -> Self {
        Self { seat, data }
    }
}
