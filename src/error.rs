//! Error types

use std::fmt::Display;

use super::{ActionType, Card, Phase, Seat, Suit};

/// Why a card cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFault {
    /// The seat doesn't actually hold the card.
    NotHeld,
    /// The seat holds a card of the lead suit, and must play one.
    MustFollow(Suit),
}

impl Display for CardFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFault::NotHeld => f.write_str("card not held"),
            CardFault::MustFollow(suit) => write!(f, "must follow {suit}"),
        }
    }
}

/// A rejected intent. The match state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    /// Another seat is expected to act.
    #[error("it is {expected}'s turn, not {seat}'s")]
    NotYourTurn { seat: Seat, expected: Seat },

    /// The bid does not beat the standing bid, or is below the minimum.
    #[error("cannot bid {value} over {highest}")]
    IllegalBidValue { value: u8, highest: u8 },

    /// The card is not held, or doesn't follow suit.
    #[error("{seat} cannot play {card}: {fault}")]
    IllegalCard {
        seat: Seat,
        card: Card,
        fault: CardFault,
    },

    /// The action doesn't belong to the active phase.
    #[error("cannot {action} while {phase}")]
    InvalidPhaseForAction { phase: Phase, action: ActionType },

    /// Trump has already been declared this round.
    #[error("trump is already {0}")]
    DuplicateTrumpChoice(Suit),
}

/// A deal that doesn't partition a full deck.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    #[error("deck is missing cards")]
    IncompleteDeck,
    #[error("deck contains duplicate card")]
    DuplicateCard,
    #[error("no hand dealt to {0}")]
    MissingHand(Seat),
    #[error("{0} was dealt {1} cards")]
    InvalidHandSize(Seat, usize),
}

/// Failure to rebuild a match from its log.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error("actions for deal {0} don't reach it")]
    OutOfSync(usize),
    #[error("log has no deals")]
    Empty,
}

/// Failure to load a [`GameConfig`](super::GameConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
