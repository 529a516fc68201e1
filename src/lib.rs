//! A rules engine for four-player partnership tarneeb.
//!
//! Four seats play in two fixed partnerships, North & South against East &
//! West. Each round, the seats bid for the right to name trump by promising
//! to win at least seven of the thirteen tricks. The bid winner names trump
//! and leads the first trick; seats must follow the lead suit when they can.
//! A bidder team that makes its contract scores its tricks. One that fails
//! loses its bid, and the defenders score theirs.
//!
//! The [`Game`] engine owns the [`MatchState`], advances it in response to
//! intents from human seats, and consults an injected [`Policy`] for automated
//! seats whenever it is [ticked](Game::tick).

mod action;
mod card;
mod config;
mod deck;
mod error;
mod game;
mod player;
pub mod policy;
mod round;
mod seat;
mod trick;

pub use self::action::{Action, ActionData, ActionType, ExpectAction};
pub use self::card::{Card, Deck, Rank, Suit};
pub use self::config::GameConfig;
pub use self::error::{CardFault, ConfigError, DealError, ReplayError, RuleViolation};
pub use self::game::{DealLog, Game, Log, MatchState, RoundOutcome, Tick};
pub use self::player::{Hand, Player, Status};
pub use self::policy::{Policy, Robot};
pub use self::round::{
    DealBias, Phase, PlayerView, RoundConfig, RoundState, HAND_SIZE, MAX_BID, MIN_BID, NO_BID,
};
pub use self::seat::{Seat, Team};
pub use self::trick::{valid_moves, Trick, TRICK_SIZE};

/// An event that occurs during the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The dealer dealt a new round.
    Deal { dealer: Seat },
    /// A seat bid.
    Bid(Seat, u8),
    /// A seat passed.
    Pass(Seat),
    /// Every seat passed, and the cards will be dealt again.
    Redeal { dealer: Seat },
    /// The bid winner named trump.
    Contract { seat: Seat, bid: u8, trump: Suit },
    /// A seat played a card.
    Play(Seat, Card),
    /// The trick is over.
    Trick { trick: Trick, winner: Seat },
    /// The round is over.
    Round(RoundOutcome),
}
