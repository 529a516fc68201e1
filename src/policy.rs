//! Decision policies for the seats at the table.

use std::sync::Arc;

use super::{ActionData, ActionType, Card, Event, PlayerView, RuleViolation, Suit};

mod console;
mod robot;
#[cfg(test)]
mod scripted;
pub use console::Console;
pub use robot::{bid_strength, bid_target, longest_suit, select_card, Robot};
#[cfg(test)]
pub use scripted::Scripted;

/// A trait that makes decisions on behalf of a seat.
///
/// The engine consults the injected policy whenever an automated seat is
/// expected to act. Front ends may use the same trait for human seats.
pub trait Policy {
    /// Returns a bid, or `None` to pass.
    fn bid(&self, view: &PlayerView) -> Option<u8>;

    /// Names trump, after winning the bid.
    fn choose_trump(&self, view: &PlayerView) -> Suit;

    /// Picks a card to play into the current trick.
    fn play(&self, view: &PlayerView) -> Card;

    /// A notification of an event that all seats can see.
    fn notify(&self, _view: &PlayerView, _event: &Event) {}

    /// Indicates that the policy's action was rejected.
    ///
    /// The implementation may return true, if a retry is desired.
    fn handle_error(&self, _err: &RuleViolation) -> bool {
        false
    }

    /// Produces the payload for the expected action, or `None` if the action
    /// isn't taken by a seat.
    fn take_action(&self, view: &PlayerView, action: ActionType) -> Option<ActionData> {
        Some(match action {
            ActionType::Bid => match self.bid(view) {
                Some(value) => ActionData::Bid { value },
                None => ActionData::Pass,
            },
            ActionType::ChooseTrump => ActionData::Trump {
                suit: self.choose_trump(view),
            },
            ActionType::Play => ActionData::Card {
                card: self.play(view),
            },
            ActionType::Resolve | ActionType::Continue => return None,
        })
    }

    /// Boxes the policy for injection into the engine.
    fn into_policy(self) -> Arc<dyn Policy>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}
