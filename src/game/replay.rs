//! Log of deals and actions, and replay from it.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::Game;
use crate::{
    Action, ActionData, Card, GameConfig, Phase, PlayerView, Policy, ReplayError, Robot,
    RoundConfig, Suit,
};


/// One deal, and the actions taken during it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealLog {
    /// The hands, as dealt.
    deal: RoundConfig,
    /// Actions applied during the deal.
    actions: Vec<Action>,
}

impl DealLog {
    /// Creates a new [`DealLog`] with no actions.
    fn new(deal: RoundConfig) -> Self {
        Self {
            deal,
            actions: vec![],
        }
    }

    pub fn deal(&self) -> &RoundConfig {
        &self.deal
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Everything needed to rebuild a match: its configuration, and every deal
/// with the actions taken during it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    /// The configuration of the match.
    config: GameConfig,
    /// Deals, in order. Re-deals after all seats pass are included.
    deals: Vec<DealLog>,
}

impl Log {
    /// Creates a new, empty [`Log`].
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            deals: vec![],
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deals(&self) -> &[DealLog] {
        &self.deals
    }

    /// The total number of actions recorded.
    pub fn action_count(&self) -> usize {
        self.deals.iter().map(|d| d.actions.len()).sum()
    }

    /// Begins a new deal.
    pub(super) fn start_deal(&mut self, deal: RoundConfig) {
        self.deals.push(DealLog::new(deal));
    }

    /// Records an action against the latest deal.
    pub(super) fn record(&mut self, action: Action) {
        match self.deals.last_mut() {
            Some(deal) => deal.actions.push(action),
            None => log::warn!("action before any deal: {action}"),
        }
    }

    /// Trump choices made by automated bid winners. These aren't submitted
    /// as intents, so a replay feeds them back through the policy.
    fn automated_trumps(&self) -> VecDeque<Suit> {
        self.deals
            .iter()
            .flat_map(|d| &d.actions)
            .filter_map(|a| match a.data {
                ActionData::Trump { suit } if self.config.is_automated(a.seat) => Some(suit),
                _ => None,
            })
            .collect()
    }
}

/// A policy that names trump from the log, and otherwise defers to [`Robot`].
struct LoggedTrump(RefCell<VecDeque<Suit>>);

impl Policy for LoggedTrump {
    fn bid(&self, view: &PlayerView) -> Option<u8> {
        Robot.bid(view)
    }

    fn choose_trump(&self, view: &PlayerView) -> Suit {
        self.0
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Robot.choose_trump(view))
    }

    fn play(&self, view: &PlayerView) -> Card {
        Robot.play(view)
    }
}

impl Game {
    /// Rebuilds a match from its log.
    ///
    /// Completed tricks are resolved as play moves on, including a trailing
    /// one after the final action. Events raised along the way are discarded,
    /// and the rebuilt game uses [`Robot`] for its automated seats.
    pub fn replay(log: &Log) -> Result<Game, ReplayError> {
        if log.deals.is_empty() {
            return Err(ReplayError::Empty);
        }
        let deals = log
            .deals
            .iter()
            .map(|d| d.deal.validate().map(|()| d.deal.clone()))
            .collect::<Result<_, _>>()?;
        let policy = LoggedTrump(RefCell::new(log.automated_trumps()));
        let mut game =
            Game::with_deals(log.config.clone(), deals).with_policy(policy.into_policy());

        for (index, entry) in log.deals.iter().enumerate() {
            if game.phase() == Phase::Resolving {
                game.resolve_trick()?;
            }
            if game.phase() == Phase::RoundEnd && index > 0 {
                game.advance_round()?;
            }
            if game.log.deals.len() != index + 1 {
                return Err(ReplayError::OutOfSync(index));
            }
            for &action in &entry.actions {
                if game.phase() == Phase::Resolving {
                    game.resolve_trick()?;
                }
                let automated_trump = matches!(action.data, ActionData::Trump { .. })
                    && log.config.is_automated(action.seat);
                if !automated_trump {
                    game.apply_action(action)?;
                }
            }
        }
        if game.phase() == Phase::Resolving {
            game.resolve_trick()?;
        }

        game.events.clear();
        Ok(game.with_policy(Robot.into_policy()))
    }
}
