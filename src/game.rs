//! Match management.
//!
//! A match is a sequence of rounds, each of which consists of a deal, a
//! bidding phase, an optional trump declaration by a human bid winner, and
//! thirteen tricks. The [`Game`] engine owns the [`MatchState`] and advances
//! it in response to intents.
//!
//! ## State management
//!
//! The identity of the next seat to act, and the action it is expected to
//! take, is always known, and may be obtained via
//! [`next_action`](`Game::next_action`). Intents are submitted either through
//! the typed entry points ([`submit_bid`](`Game::submit_bid`),
//! [`play_card`](`Game::play_card`), and so on) or as an [`Action`] via
//! [`apply_action`](`Game::apply_action`). A rejected intent leaves the state
//! untouched.
//!
//! Automated seats don't act on their own. The caller drives them with
//! [`tick`](`Game::tick`), which also resolves a completed trick.
//!
//! ## Events
//!
//! Transitions push [`Event`]s onto a queue, which may be drained using
//! [`pop_event`](`Game::pop_event`).

use std::collections::VecDeque;
use std::sync::Arc;

use delegate::delegate;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::{
    Action, ActionData, ActionType, Event, ExpectAction, GameConfig, Phase, Player, PlayerView,
    Policy, Robot, RoundConfig, RoundState, RuleViolation, Seat, Team,
};

mod bidding;
mod replay;
mod scoring;
mod tricks;
pub use replay::{DealLog, Log};
pub use scoring::RoundOutcome;

/// Everything that persists across rounds, plus the round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Running score for North & South.
    pub team_a_score: i32,
    /// Running score for East & West.
    pub team_b_score: i32,
    /// The four seats, indexed by [`Seat::index`].
    pub players: [Player; 4],
    /// The round in progress.
    pub round: RoundState,
}

impl MatchState {
    /// A match with zero scores and empty hands.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            team_a_score: 0,
            team_b_score: 0,
            players: [Seat::North, Seat::East, Seat::South, Seat::West]
                .map(|seat| Player::new(seat, config.is_automated(seat))),
            round: RoundState::new(config.first_dealer),
        }
    }

    /// The active phase.
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    /// The player at the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The player at the given seat, mutably.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// The team's running score.
    pub fn score(&self, team: Team) -> i32 {
        match team {
            Team::A => self.team_a_score,
            Team::B => self.team_b_score,
        }
    }

    /// Tricks won by the team so far this round.
    pub fn tricks(&self, team: Team) -> u8 {
        team.seats().iter().map(|&s| self.player(s).tricks_won).sum()
    }

    /// Returns a bundle of state visible to the specified seat.
    pub fn player_view(&self, seat: Seat) -> PlayerView<'_> {
        PlayerView {
            seat,
            dealer: self.round.dealer,
            hand: self.player(seat).hand.cards(),
            trick: &self.round.current_trick,
            trump: self.round.trump,
            highest_bid: self.round.highest_bid,
            bid_winner: self.round.bid_winner,
        }
    }

    /// The outcome of the round, once it is over.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if self.round.phase != Phase::RoundEnd {
            return None;
        }
        let bidder = self.round.bid_winner?.team();
        Some(RoundOutcome::new(
            bidder,
            self.round.highest_bid,
            self.tricks(Team::A),
            self.tricks(Team::B),
        ))
    }
}

/// What a call to [`Game::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing to do: a human seat is expected to act, or the round is over.
    Idle,
    /// A completed trick was resolved in favor of this seat.
    Resolved(Seat),
    /// An automated seat took this action.
    Acted(Action),
}

/// The engine for a match of tarneeb.
pub struct Game {
    /// The match state.
    state: MatchState,
    /// Static configuration.
    config: GameConfig,
    /// Randomness for shuffling.
    rng: StdRng,
    /// Decisions for automated seats.
    policy: Arc<dyn Policy>,
    /// Predetermined deals, consumed before any random ones.
    deals: VecDeque<RoundConfig>,
    /// Pending events.
    events: VecDeque<Event>,
    /// Every deal and action so far.
    log: Log,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new match, and deals the first round.
    pub fn new(config: GameConfig) -> Self {
        Self::with_deals(config, vec![])
    }

    /// Creates a new match that takes its deals from `deals` before
    /// shuffling any of its own.
    pub fn with_deals(config: GameConfig, deals: Vec<RoundConfig>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Self {
            state: MatchState::new(&config),
            log: Log::new(config.clone()),
            config,
            rng,
            policy: Robot.into_policy(),
            deals: deals.into(),
            events: VecDeque::new(),
        };
        game.start_round(game.config.first_dealer);
        game
    }

    /// Replaces the policy used for automated seats.
    pub fn with_policy(mut self, policy: Arc<dyn Policy>) -> Self {
        self.policy = policy;
        self
    }

    delegate! {
        to self.state {
            /// The active phase.
            pub fn phase(&self) -> Phase;
            /// Returns a bundle of state visible to the specified seat.
            pub fn player_view(&self, seat: Seat) -> PlayerView<'_>;
            /// The outcome of the round, once it is over.
            pub fn outcome(&self) -> Option<RoundOutcome>;
        }
    }

    /// Returns the match configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns an immutable reference to the match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Returns a copy of the match state.
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Returns an immutable reference to the log.
    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Pops the oldest event from the queue of events.
    pub fn pop_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Returns the next action that's required to advance the round, or
    /// `None` if a trick awaits resolution or the round is over.
    pub fn next_action(&self) -> Option<ExpectAction> {
        let round = &self.state.round;
        match round.phase {
            Phase::Bidding => Some(ExpectAction::new(round.current_bidder, ActionType::Bid)),
            Phase::ChoosingTrump => round
                .bid_winner
                .map(|seat| ExpectAction::new(seat, ActionType::ChooseTrump)),
            Phase::Playing => Some(ExpectAction::new(round.turn, ActionType::Play)),
            Phase::Resolving | Phase::RoundEnd => None,
        }
    }

    /// Applies the specified action.
    pub fn apply_action(&mut self, action: Action) -> Result<(), RuleViolation> {
        match action.data {
            ActionData::Pass => self.submit_pass(action.seat),
            ActionData::Bid { value } => self.submit_bid(action.seat, value),
            ActionData::Trump { suit } => self.choose_trump(action.seat, suit),
            ActionData::Card { card } => self.play_card(action.seat, card),
        }
    }

    /// Advances the match by one step, without blocking: resolves a completed
    /// trick, or takes one action on behalf of the automated seat on turn.
    pub fn tick(&mut self) -> Result<Tick, RuleViolation> {
        if self.phase() == Phase::Resolving {
            return self.resolve_trick().map(Tick::Resolved);
        }
        let Some(expect) = self.next_action() else {
            return Ok(Tick::Idle);
        };
        if !self.state.player(expect.seat).automated {
            return Ok(Tick::Idle);
        }
        let view = self.player_view(expect.seat);
        let Some(data) = self.policy.take_action(&view, expect.action) else {
            return Ok(Tick::Idle);
        };
        let action = expect.with_data(data);
        self.apply_action(action)?;
        Ok(Tick::Acted(action))
    }

    /// Ticks until a human seat is expected to act, or the round is over.
    /// Returns the number of steps taken.
    pub fn run_automated(&mut self) -> Result<usize, RuleViolation> {
        let mut steps = 0;
        while self.tick()? != Tick::Idle {
            steps += 1;
        }
        Ok(steps)
    }

    /// Starts the next round, with the dealer rotated clockwise. Only valid
    /// once the round is over.
    pub fn advance_round(&mut self) -> Result<(), RuleViolation> {
        self.expect_phase(Phase::RoundEnd, ActionType::Continue)?;
        let dealer = self.state.round.dealer.next();
        self.start_round(dealer);
        Ok(())
    }

    /// Deals a new round and opens the bidding.
    fn start_round(&mut self, dealer: Seat) {
        let deal = match self.deals.pop_front() {
            Some(deal) => {
                if deal.dealer() != dealer {
                    log::warn!("scripted deal is dealt by {}, not {dealer}", deal.dealer());
                }
                deal
            }
            None => RoundConfig::random_with(dealer, self.config.deal_bias, &mut self.rng),
        };
        let dealer = deal.dealer();
        for player in &mut self.state.players {
            player.deal(deal.hand(player.seat).to_vec());
        }
        self.state.round = RoundState::new(dealer);
        let first = self.state.player_mut(self.state.round.current_bidder);
        first.status = first.turn_status();

        log::info!("{dealer} deals");
        for &seat in Seat::all_seats() {
            log::debug!("{seat}: {}", deal.hand(seat).iter().join(" "));
        }
        self.log.start_deal(deal);
        self.events.push_back(Event::Deal { dealer });
    }

    /// Checks that the round is in the expected phase.
    fn expect_phase(&self, phase: Phase, action: ActionType) -> Result<(), RuleViolation> {
        let current = self.state.round.phase;
        if current == phase {
            Ok(())
        } else {
            Err(RuleViolation::InvalidPhaseForAction {
                phase: current,
                action,
            })
        }
    }

    /// Checks that `seat` is the one expected to act.
    fn expect_seat(&self, seat: Seat, expected: Seat) -> Result<(), RuleViolation> {
        if seat == expected {
            Ok(())
        } else {
            Err(RuleViolation::NotYourTurn { seat, expected })
        }
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use maplit::hashmap;

    use super::*;
    use crate::{Card, Status, HAND_SIZE};

    fn hand(cards: &str) -> Vec<Card> {
        cards
            .split_whitespace()
            .map(|s| Card::from_str(s).unwrap())
            .collect()
    }

    /// A fixed deal. East holds a long spade suit, and West long clubs and
    /// diamonds.
    pub(crate) fn fixture_dealt_by(dealer: Seat) -> RoundConfig {
        RoundConfig::new(
            dealer,
            hashmap! {
                Seat::North => hand("2S 3S 4S 2H 3H 4H 5H 2C 3C 4C 2D 3D 4D"),
                Seat::East => hand("AS KS QS JS TS 9S AH KH 5C 6C 5D 6D 7D"),
                Seat::South => hand("5S 6S 7S QH JH TH 9H 7C 8C 9C 8D 9D TD"),
                Seat::West => hand("8S 6H 7H 8H TC JC QC KC AC JD QD KD AD"),
            },
        )
        .unwrap()
    }

    pub(crate) fn fixture() -> RoundConfig {
        fixture_dealt_by(Seat::North)
    }

    pub(crate) fn all_human() -> GameConfig {
        GameConfig {
            automated: [false; 4],
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::with_deals(all_human(), vec![fixture()]);
        let state = game.state();
        assert_eq!(Phase::Bidding, state.phase());
        assert_eq!(Seat::East, state.round.current_bidder);
        assert_eq!(Status::YourTurn, state.player(Seat::East).status);
        assert_eq!(Status::Waiting, state.player(Seat::North).status);
        for player in &state.players {
            assert_eq!(HAND_SIZE, player.hand.len());
        }
        assert_eq!(
            Some(ExpectAction::new(Seat::East, ActionType::Bid)),
            game.next_action()
        );
    }

    #[test]
    fn test_snapshot_is_stable() {
        let mut game = Game::new(GameConfig::all_automated().with_seed(11));
        game.tick().unwrap();
        let a = game.snapshot();
        let b = game.snapshot();
        assert_eq!(a, b);
        assert_eq!(&a, game.state());
    }

    #[test]
    fn test_rejected_intents_are_noops() {
        let mut game = Game::with_deals(all_human(), vec![fixture()]);
        let before = game.snapshot();
        assert_matches!(
            game.submit_bid(Seat::South, 8),
            Err(RuleViolation::NotYourTurn {
                seat: Seat::South,
                expected: Seat::East
            })
        );
        assert_matches!(
            game.play_card(Seat::East, Card::from_str("AS").unwrap()),
            Err(RuleViolation::InvalidPhaseForAction {
                phase: Phase::Bidding,
                action: ActionType::Play
            })
        );
        assert_matches!(
            game.resolve_trick(),
            Err(RuleViolation::InvalidPhaseForAction { .. })
        );
        assert_matches!(
            game.advance_round(),
            Err(RuleViolation::InvalidPhaseForAction {
                phase: Phase::Bidding,
                action: ActionType::Continue
            })
        );
        assert_eq!(before, game.snapshot());
        assert_eq!(Some(Event::Deal { dealer: Seat::North }), game.pop_event());
        assert_eq!(None, game.pop_event());
    }

    #[test]
    fn test_tick_waits_for_humans() {
        let mut game = Game::with_deals(all_human(), vec![fixture()]);
        assert_eq!(Ok(Tick::Idle), game.tick());
        assert_eq!(Ok(0), game.run_automated());
        assert_eq!(Phase::Bidding, game.phase());
    }

    #[test]
    fn test_automated_rounds() {
        let mut game = Game::new(GameConfig::all_automated().with_seed(3));
        for _ in 0..5 {
            game.run_automated().unwrap();
            assert_eq!(Phase::RoundEnd, game.phase());
            let state = game.state();
            assert_eq!(HAND_SIZE as u8, state.tricks(Team::A) + state.tricks(Team::B));
            assert!(state.players.iter().all(|p| p.hand.is_empty()));
            assert_eq!(HAND_SIZE as u8, state.round.tricks_played);
            assert!(state.outcome().is_some());
            let dealer = state.round.dealer;
            game.advance_round().unwrap();
            assert_eq!(dealer.next(), game.state().round.dealer);
        }
    }

    #[test]
    fn test_human_seat_blocks() {
        let config = GameConfig::default().with_human(Seat::East).with_seed(5);
        let mut game = Game::with_deals(config, vec![fixture()]);
        // East bids first, and is human.
        assert_eq!(Ok(0), game.run_automated());
        game.submit_bid(Seat::East, 9).unwrap();
        game.run_automated().unwrap();
        // Nobody else can compete with East's spades, so East names trump.
        assert_eq!(Phase::ChoosingTrump, game.phase());
        assert_eq!(
            Some(ExpectAction::new(Seat::East, ActionType::ChooseTrump)),
            game.next_action()
        );
    }
}
