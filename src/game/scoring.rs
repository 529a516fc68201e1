//! Round scoring.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::Game;
use crate::{Event, Phase, Team};

/// The outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// The team that won the bid.
    pub bidder: Team,
    /// The contract: tricks the bidder team needed.
    pub bid: u8,
    /// Tricks taken by North & South.
    pub tricks_a: u8,
    /// Tricks taken by East & West.
    pub tricks_b: u8,
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = if self.made() { "made" } else { "failed" };
        write!(
            f,
            "{} {verb} {} with {} tricks: {} {:+}, {} {:+}",
            self.bidder,
            self.bid,
            self.tricks(self.bidder),
            Team::A,
            self.delta(Team::A),
            Team::B,
            self.delta(Team::B),
        )
    }
}

impl RoundOutcome {
    /// Creates a new [`RoundOutcome`].
    pub fn new(bidder: Team, bid: u8, tricks_a: u8, tricks_b: u8) -> Self {
        Self {
            bidder,
            bid,
            tricks_a,
            tricks_b,
        }
    }

    /// Tricks taken by the team.
    pub fn tricks(&self, team: Team) -> u8 {
        match team {
            Team::A => self.tricks_a,
            Team::B => self.tricks_b,
        }
    }

    /// Returns true if the bidder team took at least as many tricks as it bid.
    pub fn made(&self) -> bool {
        self.tricks(self.bidder) >= self.bid
    }

    /// The change to the team's score.
    ///
    /// A bidder team that makes its contract scores the tricks it took, and
    /// the defenders score nothing. A bidder team that fails loses its bid,
    /// and the defenders score the tricks they took.
    pub fn delta(&self, team: Team) -> i32 {
        let tricks = i32::from(self.tricks(team));
        match (team == self.bidder, self.made()) {
            (true, true) => tricks,
            (true, false) => -i32::from(self.bid),
            (false, true) => 0,
            (false, false) => tricks,
        }
    }
}

impl Game {
    /// Tallies the tricks, adjusts the scores, and ends the round.
    pub(super) fn finalize_round(&mut self) {
        self.state.round.phase = Phase::RoundEnd;
        let outcome = self
            .state
            .outcome()
            .expect("a contract is in play once tricks are played");
        self.state.team_a_score += outcome.delta(Team::A);
        self.state.team_b_score += outcome.delta(Team::B);
        self.state.round.message = outcome.to_string();

        log::info!(
            "{outcome}; score is {} to {}",
            self.state.team_a_score,
            self.state.team_b_score
        );
        self.events.push_back(Event::Round(outcome));
    }
}
