//! Bidding and trump declaration.

use super::Game;
use crate::{
    Action, ActionData, ActionType, Event, Phase, RuleViolation, Seat, Status, Suit, MAX_BID,
    MIN_BID, NO_BID,
};

impl Game {
    /// Bids to win at least `value` tricks. Values above thirteen are taken
    /// as thirteen.
    pub fn submit_bid(&mut self, seat: Seat, value: u8) -> Result<(), RuleViolation> {
        self.expect_bidder(seat)?;
        let value = value.min(MAX_BID);
        let highest = self.state.round.highest_bid;
        if value < MIN_BID || value <= highest {
            return Err(RuleViolation::IllegalBidValue { value, highest });
        }

        let round = &mut self.state.round;
        round.highest_bid = value;
        round.bid_winner = Some(seat);
        round.message = format!("{seat} bids {value}");
        let player = self.state.player_mut(seat);
        player.bid = value;
        player.status = Status::Bid(value);

        log::debug!("{seat} bids {value}");
        self.events.push_back(Event::Bid(seat, value));
        self.log.record(Action::new(seat, ActionData::Bid { value }));
        self.close_bidding(seat);
        Ok(())
    }

    /// Drops out of the bidding.
    pub fn submit_pass(&mut self, seat: Seat) -> Result<(), RuleViolation> {
        self.expect_bidder(seat)?;
        self.state.player_mut(seat).status = Status::Passed;
        self.state.round.message = format!("{seat} passes");

        log::debug!("{seat} passes");
        self.events.push_back(Event::Pass(seat));
        self.log.record(Action::new(seat, ActionData::Pass));
        self.close_bidding(seat);
        Ok(())
    }

    /// Names trump, as the human winner of the bid.
    pub fn choose_trump(&mut self, seat: Seat, suit: Suit) -> Result<(), RuleViolation> {
        if let Some(trump) = self.state.round.trump {
            return Err(RuleViolation::DuplicateTrumpChoice(trump));
        }
        self.expect_phase(Phase::ChoosingTrump, ActionType::ChooseTrump)?;
        if let Some(winner) = self.state.round.bid_winner {
            self.expect_seat(seat, winner)?;
        }
        self.declare_trump(seat, suit);
        Ok(())
    }

    fn expect_bidder(&self, seat: Seat) -> Result<(), RuleViolation> {
        self.expect_phase(Phase::Bidding, ActionType::Bid)?;
        self.expect_seat(seat, self.state.round.current_bidder)?;
        debug_assert!(!self.state.player(seat).has_passed());
        Ok(())
    }

    /// Checks whether the bidding is over, and otherwise passes the turn to
    /// the next seat still bidding.
    fn close_bidding(&mut self, seat: Seat) {
        let active: Vec<Seat> = Seat::all_seats()
            .iter()
            .copied()
            .filter(|&s| !self.state.player(s).has_passed())
            .collect();
        let highest = self.state.round.highest_bid;
        match active.as_slice() {
            [] => self.redeal(),
            &[winner] if highest > NO_BID => self.award_bid(winner),
            _ => {
                let next = seat
                    .next_n(4)
                    .into_iter()
                    .find(|&s| !self.state.player(s).has_passed())
                    .unwrap_or(seat);
                self.state.round.current_bidder = next;
                let player = self.state.player_mut(next);
                if player.status == Status::Waiting {
                    player.status = player.turn_status();
                }
            }
        }
    }

    /// Every seat passed: the dealer rotates and the cards are dealt again.
    fn redeal(&mut self) {
        let dealer = self.state.round.dealer.next();
        log::info!("all seats passed, {dealer} re-deals");
        self.events.push_back(Event::Redeal { dealer });
        self.start_round(dealer);
        self.state.round.message = format!("All passed. Re-dealing, {dealer} deals");
    }

    /// The last seat bidding wins the contract.
    fn award_bid(&mut self, seat: Seat) {
        let bid = self.state.round.highest_bid;
        for player in &mut self.state.players {
            player.status = Status::Idle;
        }
        self.state.round.bid_winner = Some(seat);
        log::info!("{seat} wins the bid at {bid}");

        if self.state.player(seat).automated {
            let suit = self.policy.choose_trump(&self.state.player_view(seat));
            self.declare_trump(seat, suit);
        } else {
            let round = &mut self.state.round;
            round.phase = Phase::ChoosingTrump;
            round.message = format!("{seat} won the bid at {bid}. Choose trump");
        }
    }

    /// Fixes trump and opens play, led by the bid winner.
    fn declare_trump(&mut self, seat: Seat, suit: Suit) {
        let round = &mut self.state.round;
        let bid = round.highest_bid;
        round.trump = Some(suit);
        round.phase = Phase::Playing;
        round.trick_leader = seat;
        round.turn = seat;
        round.message = format!("{seat} bid {bid}, trump is {suit}");

        log::info!("{seat} contracts {bid} in {suit}");
        self.events.push_back(Event::Contract {
            seat,
            bid,
            trump: suit,
        });
        self.log.record(Action::new(seat, ActionData::Trump { suit }));
    }
}
