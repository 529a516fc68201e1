//! Trick play.

use super::Game;
use crate::{
    Action, ActionData, ActionType, Card, CardFault, Event, Phase, RuleViolation, Seat,
};

impl Game {
    /// Plays a card into the current trick.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<(), RuleViolation> {
        self.expect_phase(Phase::Playing, ActionType::Play)?;
        self.expect_seat(seat, self.state.round.turn)?;
        let hand = &self.state.player(seat).hand;
        if !hand.contains(&card) {
            return Err(RuleViolation::IllegalCard {
                seat,
                card,
                fault: CardFault::NotHeld,
            });
        }
        if let Some(lead) = self.state.round.current_trick.lead_suit() {
            if card.suit != lead && hand.has_suit(lead) {
                return Err(RuleViolation::IllegalCard {
                    seat,
                    card,
                    fault: CardFault::MustFollow(lead),
                });
            }
        }

        self.state.player_mut(seat).hand.remove(card);
        let round = &mut self.state.round;
        round.current_trick.play(seat, card);
        if round.current_trick.is_complete() {
            round.phase = Phase::Resolving;
            round.message = format!("{seat} plays {card}. Trick complete");
        } else {
            round.turn = seat.next();
            round.message = format!("{seat} plays {card}");
        }

        log::debug!("{seat} plays {card}");
        self.events.push_back(Event::Play(seat, card));
        self.log.record(Action::new(seat, ActionData::Card { card }));
        Ok(())
    }

    /// Settles a complete trick: the winner collects it and leads the next.
    /// After the last trick, the round is scored.
    pub fn resolve_trick(&mut self) -> Result<Seat, RuleViolation> {
        self.expect_phase(Phase::Resolving, ActionType::Resolve)?;
        let round = &mut self.state.round;
        let trick = std::mem::take(&mut round.current_trick);
        let (winner, card) = trick.best(round.trump).expect("complete trick has a winner");
        round.trick_leader = winner;
        round.turn = winner;
        round.tricks_played += 1;
        round.message = format!("{winner} wins the trick with {card}");
        self.state.player_mut(winner).tricks_won += 1;

        log::debug!("{winner} wins {trick}");
        self.events.push_back(Event::Trick { trick, winner });
        if self.state.players.iter().all(|p| p.hand.is_empty()) {
            self.finalize_round();
        } else {
            self.state.round.phase = Phase::Playing;
        }
        Ok(winner)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::super::test::{all_human, fixture};
    use super::*;
    use crate::policy::Scripted;
    use crate::{GameConfig, Policy, Suit, Tick, TRICK_SIZE};

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    /// East wins the bid at 9 and names spades.
    fn playing_game() -> Game {
        let mut game = Game::with_deals(all_human(), vec![fixture()]);
        game.submit_bid(Seat::East, 9).unwrap();
        for seat in [Seat::South, Seat::West, Seat::North] {
            game.submit_pass(seat).unwrap();
        }
        game.choose_trump(Seat::East, Suit::Spade).unwrap();
        game
    }

    #[test]
    fn test_must_follow_suit() {
        let mut game = playing_game();
        game.play_card(Seat::East, card("AH")).unwrap();
        // South holds hearts, and may not discard a club.
        let before = game.snapshot();
        assert_matches!(
            game.play_card(Seat::South, card("7C")),
            Err(RuleViolation::IllegalCard {
                seat: Seat::South,
                fault: CardFault::MustFollow(Suit::Heart),
                ..
            })
        );
        assert_matches!(
            game.play_card(Seat::South, card("AS")),
            Err(RuleViolation::IllegalCard {
                fault: CardFault::NotHeld,
                ..
            })
        );
        assert_matches!(
            game.play_card(Seat::West, card("6H")),
            Err(RuleViolation::NotYourTurn {
                seat: Seat::West,
                expected: Seat::South
            })
        );
        assert_eq!(before, game.snapshot());
        game.play_card(Seat::South, card("9H")).unwrap();
    }

    #[test]
    fn test_void_may_trump() {
        let mut game = playing_game();
        game.play_card(Seat::East, card("5C")).unwrap();
        game.play_card(Seat::South, card("7C")).unwrap();
        game.play_card(Seat::West, card("AC")).unwrap();
        game.play_card(Seat::North, card("2C")).unwrap();
        assert_eq!(Seat::West, game.resolve_trick().unwrap());

        // West runs the diamonds until everyone else is void.
        game.play_card(Seat::West, card("AD")).unwrap();
        game.play_card(Seat::North, card("2D")).unwrap();
        game.play_card(Seat::East, card("5D")).unwrap();
        game.play_card(Seat::South, card("8D")).unwrap();
        assert_eq!(Seat::West, game.resolve_trick().unwrap());
        game.play_card(Seat::West, card("KD")).unwrap();
        game.play_card(Seat::North, card("3D")).unwrap();
        game.play_card(Seat::East, card("6D")).unwrap();
        game.play_card(Seat::South, card("9D")).unwrap();
        game.resolve_trick().unwrap();
        game.play_card(Seat::West, card("QD")).unwrap();
        game.play_card(Seat::North, card("4D")).unwrap();
        game.play_card(Seat::East, card("7D")).unwrap();
        game.play_card(Seat::South, card("TD")).unwrap();
        game.resolve_trick().unwrap();

        // East trumps in.
        game.play_card(Seat::West, card("JD")).unwrap();
        game.play_card(Seat::North, card("5H")).unwrap();
        game.play_card(Seat::East, card("9S")).unwrap();
        game.play_card(Seat::South, card("QH")).unwrap();
        assert_eq!(Seat::East, game.resolve_trick().unwrap());
        assert_eq!(1, game.state().player(Seat::East).tricks_won);
        assert_eq!(4, game.state().player(Seat::West).tricks_won);
    }

    #[test]
    fn test_trick_lifecycle() {
        let mut game = playing_game();
        let plays = ["AS", "5S", "8S", "2S"];
        for (seat, card_str) in Seat::North.next_n(4).into_iter().zip(plays) {
            assert_eq!(seat, game.state().round.turn);
            game.play_card(seat, card(card_str)).unwrap();
        }
        let round = &game.state().round;
        assert_eq!(Phase::Resolving, round.phase);
        assert_eq!(TRICK_SIZE, round.current_trick.len());
        assert_eq!(None, game.next_action());
        assert_matches!(
            game.play_card(Seat::East, card("KS")),
            Err(RuleViolation::InvalidPhaseForAction {
                phase: Phase::Resolving,
                ..
            })
        );

        assert_eq!(Ok(Tick::Resolved(Seat::East)), game.tick());
        let round = &game.state().round;
        assert_eq!(Phase::Playing, round.phase);
        assert!(round.current_trick.is_empty());
        assert_eq!(Seat::East, round.turn);
        assert_eq!(Seat::East, round.trick_leader);
        assert_eq!(1, round.tricks_played);
        assert_eq!(12, game.state().player(Seat::North).hand.len());

        let events: Vec<_> = std::iter::from_fn(|| game.pop_event()).collect();
        assert_matches!(
            events.last(),
            Some(Event::Trick {
                winner: Seat::East,
                ..
            })
        );
    }

    #[test]
    fn test_automated_play() {
        let policy = Scripted::default()
            .passes(Seat::East)
            .passes(Seat::South)
            .bids(Seat::West, 8)
            .names_trump(Seat::West, Suit::Diamond)
            .plays(Seat::West, "AD")
            .plays(Seat::East, "5C")
            .into_policy();
        let config = GameConfig::default().with_human(Seat::North);
        let mut game = Game::with_deals(config, vec![fixture()]).with_policy(policy);
        game.run_automated().unwrap();
        game.submit_pass(Seat::North).unwrap();

        let lead = Action::new(Seat::West, ActionData::Card { card: card("AD") });
        assert_eq!(Ok(Tick::Acted(lead)), game.tick());
        assert_eq!(Ok(Tick::Idle), game.tick());
        game.play_card(Seat::North, card("2D")).unwrap();

        // East holds diamonds, so the scripted club is rejected.
        let before = game.snapshot();
        assert_matches!(
            game.tick(),
            Err(RuleViolation::IllegalCard {
                seat: Seat::East,
                fault: CardFault::MustFollow(Suit::Diamond),
                ..
            })
        );
        assert_eq!(before, game.snapshot());

        // With the script exhausted, East follows suit.
        assert_matches!(game.tick(), Ok(Tick::Acted(_)));
        let (seat, played) = game.state().round.current_trick.cards[2];
        assert_eq!(Seat::East, seat);
        assert_eq!(Suit::Diamond, played.suit);
    }
}
