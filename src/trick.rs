//! Trick

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Card, Seat, Suit};

/// The number of cards in a complete trick.
pub const TRICK_SIZE: usize = 4;

/// A trick in progress, or just completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// The cards that have been played into this trick, in play order.
    pub cards: Vec<(Seat, Card)>,
}

impl Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, (seat, card)) in self.cards.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{seat:?}:{card}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<(Seat, Card)> for Trick {
    fn from_iter<T: IntoIterator<Item = (Seat, Card)>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Trick {
    /// The number of cards played into this trick.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if nothing has been led yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true once every seat has played.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == TRICK_SIZE
    }

    /// The lead card.
    pub fn lead(&self) -> Option<(Seat, Card)> {
        self.cards.first().copied()
    }

    /// The suit of the lead card.
    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead().map(|(_, card)| card.suit)
    }

    /// Plays a card into the trick.
    pub fn play(&mut self, seat: Seat, card: Card) {
        assert!(self.cards.len() < TRICK_SIZE, "trick is full");
        self.cards.push((seat, card));
    }

    /// The provisional winner: the seat and card that currently take the
    /// trick, scanning in play order from the lead card.
    pub fn best(&self, trump: Option<Suit>) -> Option<(Seat, Card)> {
        let (lead_seat, lead_card) = self.lead()?;
        let lead = lead_card.suit;
        let best = self.cards[1..]
            .iter()
            .fold((lead_seat, lead_card), |best, &(seat, card)| {
                if card.beats(best.1, lead, trump) {
                    (seat, card)
                } else {
                    best
                }
            });
        Some(best)
    }

    /// Filters the hand down to the set of playable cards.
    pub fn filter(&self, hand: &[Card]) -> Vec<Card> {
        valid_moves(hand, self.lead_suit())
    }
}

/// The cards that may legally be played from `hand`.
///
/// With nothing led, any card may be played. Otherwise the seat must follow
/// the lead suit if it can, and may play anything (trump included) if it
/// cannot.
pub fn valid_moves(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let Some(lead) = lead else {
        return hand.to_vec();
    };
    let following: Vec<_> = hand.iter().filter(|c| c.suit == lead).copied().collect();
    if following.is_empty() {
        hand.to_vec()
    } else {
        following
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use itertools::Itertools;

    use super::*;

    /// Builds a trick from strings like `"N7S"`: seat, then card.
    fn trick(cards: &[&str]) -> Trick {
        cards
            .iter()
            .map(|s| {
                let mut chars = s.chars();
                let seat = chars.next().unwrap().try_into().unwrap();
                let card = Card::from_str(chars.as_str()).unwrap();
                (seat, card)
            })
            .collect()
    }

    fn card(s: &str) -> Card {
        Card::from_str(s).unwrap()
    }

    #[test]
    fn test_trick_best() {
        struct Case {
            trick: Trick,
            trump: Suit,
            expect: Seat,
        }

        fn case(trump: char, cards: &[&str], expect: char) -> Case {
            Case {
                trick: trick(cards),
                trump: Suit::try_from(trump).unwrap(),
                expect: expect.try_into().unwrap(),
            }
        }

        let cases = [
            case('H', &["N9S"], 'N'),
            case('H', &["N9S", "ETS"], 'E'),
            case('H', &["NTS", "E9S"], 'N'),
            case('H', &["NAS", "E2H"], 'E'),
            case('H', &["N2H", "EAS"], 'N'),
            case('H', &["NAS", "E2H", "S3H"], 'S'),
            case('H', &["NAS", "E3H", "S2H"], 'E'),
            case('H', &["N2S", "EAC", "SKD"], 'N'),
            case('S', &["N2S", "EAS"], 'E'),
            // Full tricks, with and without trump among the cards.
            case('H', &["N7S", "EKS", "S2D", "WAS"], 'W'),
            case('D', &["N7S", "EKS", "S2D", "WAS"], 'S'),
            case('D', &["N9C", "E2D", "SKC", "W3D"], 'W'),
        ];
        for case in cases {
            println!("{} -> {:?}", &case.trick, &case.expect);
            assert_eq!(case.expect, case.trick.best(Some(case.trump)).unwrap().0);
        }
    }

    #[test]
    fn test_empty_trick() {
        let trick = Trick::default();
        assert_eq!(None, trick.best(Some(Suit::Spade)));
        assert_eq!(None, trick.lead_suit());
        assert!(!trick.is_complete());
    }

    #[test]
    fn test_best_invariant_under_reordering() {
        let trick = trick(&["N9C", "E2D", "SKC", "W3D"]);
        let trump = Some(Suit::Diamond);
        let (winner, best) = trick.best(trump).unwrap();
        let lead = trick.cards[0];
        let winning = trick.cards[3];
        let others = [trick.cards[1], trick.cards[2]];
        for perm in others.iter().copied().permutations(2) {
            for pos in 1..=3 {
                let mut cards = perm.clone();
                cards.insert(pos - 1, winning);
                let reordered: Trick = std::iter::once(lead).chain(cards).collect();
                assert_eq!(Some((winner, best)), reordered.best(trump));
            }
        }
    }

    #[test]
    fn test_valid_moves() {
        let hand = [card("3S"), card("KS"), card("4H"), card("9D")];
        assert_eq!(hand.to_vec(), valid_moves(&hand, None));
        assert_eq!(
            vec![card("3S"), card("KS")],
            valid_moves(&hand, Some(Suit::Spade))
        );
        assert_eq!(hand.to_vec(), valid_moves(&hand, Some(Suit::Club)));

        let trick = trick(&["N2H"]);
        assert_eq!(vec![card("4H")], trick.filter(&hand));
    }
}
