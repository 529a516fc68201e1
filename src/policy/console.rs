//! Simple console interactive player.

use std::{fmt::Display, io::Write, str::FromStr};

use ansi_term::{ANSIString, ANSIStrings};

use super::{Card, Event, PlayerView, Policy, RuleViolation, Suit};
use crate::{Seat, Trick};

pub struct Console {
    color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Reads a line from stdin, re-prompting until it parses.
fn prompt<T: FromStr, S: Display>(prompt: S) -> T {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        let mut buffer = String::new();
        print!("{prompt}");
        stdout.flush().expect("flush");
        stdin.read_line(&mut buffer).expect("read");
        let trimmed = buffer.trim();
        if !trimmed.is_empty() {
            if let Ok(obj) = T::from_str(trimmed) {
                return obj;
            }
            println!("Invalid input, try again");
        }
    }
}

/// A bid typed at the console: a number, or `p` to pass.
enum BidInput {
    Pass,
    Bid(u8),
}

impl FromStr for BidInput {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" | "P" | "pass" => Ok(BidInput::Pass),
            _ => s.parse().map(BidInput::Bid).map_err(|_| ()),
        }
    }
}

/// A yes/no answer.
struct YesNo(bool);

impl FromStr for YesNo {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(YesNo(true)),
            "n" | "no" => Ok(YesNo(false)),
            _ => Err(()),
        }
    }
}

impl Console {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn format(&self, s: &ANSIStrings) -> String {
        if self.color {
            s.to_string()
        } else {
            ansi_term::unstyle(s)
        }
    }

    fn format_card(&self, card: Card) -> String {
        self.format(&ANSIStrings(&[card.to_ansi_string()]))
    }

    fn format_suit(&self, suit: Suit) -> String {
        self.format(&ANSIStrings(&[suit.to_ansi_string()]))
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        let mut parts: Vec<ANSIString> = vec![];
        for (ii, card) in cards.iter().enumerate() {
            if ii > 0 {
                parts.push(" ".into());
            }
            parts.push(card.to_ansi_string());
        }
        self.format(&ANSIStrings(&parts))
    }

    fn format_trick(&self, trick: &Trick) -> String {
        let mut parts: Vec<ANSIString> = vec!["[".into()];
        for (i, (seat, card)) in trick.cards.iter().enumerate() {
            if i != 0 {
                parts.push(", ".into());
            }
            parts.push(format!("{seat}:").into());
            parts.push(card.to_ansi_string());
        }
        parts.push("]".into());
        self.format(&ANSIStrings(&parts))
    }

    /// Asks whether to deal another round.
    pub fn confirm(&self, question: &str) -> bool {
        prompt::<YesNo, _>(format!("{question} [y/n] ")).0
    }

    /// Prints the final scores.
    pub fn scores(&self, team_a: i32, team_b: i32) {
        println!("Score: Team A (North/South) {team_a}, Team B (East/West) {team_b}");
    }
}

impl Policy for Console {
    fn bid(&self, view: &PlayerView) -> Option<u8> {
        println!("Hand: {}", self.format_cards(view.hand));
        match view.bid_winner {
            Some(seat) => println!("{seat} holds the bid at {}", view.highest_bid),
            None => println!("No bids yet"),
        }
        match prompt::<BidInput, _>("Bid 7-13, or p to pass? ") {
            BidInput::Pass => None,
            BidInput::Bid(value) => Some(value),
        }
    }

    fn choose_trump(&self, view: &PlayerView) -> Suit {
        println!("Hand: {}", self.format_cards(view.hand));
        prompt("Trump (S, H, C, D)? ")
    }

    fn play(&self, view: &PlayerView) -> Card {
        if !view.trick.is_empty() {
            println!("Trick: {}", self.format_trick(view.trick));
        }
        println!("Hand: {}", self.format_cards(view.hand));
        println!("Playable: {}", self.format_cards(&view.valid_moves()));
        if view.trick.is_empty() {
            prompt("Lead? ")
        } else {
            prompt("Follow? ")
        }
    }

    fn notify(&self, view: &PlayerView, event: &Event) {
        match event {
            Event::Deal { dealer } => {
                println!("Dealer: {dealer}");
                println!("{}: {}", view.seat, self.format_cards(view.hand));
            }
            Event::Bid(seat, value) => println!("{seat}: bids {value}"),
            Event::Pass(seat) => println!("{seat}: passes"),
            Event::Redeal { dealer } => {
                println!("Everyone passed! Re-dealing, {dealer} deals");
            }
            Event::Contract { seat, bid, trump } => {
                println!("{seat}: contracts {bid} in {}", self.format_suit(*trump));
            }
            Event::Play(seat, card) => {
                if *seat != view.seat {
                    println!("{seat}: plays {}", self.format_card(*card));
                }
            }
            Event::Trick { trick, winner } => {
                println!("Trick: {} -> {winner}", self.format_trick(trick));
            }
            Event::Round(outcome) => println!("{outcome}"),
        }
    }

    fn handle_error(&self, err: &RuleViolation) -> bool {
        println!("Error: {err}");
        true
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parse_inputs() {
        assert!(matches!(BidInput::from_str("p"), Ok(BidInput::Pass)));
        assert!(matches!(BidInput::from_str("8"), Ok(BidInput::Bid(8))));
        assert!(BidInput::from_str("eight").is_err());
        assert!(YesNo::from_str("Y").unwrap().0);
        assert!(!YesNo::from_str("no").unwrap().0);
        assert!(YesNo::from_str("maybe").is_err());
    }

    #[test]
    fn test_uncolored_formatting() {
        let console = Console::new(false);
        let cards = [Card::from_str("TH").unwrap(), Card::from_str("AS").unwrap()];
        assert_eq!("10♥ A♠", console.format_cards(&cards));
        let trick: Trick = [(Seat::North, cards[0])].into_iter().collect();
        assert_eq!("[North:10♥]", console.format_trick(&trick));
    }
}
