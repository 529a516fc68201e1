//! Table position.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Table position, represented as cardinal direction. Seats are numbered 0
/// through 3 in clockwise order, starting from North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        })
    }
}

impl TryFrom<char> for Seat {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'N' | 'n' | '0' => Seat::North,
            'E' | 'e' | '1' => Seat::East,
            'S' | 's' | '2' => Seat::South,
            'W' | 'w' | '3' => Seat::West,
            _ => return Err(()),
        })
    }
}

impl Seat {
    /// All possible table positions, in clockwise order.
    pub fn all_seats() -> &'static [Seat; 4] {
        static SEATS: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];
        &SEATS
    }

    /// The seat's index, 0 through 3.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The team for this table position.
    pub fn team(self) -> Team {
        Team::from(self)
    }

    /// The partner's table position.
    pub fn partner(self) -> Seat {
        Seat::all_seats()[(self.index() + 2) % 4]
    }

    /// The next table position, in clockwise order.
    pub fn next(self) -> Seat {
        Seat::all_seats()[(self.index() + 1) % 4]
    }

    /// The next N table positions in clockwise order.
    pub fn next_n(mut self, n: usize) -> Vec<Seat> {
        let mut order = vec![];
        for _ in 0..n {
            self = self.next();
            order.push(self);
        }
        order
    }
}

/// A partnership of the two seats opposite one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// North & South (seats 0 and 2).
    A,
    /// East & West (seats 1 and 3).
    B,
}

impl From<Seat> for Team {
    fn from(value: Seat) -> Self {
        match value {
            Seat::North | Seat::South => Team::A,
            Seat::East | Seat::West => Team::B,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Team::A => "Team A",
            Team::B => "Team B",
        })
    }
}

impl Team {
    /// The two seats belonging to this team.
    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::A => [Seat::North, Seat::South],
            Team::B => [Seat::East, Seat::West],
        }
    }
}
