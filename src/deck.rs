//! A deck of cards.

use std::iter::FromIterator;

use rand::seq::SliceRandom;
use rand::Rng;

/// A deck of cards.
#[derive(Debug, Clone)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> FromIterator<C> for Deck<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        let cards = iter.into_iter().collect();
        Self { cards }
    }
}

impl<C> Deck<C>
where
    Deck<C>: Default,
{
    /// A full deck, shuffled with the given source of randomness.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }
}

impl<C> Deck<C> {
    /// The number of cards remaining in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if every card has been taken.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes `n` cards from the top of the deck.
    pub fn take(&mut self, n: usize) -> Vec<C> {
        let idx = self.cards.len().saturating_sub(n);
        self.cards.split_off(idx)
    }

    /// Splits the top of the deck into `hands` piles of `size` cards each.
    pub fn deal(&mut self, hands: usize, size: usize) -> Vec<Vec<C>> {
        (0..hands).map(|_| self.take(size)).collect()
    }
}
