use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{single_deck, Rank};
use crate::errors::GameError;

/// Number of cards in one deck.
pub const DECK_SIZE: usize = 52;

/// The pool of undealt cards. Cards are drawn from the end of the sequence.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Rank>,
    num_decks: u8,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Builds a shuffled shoe of `num_decks` decks using a ChaCha20 generator
    /// seeded with `seed`.
    ///
    /// ```
    /// use qjack_engine::shoe::Shoe;
    ///
    /// let a = Shoe::new(1, 7);
    /// let b = Shoe::new(1, 7);
    /// assert_eq!(a.remaining(), 52);
    /// assert_eq!(a.cards(), b.cards());
    /// ```
    pub fn new(num_decks: u8, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(num_decks as usize * DECK_SIZE),
            num_decks,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        shoe.build();
        shoe
    }

    /// Builds an unshuffled shoe from `top_first`, where the first element is
    /// the next card drawn. Useful for scripted rounds.
    pub fn stacked(top_first: &[Rank]) -> Self {
        let mut cards = top_first.to_vec();
        cards.reverse();
        let decks = cards.len().div_ceil(DECK_SIZE).max(1);
        let num_decks = u8::try_from(decks).unwrap_or(u8::MAX);
        Self {
            cards,
            num_decks,
            rng: ChaCha20Rng::seed_from_u64(0),
        }
    }

    /// Discards whatever is left and refills with freshly shuffled decks.
    /// The generator stream continues from where it was.
    pub fn build(&mut self) {
        self.cards.clear();
        for _ in 0..self.num_decks {
            self.cards.extend(single_deck());
        }
        self.cards.shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Rank, GameError> {
        self.cards.pop().ok_or(GameError::EmptyShoe)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }

    /// Undealt cards, bottom first.
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_shoe_draws_in_given_order() {
        let mut shoe = Shoe::stacked(&[Rank::Ace, Rank::Two, Rank::King]);
        assert_eq!(shoe.draw(), Ok(Rank::Ace));
        assert_eq!(shoe.draw(), Ok(Rank::Two));
        assert_eq!(shoe.draw(), Ok(Rank::King));
        assert_eq!(shoe.draw(), Err(GameError::EmptyShoe));
    }

    #[test]
    fn stacked_deck_count_saturates() {
        assert_eq!(Shoe::stacked(&[Rank::Two; 53]).num_decks(), 2);
        let huge = vec![Rank::Two; DECK_SIZE * 300];
        assert_eq!(Shoe::stacked(&huge).num_decks(), u8::MAX);
    }

    #[test]
    fn rebuild_restores_full_size() {
        let mut shoe = Shoe::new(2, 3);
        for _ in 0..40 {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.remaining(), 64);
        shoe.build();
        assert_eq!(shoe.remaining(), 104);
    }
}
