use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// Cards held by one side for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(4),
        }
    }

    pub fn from_cards(cards: &[Rank]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    pub fn push(&mut self, card: Rank) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best total for the hand. Aces start at 11 and are demoted to 1 one at a
    /// time while the total is over 21.
    ///
    /// ```
    /// use qjack_engine::cards::Rank;
    /// use qjack_engine::hand::Hand;
    ///
    /// let hand = Hand::from_cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    /// assert_eq!(hand.value(), 21);
    /// ```
    pub fn value(&self) -> u32 {
        self.evaluate().0
    }

    /// True when an ace is still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.evaluate().1 > 0
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    fn evaluate(&self) -> (u32, u32) {
        let mut total: u32 = 0;
        let mut soft_aces: u32 = 0;
        for &c in &self.cards {
            total += u32::from(c.points());
            if c.is_ace() {
                soft_aces += 1;
            }
        }
        while total > BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        (total, soft_aces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_flag_follows_ace_demotion() {
        assert!(Hand::from_cards(&[Rank::Ace, Rank::Six]).is_soft());
        assert!(!Hand::from_cards(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
        assert!(Hand::from_cards(&[Rank::Ace, Rank::Ace]).is_soft());
    }

    #[test]
    fn long_hands_are_not_capped() {
        assert_eq!(Hand::from_cards(&[Rank::Ace; 26]).value(), 26);
        assert_eq!(Hand::from_cards(&[Rank::Ten; 30]).value(), 300);
        assert!(Hand::from_cards(&[Rank::Ten; 30]).is_bust());
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(Hand::new().value(), 0);
        assert!(!Hand::new().is_bust());
    }
}
