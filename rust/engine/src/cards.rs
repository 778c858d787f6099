use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the rank of a card from Two through Ace.
/// Suits play no part in Blackjack scoring, so a card is tracked by rank alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack, worth 10
    Jack,
    /// Queen, worth 10
    Queen,
    /// King, worth 10
    King,
    /// Ace, worth 11 or 1
    Ace,
}

impl Rank {
    /// Blackjack points for this rank with the ace counted high.
    ///
    /// ```
    /// use qjack_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Seven.points(), 7);
    /// assert_eq!(Rank::Queen.points(), 10);
    /// assert_eq!(Rank::Ace.points(), 11);
    /// ```
    pub fn points(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            r => r as u8,
        }
    }

    /// Hi-Lo weight: +1 for 2-6, -1 for tens and aces, 0 for 7-9.
    pub fn hi_lo(self) -> i32 {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            r => return write!(f, "{}", *r as u8),
        };
        f.write_str(s)
    }
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// One 52-card deck expressed as ranks: four copies of each of the 13 ranks.
pub fn single_deck() -> Vec<Rank> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for _ in 0..4 {
            v.push(r);
        }
    }
    v
}
