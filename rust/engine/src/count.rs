//! Hi-Lo card counting: running count, true count and the discrete bins the
//! observable state carries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shoe::DECK_SIZE;

/// Discretised true count exposed in the observable state.
///
/// The negative side has only two bins while the positive side has three:
/// everything at or below -3.5 collapses into `MinusFive`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CountBin {
    MinusFive = -5,
    MinusTwo = -2,
    Zero = 0,
    Two = 2,
    Three = 3,
    Five = 5,
}

impl CountBin {
    /// Maps a true count to its bin. Bands are checked from the top down and
    /// the first match wins.
    ///
    /// ```
    /// use qjack_engine::count::CountBin;
    ///
    /// assert_eq!(CountBin::from_true_count(1.0), CountBin::Zero);
    /// assert_eq!(CountBin::from_true_count(1.0001), CountBin::Two);
    /// assert_eq!(CountBin::from_true_count(-1.0), CountBin::MinusTwo);
    /// ```
    pub fn from_true_count(tc: f64) -> Self {
        if tc >= 5.0 {
            CountBin::Five
        } else if tc > 3.5 {
            CountBin::Three
        } else if tc > 1.0 {
            CountBin::Two
        } else if tc > -1.0 {
            CountBin::Zero
        } else if tc > -3.5 {
            CountBin::MinusTwo
        } else {
            CountBin::MinusFive
        }
    }

    pub fn value(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for CountBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Running count normalised by the decks left in the shoe. Fewer than one
/// deck remaining is treated as one deck.
pub fn true_count(running: i32, shoe_size: usize) -> f64 {
    let decks_remaining = (shoe_size as f64 / DECK_SIZE as f64).max(1.0);
    running as f64 / decks_remaining
}
