use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// The two moves available to the player. Numeric values match the index
/// used by `PlayerAction::from_index` and `TryFrom<u8>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take no more cards; the dealer plays out.
    Stand = 0,
    /// Take one more card.
    Hit = 1,
}

/// Every legal action, in index order.
pub const ACTIONS: [PlayerAction; 2] = [PlayerAction::Stand, PlayerAction::Hit];

impl PlayerAction {
    /// ```
    /// use qjack_engine::player::PlayerAction;
    /// use qjack_engine::errors::GameError;
    ///
    /// assert_eq!(PlayerAction::from_index(1), Ok(PlayerAction::Hit));
    /// assert_eq!(PlayerAction::from_index(2), Err(GameError::UnsupportedAction(2)));
    /// ```
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        let raw = u8::try_from(index).unwrap_or(u8::MAX);
        Self::try_from(raw)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for PlayerAction {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PlayerAction::Stand),
            1 => Ok(PlayerAction::Hit),
            other => Err(GameError::UnsupportedAction(other)),
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Stand => f.write_str("stand"),
            PlayerAction::Hit => f.write_str("hit"),
        }
    }
}
