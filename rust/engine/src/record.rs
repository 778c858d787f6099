use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::player::PlayerAction;

/// How a finished round went for the player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    /// Classifies a terminal reward by its sign.
    pub fn from_reward(reward: f64) -> Self {
        if reward > 0.0 {
            Outcome::Win
        } else if reward < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Push
        }
    }
}

/// Complete record of one finished round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Player cards in deal order
    pub player: Vec<Rank>,
    /// Dealer cards in deal order; the first is the upcard
    pub dealer: Vec<Rank>,
    /// Actions the player took
    pub actions: Vec<PlayerAction>,
    pub player_value: u32,
    pub dealer_value: u32,
    pub reward: f64,
    pub outcome: Outcome,
    /// Running count after the last card of the round
    pub running_count: i32,
}

impl RoundRecord {
    /// Serialises the record as a single JSON line.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
