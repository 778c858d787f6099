//! Baseline agent for comparison against learned policies.
//!
//! Plays the dealer's own rule: hit below 17, stand otherwise. It ignores the
//! dealer upcard and the count.

use crate::Agent;
use qjack_engine::engine::State;
use qjack_engine::player::PlayerAction;
use qjack_engine::rules::DEALER_STANDS_ON;

/// Fixed-threshold strategy that mirrors the dealer.
///
/// # Example
///
/// ```rust
/// use qjack_ai::baseline::BaselineAgent;
/// use qjack_ai::Agent;
/// use qjack_engine::count::CountBin;
/// use qjack_engine::engine::State;
/// use qjack_engine::player::PlayerAction;
///
/// let mut agent = BaselineAgent::new();
/// let s = State { player_value: 16, dealer_upcard: 10, count_bin: CountBin::Zero };
/// assert_eq!(agent.select_action(&s), PlayerAction::Hit);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAgent {
    stand_on: u8,
}

impl BaselineAgent {
    pub fn new() -> Self {
        Self {
            stand_on: DEALER_STANDS_ON,
        }
    }

    /// Stands once the hand reaches `stand_on`.
    pub fn with_threshold(stand_on: u8) -> Self {
        Self { stand_on }
    }
}

impl Default for BaselineAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for BaselineAgent {
    fn select_action(&mut self, state: &State) -> PlayerAction {
        if state.player_value < self.stand_on {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }

    fn name(&self) -> &str {
        "Baseline"
    }
}
