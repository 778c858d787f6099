//! Tabular action-value store.

use std::collections::HashMap;

use qjack_engine::engine::State;
use qjack_engine::player::{PlayerAction, ACTIONS};

/// Q-values keyed by `(state, action)`. Unvisited pairs read as 0.0 and are
/// not inserted by reads, so the table only grows through updates.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<(State, PlayerAction), f64>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// ```
    /// use qjack_ai::qtable::QTable;
    /// use qjack_engine::count::CountBin;
    /// use qjack_engine::engine::State;
    /// use qjack_engine::player::PlayerAction;
    ///
    /// let table = QTable::new();
    /// let s = State { player_value: 15, dealer_upcard: 10, count_bin: CountBin::Zero };
    /// assert_eq!(table.get(&s, PlayerAction::Hit), 0.0);
    /// assert!(table.is_empty());
    /// ```
    pub fn get(&self, state: &State, action: PlayerAction) -> f64 {
        self.values
            .get(&(*state, action))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn set(&mut self, state: State, action: PlayerAction, value: f64) {
        self.values.insert((state, action), value);
    }

    /// Values for every action, in `ACTIONS` order.
    pub fn values(&self, state: &State) -> [f64; 2] {
        ACTIONS.map(|a| self.get(state, a))
    }

    pub fn max_value(&self, state: &State) -> f64 {
        self.values(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Highest-valued action; ties go to `Stand`. Deterministic, for
    /// reporting. Use [`crate::policy::epsilon_greedy`] to act.
    pub fn best_action(&self, state: &State) -> PlayerAction {
        let [stand, hit] = self.values(state);
        if hit > stand {
            PlayerAction::Hit
        } else {
            PlayerAction::Stand
        }
    }

    /// One-step Q-learning update. Returns the new value of `(state, action)`.
    ///
    /// The target is `reward` for a terminal transition and
    /// `reward + gamma * max_a Q(next_state, a)` otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        state: State,
        action: PlayerAction,
        reward: f64,
        next_state: &State,
        done: bool,
        alpha: f64,
        gamma: f64,
    ) -> f64 {
        let target = if done {
            reward
        } else {
            reward + gamma * self.max_value(next_state)
        };
        let entry = self.values.entry((state, action)).or_insert(0.0);
        *entry += alpha * (target - *entry);
        *entry
    }

    /// Whether any action has been updated in `state`.
    pub fn contains_state(&self, state: &State) -> bool {
        ACTIONS
            .iter()
            .any(|a| self.values.contains_key(&(*state, *a)))
    }

    /// Number of stored `(state, action)` pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(State, PlayerAction), &f64)> {
        self.values.iter()
    }
}
