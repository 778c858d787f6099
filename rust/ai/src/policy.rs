//! Action selection over a [`QTable`].

use std::cmp::Ordering;

use qjack_engine::engine::State;
use qjack_engine::player::{PlayerAction, ACTIONS};
use rand::Rng;

use crate::qtable::QTable;
use crate::Agent;

/// Epsilon-greedy selection.
///
/// With probability `epsilon` a uniformly random action is returned.
/// Otherwise the highest-valued action is returned, with ties broken
/// uniformly at random so unexplored states do not always start the same way.
///
/// ```
/// use qjack_ai::policy::epsilon_greedy;
/// use qjack_ai::qtable::QTable;
/// use qjack_engine::count::CountBin;
/// use qjack_engine::engine::State;
/// use qjack_engine::player::PlayerAction;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
/// let state = State { player_value: 19, dealer_upcard: 7, count_bin: CountBin::Zero };
/// let mut table = QTable::new();
/// table.set(state, PlayerAction::Stand, 0.4);
/// assert_eq!(epsilon_greedy(&table, &state, 0.0, &mut rng), PlayerAction::Stand);
/// ```
pub fn epsilon_greedy<R: Rng + ?Sized>(
    table: &QTable,
    state: &State,
    epsilon: f64,
    rng: &mut R,
) -> PlayerAction {
    if rng.random::<f64>() < epsilon {
        return random_action(rng);
    }
    let [stand, hit] = table.values(state);
    match stand.partial_cmp(&hit) {
        Some(Ordering::Greater) => PlayerAction::Stand,
        Some(Ordering::Less) => PlayerAction::Hit,
        _ => random_action(rng),
    }
}

fn random_action<R: Rng + ?Sized>(rng: &mut R) -> PlayerAction {
    ACTIONS[rng.random_range(0..ACTIONS.len())]
}

/// Plays a fixed table greedily (epsilon 0, random tie-break).
#[derive(Debug)]
pub struct GreedyAgent<'a, R> {
    table: &'a QTable,
    rng: R,
}

impl<'a, R: Rng> GreedyAgent<'a, R> {
    pub fn new(table: &'a QTable, rng: R) -> Self {
        Self { table, rng }
    }
}

impl<R: Rng> Agent for GreedyAgent<'_, R> {
    fn select_action(&mut self, state: &State) -> PlayerAction {
        epsilon_greedy(self.table, state, 0.0, &mut self.rng)
    }

    fn name(&self) -> &str {
        "GreedyQ"
    }
}
