//! # qjack-ai: Learning Agents for Blackjack
//!
//! Tabular Q-learning with epsilon-greedy exploration on top of
//! [`qjack_engine`], plus a fixed baseline strategy for comparison.
//!
//! ## Core Components
//!
//! - [`Agent`] - Trait for anything that picks hit or stand from a state
//! - [`qtable`] - Action-value table with default-zero reads
//! - [`policy`] - Epsilon-greedy selection and the greedy agent
//! - [`trainer`] - Training and evaluation loops
//! - [`baseline`] - Dealer-mimicking baseline agent
//!
//! ## Quick Start
//!
//! ```rust
//! use qjack_ai::trainer::{QLearner, TrainConfig};
//! use qjack_engine::engine::BlackjackEnv;
//! use qjack_engine::rules::EnvConfig;
//!
//! let cfg = TrainConfig { episodes: 1_000, eval_episodes: 500, ..TrainConfig::default() };
//! let mut env = BlackjackEnv::new(EnvConfig::default(), Some(42)).unwrap();
//! let mut learner = QLearner::new(cfg, 43).unwrap();
//! learner.train(&mut env, |p| println!("{:.3}", p.win_rate)).unwrap();
//!
//! let result = learner.evaluate(&mut env, cfg.eval_episodes).unwrap();
//! println!("Win rate: {}", result.win_rate());
//! ```

use qjack_engine::engine::{BlackjackEnv, State};
use qjack_engine::errors::GameError;
use qjack_engine::player::PlayerAction;
use thiserror::Error;

pub mod baseline;
pub mod policy;
pub mod qtable;
pub mod trainer;

use trainer::Tally;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Invalid training configuration: {0}")]
    InvalidConfig(String),
}

/// Interface for Blackjack decision makers.
///
/// # Example Implementation
///
/// ```rust
/// use qjack_ai::Agent;
/// use qjack_engine::engine::State;
/// use qjack_engine::player::PlayerAction;
///
/// struct AlwaysStand;
///
/// impl Agent for AlwaysStand {
///     fn select_action(&mut self, _state: &State) -> PlayerAction {
///         PlayerAction::Stand
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStand"
///     }
/// }
/// ```
pub trait Agent {
    /// Chooses the next action from the observable state.
    fn select_action(&mut self, state: &State) -> PlayerAction;

    /// Short identifier used in reports.
    fn name(&self) -> &str;
}

/// Plays one round to completion and returns the terminal reward.
pub fn play_episode<A: Agent + ?Sized>(
    env: &mut BlackjackEnv,
    agent: &mut A,
) -> Result<f64, GameError> {
    let mut state = env.reset()?;
    loop {
        let t = env.step(agent.select_action(&state))?;
        if t.done {
            return Ok(t.reward);
        }
        state = t.state;
    }
}

/// Plays `episodes` rounds with `agent` and tallies the outcomes.
///
/// # Errors
///
/// [`AgentError::InvalidConfig`] when `episodes` is zero; otherwise any
/// environment error.
pub fn evaluate_agent<A: Agent + ?Sized>(
    env: &mut BlackjackEnv,
    agent: &mut A,
    episodes: u64,
) -> Result<Tally, AgentError> {
    if episodes == 0 {
        return Err(AgentError::InvalidConfig(
            "evaluation needs at least one episode".to_string(),
        ));
    }
    let mut tally = Tally::default();
    for _ in 0..episodes {
        tally.record(play_episode(env, agent)?);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseline::BaselineAgent;
    use qjack_engine::rules::EnvConfig;

    #[test]
    fn play_episode_finishes_the_round() {
        let mut env = BlackjackEnv::new(EnvConfig::default(), Some(8)).unwrap();
        let mut agent = BaselineAgent::new();
        let reward = play_episode(&mut env, &mut agent).unwrap();
        assert!([-1.0, 0.0, 1.0].contains(&reward));
        assert!(env.round_record().is_some());
    }

    #[test]
    fn evaluate_agent_counts_every_episode() {
        let mut env = BlackjackEnv::new(EnvConfig::default(), Some(9)).unwrap();
        let mut agent = BaselineAgent::new();
        let tally = evaluate_agent(&mut env, &mut agent, 250).unwrap();
        assert_eq!(tally.games(), 250);
    }

    #[test]
    fn evaluate_agent_rejects_zero_episodes() {
        let mut env = BlackjackEnv::new(EnvConfig::default(), Some(10)).unwrap();
        let mut agent = BaselineAgent::new();
        assert!(matches!(
            evaluate_agent(&mut env, &mut agent, 0),
            Err(AgentError::InvalidConfig(_))
        ));
    }
}
