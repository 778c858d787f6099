//! Q-learning training and greedy evaluation loops.

use qjack_engine::engine::BlackjackEnv;
use qjack_engine::record::Outcome;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::policy::{GreedyAgent, epsilon_greedy};
use crate::qtable::QTable;
use crate::{AgentError, evaluate_agent};

/// Hyperparameters for one training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Training episodes (one episode = one round)
    pub episodes: u64,
    /// Greedy evaluation episodes after training
    pub eval_episodes: u64,
    /// Learning rate
    pub alpha: f64,
    /// Discount factor
    pub gamma: f64,
    pub epsilon_start: f64,
    pub epsilon_min: f64,
    /// Multiplicative decay applied after every episode
    pub epsilon_decay: f64,
    /// Report progress every this many episodes
    pub progress_every: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            episodes: 3_000_000,
            eval_episodes: 500_000,
            alpha: 0.1,
            gamma: 0.99,
            epsilon_start: 1.0,
            epsilon_min: 0.05,
            epsilon_decay: 0.999995,
            progress_every: 1_000_000,
        }
    }
}

impl TrainConfig {
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), AgentError> {
        let invalid = |msg: &str| Err(AgentError::InvalidConfig(msg.to_string()));
        if self.episodes == 0 {
            return invalid("episodes must be >= 1");
        }
        if self.eval_episodes == 0 {
            return invalid("eval_episodes must be >= 1");
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return invalid("alpha must be in (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return invalid("gamma must be in [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.epsilon_start) || !(0.0..=1.0).contains(&self.epsilon_min)
        {
            return invalid("epsilon values must be in [0, 1]");
        }
        if self.epsilon_min > self.epsilon_start {
            return invalid("epsilon_min must not exceed epsilon_start");
        }
        if !(self.epsilon_decay > 0.0 && self.epsilon_decay <= 1.0) {
            return invalid("epsilon_decay must be in (0, 1]");
        }
        if self.progress_every == 0 {
            return invalid("progress_every must be >= 1");
        }
        Ok(())
    }
}

/// Win/loss/push counts and summed reward over a batch of episodes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub total_reward: f64,
}

impl Tally {
    pub fn record(&mut self, reward: f64) {
        match Outcome::from_reward(reward) {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
        self.total_reward += reward;
    }

    pub fn games(&self) -> u64 {
        self.wins + self.losses + self.pushes
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    pub fn push_rate(&self) -> f64 {
        self.rate(self.pushes)
    }

    pub fn average_reward(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            self.total_reward / self.games() as f64
        }
    }

    fn rate(&self, n: u64) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            n as f64 / self.games() as f64
        }
    }
}

/// Snapshot handed to the progress callback during training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Episodes completed so far
    pub episode: u64,
    /// Exploration rate after this episode's decay
    pub epsilon: f64,
    /// Training wins divided by episodes so far
    pub win_rate: f64,
}

/// Tabular Q-learning agent with epsilon-greedy exploration.
///
/// # Example
///
/// ```rust
/// use qjack_ai::trainer::{QLearner, TrainConfig};
/// use qjack_engine::engine::BlackjackEnv;
/// use qjack_engine::rules::EnvConfig;
///
/// let cfg = TrainConfig { episodes: 200, eval_episodes: 100, ..TrainConfig::default() };
/// let mut env = BlackjackEnv::new(EnvConfig::default(), Some(1)).unwrap();
/// let mut learner = QLearner::new(cfg, 2).unwrap();
///
/// let training = learner.train(&mut env, |_| {}).unwrap();
/// assert_eq!(training.games(), 200);
///
/// let eval = learner.evaluate(&mut env, cfg.eval_episodes).unwrap();
/// assert_eq!(eval.games(), 100);
/// ```
#[derive(Debug)]
pub struct QLearner {
    table: QTable,
    config: TrainConfig,
    epsilon: f64,
    rng: ChaCha20Rng,
}

impl QLearner {
    pub fn new(config: TrainConfig, seed: u64) -> Result<Self, AgentError> {
        config.validate()?;
        Ok(Self {
            table: QTable::new(),
            config,
            epsilon: config.epsilon_start,
            rng: ChaCha20Rng::seed_from_u64(seed),
        })
    }

    /// Runs `config.episodes` episodes, updating the table after every
    /// transition and decaying epsilon after every episode.
    ///
    /// `on_progress` is called every `config.progress_every` episodes.
    pub fn train<F>(
        &mut self,
        env: &mut BlackjackEnv,
        mut on_progress: F,
    ) -> Result<Tally, AgentError>
    where
        F: FnMut(&Progress),
    {
        debug!(
            episodes = self.config.episodes,
            alpha = self.config.alpha,
            gamma = self.config.gamma,
            card_counting = env.config().card_counting,
            "training started"
        );
        let mut tally = Tally::default();

        for episode in 1..=self.config.episodes {
            let reward = self.run_episode(env)?;
            tally.record(reward);
            self.epsilon = (self.epsilon * self.config.epsilon_decay).max(self.config.epsilon_min);

            if episode % self.config.progress_every == 0 {
                let progress = Progress {
                    episode,
                    epsilon: self.epsilon,
                    win_rate: tally.wins as f64 / episode as f64,
                };
                info!(
                    episode,
                    epsilon = progress.epsilon,
                    win_rate = progress.win_rate,
                    states = self.table.len(),
                    "training progress"
                );
                on_progress(&progress);
            }
        }
        Ok(tally)
    }

    /// Plays one learning episode and returns its terminal reward.
    pub fn run_episode(&mut self, env: &mut BlackjackEnv) -> Result<f64, AgentError> {
        let mut state = env.reset()?;
        loop {
            let action = epsilon_greedy(&self.table, &state, self.epsilon, &mut self.rng);
            let t = env.step(action)?;
            self.table.update(
                state,
                action,
                t.reward,
                &t.state,
                t.done,
                self.config.alpha,
                self.config.gamma,
            );
            if t.done {
                return Ok(t.reward);
            }
            state = t.state;
        }
    }

    /// Plays `episodes` rounds greedily without touching the table.
    pub fn evaluate(&mut self, env: &mut BlackjackEnv, episodes: u64) -> Result<Tally, AgentError> {
        let mut agent = GreedyAgent::new(&self.table, &mut self.rng);
        let tally = evaluate_agent(env, &mut agent, episodes)?;
        info!(
            games = tally.games(),
            win_rate = tally.win_rate(),
            "evaluation complete"
        );
        Ok(tally)
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn into_table(self) -> QTable {
        self.table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }
}
