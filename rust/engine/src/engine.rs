use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Rank;
use crate::count::{true_count, CountBin};
use crate::errors::GameError;
use crate::hand::{Hand, BLACKJACK};
use crate::player::PlayerAction;
use crate::record::{Outcome, RoundRecord};
use crate::rules::{EnvConfig, DEALER_STANDS_ON};
use crate::shoe::Shoe;

/// Everything an agent is allowed to see: its own total, the dealer's
/// face-up card and the binned count.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct State {
    pub player_value: u8,
    pub dealer_upcard: u8,
    pub count_bin: CountBin,
}

/// Result of a single `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: State,
    pub reward: f64,
    pub done: bool,
}

/// Where the environment is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress: before the first deal, or after a round was
    /// abandoned because the shoe ran out
    AwaitingReset,
    /// Player is deciding
    PlayerTurn,
    /// Player stood; dealer is drawing
    DealerTurn,
    /// Round finished; only `reset` is accepted
    RoundOver,
}

/// Single-player Blackjack environment with a reset/step interface.
///
/// # Examples
///
/// ```
/// use qjack_engine::engine::BlackjackEnv;
/// use qjack_engine::player::PlayerAction;
/// use qjack_engine::rules::EnvConfig;
///
/// let mut env = BlackjackEnv::new(EnvConfig::default(), Some(42)).expect("valid config");
/// let state = env.reset().expect("deal");
/// assert_eq!(env.player_hand().len(), 2);
/// assert!(state.dealer_upcard >= 2 && state.dealer_upcard <= 11);
///
/// let t = env.step(PlayerAction::Stand).expect("stand");
/// assert!(t.done);
/// ```
#[derive(Debug)]
pub struct BlackjackEnv {
    config: EnvConfig,
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    running_count: i32,
    phase: Phase,
    actions: Vec<PlayerAction>,
    last_reward: Option<f64>,
}

impl BlackjackEnv {
    /// Creates an environment with a freshly shuffled shoe. A missing seed is
    /// replaced with a random one.
    pub fn new(config: EnvConfig, seed: Option<u64>) -> Result<Self, GameError> {
        config.validate()?;
        let seed = seed.unwrap_or_else(rand::random);
        let shoe = Shoe::new(config.num_decks, seed);
        Ok(Self::assemble(config, shoe))
    }

    /// Creates an environment around a prepared shoe.
    pub fn with_shoe(config: EnvConfig, shoe: Shoe) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::assemble(config, shoe))
    }

    fn assemble(config: EnvConfig, shoe: Shoe) -> Self {
        Self {
            config,
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            running_count: 0,
            phase: Phase::AwaitingReset,
            actions: Vec::new(),
            last_reward: None,
        }
    }

    /// Starts a new round and returns the initial state.
    ///
    /// The shoe is rebuilt first if it has fallen below the reshuffle
    /// threshold, which also zeroes the running count. Cards are dealt
    /// player, dealer, player, dealer. A two-card 21 is not settled here.
    pub fn reset(&mut self) -> Result<State, GameError> {
        if self.shoe.remaining() < self.config.reshuffle_threshold {
            debug!(
                remaining = self.shoe.remaining(),
                threshold = self.config.reshuffle_threshold,
                "reshuffling shoe"
            );
            self.shoe.build();
            self.running_count = 0;
        }

        self.phase = Phase::AwaitingReset;
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.actions.clear();
        self.last_reward = None;

        for _ in 0..2 {
            let c = self.deal()?;
            self.player.push(c);
            let c = self.deal()?;
            self.dealer.push(c);
        }

        self.phase = Phase::PlayerTurn;
        Ok(self.state())
    }

    /// Applies the player's action.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoRoundInProgress`] before the first `reset`
    /// - [`GameError::RoundAlreadyComplete`] once the round is over
    /// - [`GameError::EmptyShoe`] if the shoe runs out mid-round; the round is
    ///   abandoned and the next `step` reports [`GameError::NoRoundInProgress`]
    pub fn step(&mut self, action: PlayerAction) -> Result<Transition, GameError> {
        match self.phase {
            Phase::PlayerTurn => {}
            Phase::AwaitingReset => return Err(GameError::NoRoundInProgress),
            Phase::DealerTurn | Phase::RoundOver => {
                return Err(GameError::RoundAlreadyComplete)
            }
        }
        self.actions.push(action);

        match action {
            PlayerAction::Hit => {
                let c = self.deal_in_round()?;
                self.player.push(c);
                if self.player.value() > BLACKJACK {
                    return Ok(self.finish(-1.0));
                }
                Ok(Transition {
                    state: self.state(),
                    reward: 0.0,
                    done: false,
                })
            }
            PlayerAction::Stand => {
                self.phase = Phase::DealerTurn;
                while self.dealer.value() < u32::from(DEALER_STANDS_ON) {
                    let c = self.deal_in_round()?;
                    self.dealer.push(c);
                }

                let p = self.player.value();
                let d = self.dealer.value();
                let reward = if d > BLACKJACK || p > d {
                    1.0
                } else if p < d {
                    -1.0
                } else {
                    0.0
                };
                Ok(self.finish(reward))
            }
        }
    }

    /// Applies an action given by its raw index (0 = stand, 1 = hit).
    pub fn step_index(&mut self, index: usize) -> Result<Transition, GameError> {
        let action = PlayerAction::from_index(index)?;
        self.step(action)
    }

    fn finish(&mut self, reward: f64) -> Transition {
        self.phase = Phase::RoundOver;
        self.last_reward = Some(reward);
        Transition {
            state: self.state(),
            reward,
            done: true,
        }
    }

    fn deal_in_round(&mut self) -> Result<Rank, GameError> {
        match self.deal() {
            Ok(c) => Ok(c),
            Err(e) => {
                self.phase = Phase::AwaitingReset;
                Err(e)
            }
        }
    }

    fn deal(&mut self) -> Result<Rank, GameError> {
        let c = self.shoe.draw()?;
        self.running_count += c.hi_lo();
        Ok(c)
    }

    /// Observable state for the current hands. The count bin is pinned to
    /// zero unless card counting is enabled.
    pub fn state(&self) -> State {
        let tc = if self.config.card_counting {
            self.true_count()
        } else {
            0.0
        };
        State {
            player_value: u8::try_from(self.player.value()).unwrap_or(u8::MAX),
            dealer_upcard: self.dealer_upcard_value(),
            count_bin: CountBin::from_true_count(tc),
        }
    }

    /// Points of the dealer's first card, ace counted as 11. Zero before the
    /// first deal.
    fn dealer_upcard_value(&self) -> u8 {
        self.dealer.cards().first().map_or(0, |c| c.points())
    }

    pub fn true_count(&self) -> f64 {
        true_count(self.running_count, self.shoe.remaining())
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Summary of the round just played, or `None` while it is still open.
    pub fn round_record(&self) -> Option<RoundRecord> {
        let reward = self.last_reward?;
        Some(RoundRecord {
            player: self.player.cards().to_vec(),
            dealer: self.dealer.cards().to_vec(),
            actions: self.actions.clone(),
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            reward,
            outcome: Outcome::from_reward(reward),
            running_count: self.running_count,
        })
    }
}
