use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::shoe::DECK_SIZE;

/// Dealer draws while below this total and stands on every 17, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Cards dealt by every reset before the player acts.
pub const INITIAL_DEAL: usize = 4;

pub const DEFAULT_NUM_DECKS: u8 = 1;
pub const DEFAULT_RESHUFFLE_THRESHOLD: usize = 11;

/// Table settings for one environment instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Decks per shoe
    pub num_decks: u8,
    /// The shoe is rebuilt at the next reset once fewer cards than this remain
    pub reshuffle_threshold: usize,
    /// Include the binned true count in the observable state
    pub card_counting: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_decks: DEFAULT_NUM_DECKS,
            reshuffle_threshold: DEFAULT_RESHUFFLE_THRESHOLD,
            card_counting: false,
        }
    }
}

impl EnvConfig {
    pub fn with_card_counting(mut self, enabled: bool) -> Self {
        self.card_counting = enabled;
        self
    }

    pub fn full_shoe_size(&self) -> usize {
        self.num_decks as usize * DECK_SIZE
    }

    /// Rejects settings under which the environment could not deal a round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] when there are no decks, the
    /// threshold is below [`INITIAL_DEAL`], or the threshold exceeds a full
    /// shoe.
    ///
    /// ```
    /// use qjack_engine::rules::EnvConfig;
    ///
    /// assert!(EnvConfig::default().validate().is_ok());
    ///
    /// let cfg = EnvConfig { num_decks: 1, reshuffle_threshold: 60, card_counting: false };
    /// assert!(cfg.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_decks == 0 {
            return Err(GameError::InvalidConfig(
                "num_decks must be >= 1".to_string(),
            ));
        }
        if self.reshuffle_threshold < INITIAL_DEAL {
            return Err(GameError::InvalidConfig(format!(
                "reshuffle_threshold must be >= {} (cards in the initial deal)",
                INITIAL_DEAL
            )));
        }
        if self.reshuffle_threshold > self.full_shoe_size() {
            return Err(GameError::InvalidConfig(format!(
                "reshuffle_threshold {} exceeds a full shoe of {} cards",
                self.reshuffle_threshold,
                self.full_shoe_size()
            )));
        }
        Ok(())
    }
}
