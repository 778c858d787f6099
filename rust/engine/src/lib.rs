//! # qjack-engine: Blackjack Environment Core
//!
//! A single-player Blackjack environment exposing a reset/step interface for
//! reinforcement learning. The player may only hit or stand; the dealer draws
//! to 17. An optional Hi-Lo card count can be folded into the observable state.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card ranks, blackjack points and Hi-Lo weights
//! - [`shoe`] - Multi-deck shoe with a seeded ChaCha20 shuffle
//! - [`hand`] - Hand value with soft-ace handling
//! - [`count`] - True count and count bins
//! - [`engine`] - The environment state machine
//! - [`player`] - Player actions
//! - [`rules`] - Table configuration and dealer rule
//! - [`record`] - Round outcomes and serialisable round records
//! - [`errors`] - Error types for environment operations
//!
//! ## Quick Start
//!
//! ```rust
//! use qjack_engine::engine::BlackjackEnv;
//! use qjack_engine::player::PlayerAction;
//! use qjack_engine::rules::EnvConfig;
//!
//! let mut env = BlackjackEnv::new(EnvConfig::default(), Some(7)).unwrap();
//! let mut state = env.reset().unwrap();
//! loop {
//!     let action = if state.player_value < 17 { PlayerAction::Hit } else { PlayerAction::Stand };
//!     let t = env.step(action).unwrap();
//!     state = t.state;
//!     if t.done {
//!         println!("reward: {}", t.reward);
//!         break;
//!     }
//! }
//! ```
//!
//! ## Card Counting
//!
//! Counting is a per-environment setting, so counting and non-counting
//! environments can run side by side:
//!
//! ```rust
//! use qjack_engine::count::CountBin;
//! use qjack_engine::engine::BlackjackEnv;
//! use qjack_engine::rules::EnvConfig;
//!
//! let mut plain = BlackjackEnv::new(EnvConfig::default(), Some(1)).unwrap();
//! let mut counting =
//!     BlackjackEnv::new(EnvConfig::default().with_card_counting(true), Some(1)).unwrap();
//! assert_eq!(plain.reset().unwrap().count_bin, CountBin::Zero);
//! let _ = counting.reset().unwrap();
//! ```

pub mod cards;
pub mod count;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod player;
pub mod record;
pub mod rules;
pub mod shoe;
