//! Train command handler.
//!
//! Trains a Q-learning agent for the configured number of episodes, reports
//! the running training win rate at each progress interval, then evaluates
//! the learned table greedily.
//!
//! # Example Output
//!
//! ```text
//! Training 3000000 episodes (seed 42, card counting off, 1 deck)
//! Episode 1000000: win rate 0.381
//! ...
//!
//! EVALUATION RESULTS
//! Hands played: 500000
//! Win rate: 0.4263
//! ...
//! ```

use crate::cli::TrainArgs;
use crate::config::{self, Config};
use crate::error::CliError;
use crate::formatters::format_policy;
use crate::ui::format_rate;
use qjack_ai::baseline::BaselineAgent;
use qjack_ai::evaluate_agent;
use qjack_ai::trainer::{QLearner, Tally};
use qjack_engine::count::CountBin;
use qjack_engine::engine::BlackjackEnv;
use std::collections::HashSet;
use std::io::Write;

/// Handle the train command.
///
/// Command-line flags override the resolved configuration. The seed used is
/// printed in the header so a run can be repeated.
///
/// # Errors
///
/// `CliError::Config` when the configuration cannot be loaded,
/// `CliError::InvalidInput` when the flags produce invalid settings, and
/// `CliError::Engine` / `CliError::Io` for failures during the run.
pub fn handle_train_command(args: &TrainArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let mut cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    apply_overrides(&mut cfg, args);
    config::validate(&cfg).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let env_cfg = cfg.env_config();
    let train_cfg = cfg.train_config();

    let mut env = BlackjackEnv::new(env_cfg, Some(seed))?;
    let mut learner = QLearner::new(train_cfg, seed.wrapping_add(1))?;

    writeln!(
        out,
        "Training {} episodes (seed {}, card counting {}, {} deck{})",
        train_cfg.episodes,
        seed,
        if env_cfg.card_counting { "on" } else { "off" },
        env_cfg.num_decks,
        if env_cfg.num_decks == 1 { "" } else { "s" }
    )?;

    let mut progress_write = Ok(());
    learner.train(&mut env, |p| {
        if progress_write.is_ok() {
            progress_write = writeln!(out, "Episode {}: win rate {:.3}", p.episode, p.win_rate);
        }
    })?;
    progress_write?;

    let result = learner.evaluate(&mut env, train_cfg.eval_episodes)?;
    writeln!(out)?;
    writeln!(out, "EVALUATION RESULTS")?;
    write_tally(out, &result)?;
    writeln!(out, "States learned: {}", distinct_states(&learner))?;

    if args.policy {
        writeln!(out)?;
        write!(out, "{}", format_policy(learner.table(), CountBin::Zero))?;
    }

    if args.baseline {
        let mut baseline_env = BlackjackEnv::new(env_cfg, Some(seed))?;
        let mut agent = BaselineAgent::new();
        let baseline = evaluate_agent(&mut baseline_env, &mut agent, train_cfg.eval_episodes)?;
        writeln!(out)?;
        writeln!(out, "BASELINE RESULTS (stand on 17)")?;
        write_tally(out, &baseline)?;
    }
    Ok(())
}

fn apply_overrides(cfg: &mut Config, args: &TrainArgs) {
    if let Some(v) = args.episodes {
        cfg.episodes = v;
    }
    if let Some(v) = args.eval_episodes {
        cfg.eval_episodes = v;
    }
    if let Some(v) = args.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = args.decks {
        cfg.num_decks = v;
    }
    if let Some(v) = args.progress_every {
        cfg.progress_every = v;
    }
    if args.counting {
        cfg.card_counting = true;
    }
}

fn write_tally(out: &mut dyn Write, tally: &Tally) -> std::io::Result<()> {
    writeln!(out, "Hands played: {}", tally.games())?;
    writeln!(out, "Win rate: {}", format_rate(tally.win_rate()))?;
    writeln!(out, "Losses: {}", format_rate(tally.loss_rate()))?;
    writeln!(out, "Pushes: {}", format_rate(tally.push_rate()))?;
    writeln!(out, "Average reward: {}", format_rate(tally.average_reward()))
}

fn distinct_states(learner: &QLearner) -> usize {
    learner
        .table()
        .iter()
        .map(|((state, _), _)| *state)
        .collect::<HashSet<_>>()
        .len()
}
