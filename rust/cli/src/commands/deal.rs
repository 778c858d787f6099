//! Deal command handler: plays one round with the baseline agent and shows
//! how it went.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;
use crate::ui;
use qjack_ai::baseline::BaselineAgent;
use qjack_ai::play_episode;
use qjack_engine::engine::BlackjackEnv;
use qjack_engine::record::Outcome;
use std::io::Write;

/// Handle the deal command.
///
/// Settings other than the seed and counting flag come from the resolved
/// configuration. With `json` the round is printed as one
/// [`qjack_engine::record::RoundRecord`] line.
pub fn handle_deal_command(
    seed: Option<u64>,
    counting: bool,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let env_cfg = cfg
        .env_config()
        .with_card_counting(counting || cfg.card_counting);

    let mut env = BlackjackEnv::new(env_cfg, Some(seed))?;
    let mut agent = BaselineAgent::new();
    play_episode(&mut env, &mut agent)?;
    let record = env
        .round_record()
        .ok_or_else(|| CliError::Engine("round did not finish".into()))?;

    if json {
        let line = record.to_json_line().map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    let actions: Vec<String> = record.actions.iter().map(|a| a.to_string()).collect();
    let outcome = match record.outcome {
        Outcome::Win => "win",
        Outcome::Loss => "loss",
        Outcome::Push => "push",
    };
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_hand(env.player_hand()))?;
    writeln!(out, "Dealer: {}", format_hand(env.dealer_hand()))?;
    writeln!(out, "Actions: {}", actions.join(" "))?;
    writeln!(
        out,
        "Result: {} ({})",
        outcome,
        ui::format_reward(record.reward)
    )?;
    writeln!(out, "Running count: {}", record.running_count)?;
    Ok(())
}
