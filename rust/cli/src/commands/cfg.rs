//! Configuration command handler.
//!
//! Prints every setting with the layer it came from (`default`, `file` or
//! `env`).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "card_counting": {
//!     "value": false,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails and
/// `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": { "value": config.seed, "source": sources.seed },
        "card_counting": { "value": config.card_counting, "source": sources.card_counting },
        "num_decks": { "value": config.num_decks, "source": sources.num_decks },
        "reshuffle_threshold": {
            "value": config.reshuffle_threshold,
            "source": sources.reshuffle_threshold,
        },
        "episodes": { "value": config.episodes, "source": sources.episodes },
        "eval_episodes": { "value": config.eval_episodes, "source": sources.eval_episodes },
        "alpha": { "value": config.alpha, "source": sources.alpha },
        "gamma": { "value": config.gamma, "source": sources.gamma },
        "epsilon_start": { "value": config.epsilon_start, "source": sources.epsilon_start },
        "epsilon_min": { "value": config.epsilon_min, "source": sources.epsilon_min },
        "epsilon_decay": { "value": config.epsilon_decay, "source": sources.epsilon_decay },
        "progress_every": { "value": config.progress_every, "source": sources.progress_every },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_every_setting() {
        unsafe {
            std::env::remove_var("QJACK_CONFIG");
            std::env::remove_var("QJACK_SEED");
            std::env::remove_var("QJACK_CARD_COUNTING");
            std::env::remove_var("QJACK_DECKS");
            std::env::remove_var("QJACK_EPISODES");
            std::env::remove_var("QJACK_EVAL_EPISODES");
        }
        let mut out = Vec::new();
        handle_cfg_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        for key in [
            "seed",
            "card_counting",
            "num_decks",
            "reshuffle_threshold",
            "episodes",
            "eval_episodes",
            "alpha",
            "gamma",
            "epsilon_start",
            "epsilon_min",
            "epsilon_decay",
            "progress_every",
        ] {
            assert_eq!(json[key]["source"].as_str(), Some("default"), "{}", key);
        }
        assert!(json["seed"]["value"].is_null());
        assert_eq!(json["episodes"]["value"].as_u64(), Some(3_000_000));
        assert!(output.contains("\n  "), "output should be pretty-printed");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_invalid_environment() {
        unsafe {
            std::env::set_var("QJACK_DECKS", "none");
        }
        let mut out = Vec::new();
        let res = handle_cfg_command(&mut out);
        unsafe {
            std::env::remove_var("QJACK_DECKS");
        }
        assert!(matches!(res, Err(CliError::Config(_))));
        assert!(out.is_empty());
    }
}
