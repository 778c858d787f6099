//! Small helpers for consistent terminal output across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Formats a rate as a fixed four-decimal string.
pub fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

/// Formats a reward with an explicit sign, e.g. `+1`, `-1`, `0`.
pub fn format_reward(reward: f64) -> String {
    if reward > 0.0 {
        format!("+{}", reward)
    } else {
        format!("{}", reward)
    }
}
