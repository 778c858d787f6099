//! # qjack CLI Library
//!
//! Command-line interface for the qjack Blackjack environment and Q-learning
//! trainer.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments and dispatches to a subcommand handler.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["qjack", "train", "--episodes", "100000", "--seed", "7"];
//! let code = qjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `train`: Train a Q-learning agent and evaluate it greedily
//! - `deal`: Play one round with the baseline agent
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, QjackCli};
use commands::{handle_cfg_command, handle_deal_command, handle_train_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Command-line arguments including the program name
/// * `out` - Output stream for program results (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version output go
/// to `out` and count as success.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["qjack", "deal", "--seed", "42"];
/// let code = qjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["train", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match QjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Train(args) => handle_train_command(&args, out),
        Commands::Deal {
            seed,
            counting,
            json,
        } => handle_deal_command(seed, counting, json, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_msg: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_msg)?;
    writeln!(err)?;
    writeln!(err, "qjack Blackjack Q-learning CLI")?;
    writeln!(err, "Usage: qjack <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: qjack --help")
}
