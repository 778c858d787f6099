//! Command handler modules for the qjack CLI.
//!
//! Each subcommand lives in its own file with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in by [`crate::run`]
//! - Errors propagated via `CliError`

mod cfg;
mod deal;
mod train;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use train::handle_train_command;
