//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "qjack",
    version,
    about = "Blackjack environment with a tabular Q-learning trainer"
)]
pub struct QjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a Q-learning agent, then evaluate it greedily
    Train(TrainArgs),
    /// Play a single round with the baseline agent and show it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Include the binned true count in the state
        #[arg(long)]
        counting: bool,
        /// Print the round record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Flags for `qjack train`. Anything left unset falls back to the resolved
/// configuration.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TrainArgs {
    #[arg(long)]
    pub episodes: Option<u64>,
    #[arg(long)]
    pub eval_episodes: Option<u64>,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Include the binned true count in the state
    #[arg(long)]
    pub counting: bool,
    #[arg(long)]
    pub decks: Option<u8>,
    #[arg(long)]
    pub progress_every: Option<u64>,
    /// Print the learned hit/stand grid after evaluation
    #[arg(long)]
    pub policy: bool,
    /// Also evaluate the stand-on-17 baseline agent
    #[arg(long)]
    pub baseline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        QjackCli::command().debug_assert();
    }

    #[test]
    fn train_flags_parse() {
        let cli = QjackCli::try_parse_from([
            "qjack",
            "train",
            "--episodes",
            "500",
            "--eval-episodes",
            "200",
            "--seed",
            "3",
            "--counting",
            "--decks",
            "2",
            "--policy",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Train(args) => {
                assert_eq!(args.episodes, Some(500));
                assert_eq!(args.eval_episodes, Some(200));
                assert_eq!(args.seed, Some(3));
                assert!(args.counting);
                assert_eq!(args.decks, Some(2));
                assert!(args.policy);
                assert!(!args.baseline);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn deal_defaults() {
        let cli = QjackCli::try_parse_from(["qjack", "deal"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Commands::Deal {
                seed: None,
                counting: false,
                json: false
            }
        ));
    }
}
