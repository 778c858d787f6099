use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot draw from an empty shoe")]
    EmptyShoe,
    #[error("Unsupported action: {0} (expected 0 = stand or 1 = hit)")]
    UnsupportedAction(u8),
    #[error("No round in progress; call reset first")]
    NoRoundInProgress,
    #[error("Round already complete")]
    RoundAlreadyComplete,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
