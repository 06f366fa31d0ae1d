//! Error type shared by the generators and the command registry.

use thiserror::Error;

/// Errors that can occur while generating identifiers or dispatching commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniqError {
    #[error("entropy unavailable: could not read {requested} random bytes: {reason}")]
    EntropyUnavailable { requested: usize, reason: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
