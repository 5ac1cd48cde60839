//! Error types for coinshell.

use std::io;

/// Errors produced by the coinshell framework and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum CoinshellError {
    #[error("config error: {0}")]
    Config(String),

    #[error("wallet error: {0}")]
    Wallet(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CoinshellError>;
