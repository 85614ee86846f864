//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] prints the
//! error as `Error: <message>` and exits with code 2.

use tablestakes_ai::UnknownAi;
use tablestakes_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Engine error: {0}")]
    Engine(#[from] GameError),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<UnknownAi> for CliError {
    fn from(e: UnknownAi) -> Self {
        CliError::InvalidInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::Configuration("blinds must be positive".into()).into();
        assert_eq!(
            e.to_string(),
            "Engine error: Configuration error: blinds must be positive"
        );
    }

    #[test]
    fn unknown_ai_is_invalid_input() {
        let e: CliError = UnknownAi("shark".into()).into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(e.to_string().contains("shark"));
    }
}
