use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Insufficient cards: requested {requested}, remaining {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Illegal action by seat {seat}: {reason}")]
    IllegalAction { seat: usize, reason: String },
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}
