use thiserror::Error;

/// Everything that can go wrong at the game boundary. None of these are
/// fatal: callers show a message and keep the current session alive.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("leaderboard storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("leaderboard rows unreadable: {0}")]
    Csv(#[from] csv::Error),
}
