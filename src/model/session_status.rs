use serde::{Deserialize, Serialize};

/// Lifecycle of one session. Transitions only away from `InProgress`,
/// never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    InProgress,
    Won,
    TimedOut,
    Failed,
}

impl SessionStatus {
    /// Terminal sessions accept no further guesses.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}
