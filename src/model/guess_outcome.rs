use super::{BragVerdict, SessionStatus};

/// How a guess compared against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    TooLow,
    TooHigh,
    Correct,
}

/// What one submitted guess did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub comparison: Comparison,
    pub status: SessionStatus,
    /// Present only on a winning guess.
    pub brag_verdict: Option<BragVerdict>,
    /// True when this guess ended the session.
    pub terminal: bool,
}
