mod brag;
mod difficulty;
mod guess_outcome;
mod leaderboard_record;
mod player;
mod session_clock;
mod session_status;

pub use brag::{Brag, BragVerdict};
pub use difficulty::{Difficulty, DifficultyProfile, ProfileSet};
pub use guess_outcome::{Comparison, GuessOutcome};
pub use leaderboard_record::{
    GameOutcome, LeaderboardRecord, RankedRow, ATTEMPT_RANK_SENTINEL, TIME_RANK_SENTINEL,
};
pub use player::{Player, AVATARS};
pub use session_clock::SessionClock;
pub use session_status::SessionStatus;
