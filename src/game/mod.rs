mod engine;
mod game_session;
pub mod leaderboard;
pub mod settings;

pub use engine::{GameEngine, GameEngineEvent, SessionSummary};
pub use game_session::GameSession;
pub use leaderboard::{rank, LeaderboardStore, LEADERBOARD_HEADERS};
pub use settings::Settings;
