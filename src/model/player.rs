use serde::{Deserialize, Serialize};

/// Avatar tags offered by the default setup screen.
pub const AVATARS: [&str; 6] = ["😎", "🔥", "🎯", "👑", "🐉", "🧠"];

/// Display identity of the person playing. The nickname is what they
/// typed; the avatar is a free-form tag prepended for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub nickname: String,
    pub avatar: String,
}

impl Player {
    pub fn new(nickname: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            avatar: avatar.into(),
        }
    }

    /// The string written to the leaderboard `Player` column.
    pub fn display_name(&self) -> String {
        if self.avatar.is_empty() {
            self.nickname.clone()
        } else {
            format!("{} {}", self.avatar, self.nickname)
        }
    }
}
