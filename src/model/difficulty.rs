use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl Difficulty {
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn index(&self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn from_index(index: usize) -> Difficulty {
        match index {
            0 => Difficulty::Easy,
            1 => Difficulty::Medium,
            2 => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Parameters of one difficulty: the secret is drawn from
/// `1..=max_number`, and each attempt must land within `time_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub max_number: u32,
    pub allowed_attempts: u32,
    pub time_limit: Duration,
}

/// Which lookup table resolves a [`Difficulty`] to its profile. Ultimate
/// is the harder variant set; both tables are fixed for compatibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProfileSet {
    Standard,
    Ultimate,
}

impl Default for ProfileSet {
    fn default() -> Self {
        ProfileSet::Standard
    }
}

impl ProfileSet {
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        let (max_number, allowed_attempts, time_limit_secs) = match (self, difficulty) {
            (ProfileSet::Standard, Difficulty::Easy) => (20, 6, 20),
            (ProfileSet::Standard, Difficulty::Medium) => (50, 4, 15),
            (ProfileSet::Standard, Difficulty::Hard) => (100, 3, 10),
            (ProfileSet::Ultimate, Difficulty::Easy) => (20, 3, 15),
            (ProfileSet::Ultimate, Difficulty::Medium) => (50, 2, 10),
            (ProfileSet::Ultimate, Difficulty::Hard) => (100, 1, 5),
        };
        DifficultyProfile {
            max_number,
            allowed_attempts,
            time_limit: Duration::from_secs(time_limit_secs),
        }
    }
}
