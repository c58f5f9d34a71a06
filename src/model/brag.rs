use serde::{Deserialize, Serialize};

/// The player's pre-game claim: "I'll win within N attempts". Purely
/// cosmetic; never alters game mechanics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Brag {
    One,
    Two,
    Three,
}

impl Default for Brag {
    fn default() -> Self {
        Brag::One
    }
}

impl Brag {
    pub fn all() -> Vec<Brag> {
        vec![Brag::One, Brag::Two, Brag::Three]
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Brag::One => 1,
            Brag::Two => 2,
            Brag::Three => 3,
        }
    }

    pub fn from_index(index: usize) -> Brag {
        match index {
            0 => Brag::One,
            1 => Brag::Two,
            2 => Brag::Three,
            _ => Brag::One,
        }
    }

    /// Compared post-hoc against the attempts actually used to win.
    pub fn verdict(&self, attempts_used: u32) -> BragVerdict {
        if attempts_used <= self.attempts() {
            BragVerdict::Honored
        } else {
            BragVerdict::Busted
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BragVerdict {
    Honored,
    Busted,
}
