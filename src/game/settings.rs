use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ProfileSet;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub profile_set: ProfileSet,

    #[serde(default = "default_avatar")]
    pub default_avatar: String,

    #[serde(skip)]
    data_dir: PathBuf,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_avatar() -> String {
    "🎯".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            profile_set: ProfileSet::default(),
            default_avatar: default_avatar(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Loads settings from `settings.json` under `data_dir`, writing the
    /// defaults there on first run or unreadable contents.
    pub fn load(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let path = Self::settings_path(&data_dir);
        if let Ok(contents) = fs::read_to_string(&path) {
            if let Ok(mut settings) = serde_json::from_str::<Settings>(&contents) {
                settings.data_dir = data_dir;
                settings.migrate();
                return settings;
            }
        }
        let default = Settings {
            data_dir,
            ..Settings::default()
        };
        let _ = default.save();
        default
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = Self::settings_path(&self.data_dir);
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)
    }

    fn settings_path(data_dir: &Path) -> PathBuf {
        data_dir.join("settings.json")
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join("leaderboard.csv")
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    /// Fixed secret for reproducing a reported game.
    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}
