/// Sentinel ranks for rows missing a value: no winning time sorts after
/// every real time, no attempt count after every real count.
pub const TIME_RANK_SENTINEL: f64 = 9999.0;
pub const ATTEMPT_RANK_SENTINEL: u32 = 99;

/// How a finished game went. The label is the persisted `Result` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Won,
    TimedOut,
    Failed,
}

impl GameOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            GameOutcome::Won => "Won",
            GameOutcome::TimedOut => "TimedOut",
            GameOutcome::Failed => "Failed",
        }
    }

    /// Reads a persisted `Result` cell back. Prefix matching tolerates
    /// decorated legacy labels like "Won 🏆" and "Timed Out ⏰"; anything
    /// unrecognized ranks as a failure.
    pub fn parse(label: &str) -> GameOutcome {
        let label = label.trim();
        if label.starts_with("Won") {
            GameOutcome::Won
        } else if label.starts_with("Timed") {
            GameOutcome::TimedOut
        } else {
            GameOutcome::Failed
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            GameOutcome::Won => 0,
            GameOutcome::TimedOut => 1,
            GameOutcome::Failed => 2,
        }
    }
}

/// One appended leaderboard row. Immutable once written.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRecord {
    pub player: String,
    pub level: String,
    pub result: GameOutcome,
    /// Absent when the source row predates attempt tracking.
    pub attempts: Option<u32>,
    /// Present only for wins.
    pub time_seconds: Option<f64>,
}

impl LeaderboardRecord {
    /// Composite sort key: outcome class first, then winning time, then
    /// attempts. Missing values take the large sentinels.
    pub fn ranking_key(&self) -> (u8, f64, u32) {
        (
            self.result.rank(),
            self.time_seconds.unwrap_or(TIME_RANK_SENTINEL),
            self.attempts.unwrap_or(ATTEMPT_RANK_SENTINEL),
        )
    }
}

/// A record plus its 1-based display position after ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub position: usize,
    pub record: LeaderboardRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_decorated_labels() {
        assert_eq!(GameOutcome::parse("Won"), GameOutcome::Won);
        assert_eq!(GameOutcome::parse("Won 🏆"), GameOutcome::Won);
        assert_eq!(GameOutcome::parse("TimedOut"), GameOutcome::TimedOut);
        assert_eq!(GameOutcome::parse("Timed Out ⏰"), GameOutcome::TimedOut);
        assert_eq!(GameOutcome::parse("Failed"), GameOutcome::Failed);
        assert_eq!(GameOutcome::parse("???"), GameOutcome::Failed);
    }

    #[test]
    fn test_ranking_key_sentinels_for_missing_values() {
        let record = LeaderboardRecord {
            player: "🔥 kaz".to_string(),
            level: "Hard".to_string(),
            result: GameOutcome::TimedOut,
            attempts: None,
            time_seconds: None,
        };
        assert_eq!(
            record.ranking_key(),
            (1, TIME_RANK_SENTINEL, ATTEMPT_RANK_SENTINEL)
        );
    }
}
