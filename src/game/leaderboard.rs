use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, WriterBuilder};
use log::trace;

use crate::model::{GameOutcome, LeaderboardRecord, RankedRow};
use crate::GameError;

/// Fixed column schema of the persisted store. The header row is written
/// once at initialization and never rewritten.
pub const LEADERBOARD_HEADERS: [&str; 5] = ["Player", "Level", "Result", "Attempts", "Time(s)"];

/// Append-only flat-file store of finished games. Rows are never
/// rewritten or reordered; display order is recomputed by [`rank`] from
/// the full set on every read.
#[derive(Debug)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the store with a header-only file if absent. Idempotent.
    pub fn ensure_initialized(&self) -> Result<(), GameError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut writer = WriterBuilder::new().from_path(&self.path)?;
        writer.write_record(LEADERBOARD_HEADERS)?;
        writer.flush()?;
        trace!(target: "leaderboard", "Initialized store at {:?}", self.path);
        Ok(())
    }

    /// Appends one data row. Absent values become empty cells.
    pub fn append(&self, record: &LeaderboardRecord) -> Result<(), GameError> {
        self.ensure_initialized()?;
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

        let attempts = record
            .attempts
            .map(|attempts| attempts.to_string())
            .unwrap_or_default();
        let time_seconds = record
            .time_seconds
            .map(|time| time.to_string())
            .unwrap_or_default();
        writer.write_record([
            record.player.as_str(),
            record.level.as_str(),
            record.result.label(),
            attempts.as_str(),
            time_seconds.as_str(),
        ])?;
        writer.flush()?;
        trace!(target: "leaderboard", "Appended {:?} row for {}", record.result, record.player);
        Ok(())
    }

    /// Reads every stored row in append order. Legacy cells — empty,
    /// "-", or outright junk in the numeric columns, decorated or
    /// missing `Result` labels — coerce here, at the store boundary,
    /// so ranking only ever sees clean values.
    pub fn load_all(&self) -> Result<Vec<LeaderboardRecord>, GameError> {
        self.ensure_initialized()?;
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        let column = |name: &str| headers.iter().position(|header| header == name);
        let player = column("Player");
        let level = column("Level");
        let result = column("Result");
        let attempts = column("Attempts");
        let time_seconds = column("Time(s)");

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(LeaderboardRecord {
                player: cell(&row, player).to_string(),
                level: cell(&row, level).to_string(),
                result: GameOutcome::parse(cell(&row, result)),
                attempts: numeric_cell(cell(&row, attempts)),
                time_seconds: numeric_cell(cell(&row, time_seconds)),
            });
        }
        Ok(records)
    }
}

fn cell(row: &csv::StringRecord, index: Option<usize>) -> &str {
    index.and_then(|index| row.get(index)).unwrap_or("")
}

fn numeric_cell<T: FromStr>(cell: &str) -> Option<T> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" {
        return None;
    }
    cell.parse().ok()
}

/// Pure display ranking: ascending by the composite
/// (result rank, time rank, attempt rank) key, stable with respect to
/// append order on full ties, positions 1-based with no gaps.
pub fn rank(records: &[LeaderboardRecord]) -> Vec<RankedRow> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| {
        let (a_result, a_time, a_attempts) = a.ranking_key();
        let (b_result, b_time, b_attempts) = b.ranking_key();
        a_result
            .cmp(&b_result)
            .then(a_time.total_cmp(&b_time))
            .then(a_attempts.cmp(&b_attempts))
    });
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedRow {
            position: index + 1,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(
        player: &str,
        result: GameOutcome,
        attempts: Option<u32>,
        time_seconds: Option<f64>,
    ) -> LeaderboardRecord {
        LeaderboardRecord {
            player: player.to_string(),
            level: "Easy".to_string(),
            result,
            attempts,
            time_seconds,
        }
    }

    fn store_in(dir: &TempDir) -> LeaderboardStore {
        LeaderboardStore::new(dir.path().join("leaderboard.csv"))
    }

    #[test]
    fn test_ensure_initialized_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.ensure_initialized().unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        assert_eq!(first.trim(), "Player,Level,Result,Attempts,Time(s)");

        // Idempotent: a second call must not truncate or duplicate.
        store.append(&record("🔥 kaz", GameOutcome::Won, Some(2), Some(8.5))).unwrap();
        store.ensure_initialized().unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let won = record("🔥 kaz", GameOutcome::Won, Some(3), Some(12.35));
        let timed_out = record("😎 mia", GameOutcome::TimedOut, Some(1), None);
        let failed = record("👑 lee", GameOutcome::Failed, Some(6), None);
        store.append(&won).unwrap();
        store.append(&timed_out).unwrap();
        store.append(&failed).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![won, timed_out, failed]);
    }

    #[test]
    fn test_load_coerces_legacy_cells() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "Player,Level,Result,Attempts,Time(s)\n\
             🔥 kaz,🟢 Easy,Won 🏆,3,12.5\n\
             😎 mia,🟡 Medium,Timed Out ⏰,Timed Out ⏰,-\n\
             👑 lee,🔴 Hard,,not-a-number,\n",
        )
        .unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 3);

        assert_eq!(loaded[0].result, GameOutcome::Won);
        assert_eq!(loaded[0].attempts, Some(3));
        assert_eq!(loaded[0].time_seconds, Some(12.5));

        assert_eq!(loaded[1].result, GameOutcome::TimedOut);
        assert_eq!(loaded[1].attempts, None);
        assert_eq!(loaded[1].time_seconds, None);

        assert_eq!(loaded[2].result, GameOutcome::Failed);
        assert_eq!(loaded[2].attempts, None);
        assert_eq!(loaded[2].time_seconds, None);
    }

    #[test]
    fn test_append_preserves_existing_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(&record("🔥 kaz", GameOutcome::Won, Some(1), Some(3.0))).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        store.append(&record("😎 mia", GameOutcome::Failed, Some(4), None)).unwrap();
        let after = fs::read_to_string(store.path()).unwrap();

        assert!(after.starts_with(&before));
    }

    #[test]
    fn test_rank_orders_by_result_then_time_then_attempts() {
        let records = vec![
            record("a", GameOutcome::Won, Some(3), Some(12.0)),
            record("b", GameOutcome::Won, Some(2), Some(20.0)),
            record("c", GameOutcome::TimedOut, None, None),
            record("d", GameOutcome::Failed, Some(6), None),
        ];

        let ranked = rank(&records);
        let order: Vec<&str> = ranked
            .iter()
            .map(|row| row.record.player.as_str())
            .collect();
        // Time outranks attempts within the Won class.
        assert_eq!(order, vec!["a", "b", "c", "d"]);
        assert_eq!(
            ranked.iter().map(|row| row.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_rank_is_stable_for_full_ties() {
        let records = vec![
            record("first", GameOutcome::Failed, Some(3), None),
            record("second", GameOutcome::Failed, Some(3), None),
            record("third", GameOutcome::Failed, Some(3), None),
        ];

        let ranked = rank(&records);
        let order: Vec<&str> = ranked
            .iter()
            .map(|row| row.record.player.as_str())
            .collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let records = vec![
            record("d", GameOutcome::Failed, Some(6), None),
            record("b", GameOutcome::Won, Some(2), Some(20.0)),
            record("a", GameOutcome::Won, Some(3), Some(12.0)),
            record("c", GameOutcome::TimedOut, Some(1), None),
        ];

        let once = rank(&records);
        let reordered: Vec<LeaderboardRecord> =
            once.iter().map(|row| row.record.clone()).collect();
        let twice = rank(&reordered);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_time_sorts_after_real_times_within_class() {
        // A Won row that lost its time cell still ranks as a win, but
        // after every timed win.
        let records = vec![
            record("untimed", GameOutcome::Won, Some(1), None),
            record("timed", GameOutcome::Won, Some(5), Some(55.0)),
        ];

        let ranked = rank(&records);
        assert_eq!(ranked[0].record.player, "timed");
        assert_eq!(ranked[1].record.player, "untimed");
    }
}
