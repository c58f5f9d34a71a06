use std::time::SystemTime;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::model::{
    Brag, Comparison, Difficulty, DifficultyProfile, GameOutcome, GuessOutcome, LeaderboardRecord,
    Player, SessionClock, SessionStatus,
};
use crate::GameError;

/// One play-through: from `start` to a terminal status.
///
/// The session owns all attempt and timer bookkeeping but never touches
/// persistence; terminal transitions hand the single [`LeaderboardRecord`]
/// for this session back to the caller. The status transition guards
/// exactly-once emission: once terminal, no method produces another
/// record.
pub struct GameSession {
    player: Player,
    difficulty: Difficulty,
    profile: DifficultyProfile,
    brag: Brag,
    secret_number: u32,
    attempts_used: u32,
    status: SessionStatus,
    clock: SessionClock,
    session_id: Uuid,
}

impl GameSession {
    /// Draws the secret and anchors both timers at `now`. Seeded draws
    /// reproduce a given game.
    pub fn start(
        player: Player,
        difficulty: Difficulty,
        profile: DifficultyProfile,
        brag: Brag,
        seed: Option<u64>,
        now: SystemTime,
    ) -> Result<GameSession, GameError> {
        if player.nickname.trim().is_empty() {
            return Err(GameError::Validation(
                "nickname must not be empty".to_string(),
            ));
        }

        let secret_number = match seed {
            Some(seed) => StdRng::seed_from_u64(seed).random_range(1..=profile.max_number),
            None => rand::rng().random_range(1..=profile.max_number),
        };
        let session_id = Uuid::new_v4();
        trace!(
            target: "session",
            "Session {} started: {:?}, range 1..={}, secret {}, seed {:?}",
            session_id, difficulty, profile.max_number, secret_number, seed
        );

        Ok(GameSession {
            player,
            difficulty,
            profile,
            brag,
            secret_number,
            attempts_used: 0,
            status: SessionStatus::InProgress,
            clock: SessionClock::anchored_at(now),
            session_id,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn profile(&self) -> DifficultyProfile {
        self.profile
    }

    pub fn brag(&self) -> Brag {
        self.brag
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub(crate) fn secret_number(&self) -> u32 {
        self.secret_number
    }

    /// Whole seconds left on the current attempt; negative once the
    /// limit is blown. Callers clamp to 0 for display.
    pub fn remaining_time(&self, now: SystemTime) -> i64 {
        self.clock.remaining(now, self.profile.time_limit)
    }

    /// Must be evaluated before accepting a guess. On the first expiry
    /// the session becomes `TimedOut` and its record is returned; on any
    /// later call nothing changes and nothing is returned.
    pub fn check_timeout(&mut self, now: SystemTime) -> Option<LeaderboardRecord> {
        if self.status != SessionStatus::InProgress || self.remaining_time(now) > 0 {
            return None;
        }
        self.status = SessionStatus::TimedOut;
        trace!(
            target: "session",
            "Session {} timed out after {} attempt(s)",
            self.session_id, self.attempts_used
        );
        Some(self.record(GameOutcome::TimedOut, None))
    }

    /// Evaluates one guess. Every accepted guess costs an attempt and
    /// re-anchors the per-attempt countdown, winning guess included. A
    /// correct guess on the final allowed attempt is a win, never a
    /// failure.
    pub fn submit_guess(
        &mut self,
        guess: u32,
        now: SystemTime,
    ) -> Result<(GuessOutcome, Option<LeaderboardRecord>), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidState("session already finished"));
        }
        if guess < 1 || guess > self.profile.max_number {
            return Err(GameError::Validation(format!(
                "guess must be between 1 and {}",
                self.profile.max_number
            )));
        }

        self.attempts_used += 1;
        self.clock = self.clock.turn_reset(now);

        if guess == self.secret_number {
            self.status = SessionStatus::Won;
            let time_seconds = round_to_hundredths(self.clock.elapsed(now).as_secs_f64());
            let outcome = GuessOutcome {
                comparison: Comparison::Correct,
                status: self.status,
                brag_verdict: Some(self.brag.verdict(self.attempts_used)),
                terminal: true,
            };
            trace!(
                target: "session",
                "Session {} won in {} attempt(s), {:.2}s",
                self.session_id, self.attempts_used, time_seconds
            );
            let record = self.record(GameOutcome::Won, Some(time_seconds));
            return Ok((outcome, Some(record)));
        }

        let comparison = if guess < self.secret_number {
            Comparison::TooLow
        } else {
            Comparison::TooHigh
        };

        if self.attempts_used >= self.profile.allowed_attempts {
            self.status = SessionStatus::Failed;
            trace!(
                target: "session",
                "Session {} failed: attempt budget exhausted",
                self.session_id
            );
            let outcome = GuessOutcome {
                comparison,
                status: self.status,
                brag_verdict: None,
                terminal: true,
            };
            return Ok((outcome, Some(self.record(GameOutcome::Failed, None))));
        }

        Ok((
            GuessOutcome {
                comparison,
                status: self.status,
                brag_verdict: None,
                terminal: false,
            },
            None,
        ))
    }

    fn record(&self, result: GameOutcome, time_seconds: Option<f64>) -> LeaderboardRecord {
        LeaderboardRecord {
            player: self.player.display_name(),
            level: self.difficulty.label().to_string(),
            result,
            attempts: Some(self.attempts_used),
            time_seconds,
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
