use std::time::SystemTime;

use log::{trace, warn};

use crate::events::{Channel, EventEmitter, EventObserver};
use crate::game::leaderboard::{rank, LeaderboardStore};
use crate::game::settings::Settings;
use crate::game::GameSession;
use crate::model::{
    Brag, Difficulty, GuessOutcome, LeaderboardRecord, Player, RankedRow, SessionStatus,
};
use crate::GameError;

/// What the display layer needs to show after a game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub player: String,
    pub level: &'static str,
    pub max_number: u32,
    pub allowed_attempts: u32,
    pub time_limit_seconds: u64,
}

#[derive(Debug, Clone)]
pub enum GameEngineEvent {
    SessionStarted(SessionSummary),
    GuessEvaluated(GuessOutcome),
    /// A terminal transition happened and this is the row it produced.
    SessionEnded(LeaderboardRecord),
    SessionAbandoned,
    /// The row could not be persisted; the in-memory outcome stands.
    LeaderboardSaveFailed(String),
}

/// The caller boundary: one live session at most, the leaderboard store,
/// and an event stream for the display layer. All methods take `now`
/// where time matters; the engine never reads the wall clock itself.
pub struct GameEngine {
    session: Option<GameSession>,
    store: LeaderboardStore,
    settings: Settings,
    event_emitter: EventEmitter<GameEngineEvent>,
    event_observer: EventObserver<GameEngineEvent>,
}

impl GameEngine {
    pub fn new(settings: Settings) -> Self {
        let store = LeaderboardStore::new(settings.leaderboard_path());
        let (event_emitter, event_observer) = Channel::new();
        Self {
            session: None,
            store,
            settings,
            event_emitter,
            event_observer,
        }
    }

    /// Event stream the display layer subscribes to.
    pub fn events(&self) -> EventObserver<GameEngineEvent> {
        self.event_observer.clone()
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Starts a fresh game, implicitly discarding any session in flight.
    /// Nothing is written to the leaderboard at start.
    pub fn start_game(
        &mut self,
        nickname: &str,
        avatar: &str,
        difficulty: Difficulty,
        brag: Brag,
        now: SystemTime,
    ) -> Result<SessionSummary, GameError> {
        let profile = self.settings.profile_set.profile(difficulty);
        let session = GameSession::start(
            Player::new(nickname, avatar),
            difficulty,
            profile,
            brag,
            Settings::seed_from_env(),
            now,
        )?;

        let summary = SessionSummary {
            player: session.player().display_name(),
            level: difficulty.label(),
            max_number: profile.max_number,
            allowed_attempts: profile.allowed_attempts,
            time_limit_seconds: profile.time_limit.as_secs(),
        };
        trace!(target: "engine", "Game started: {:?}", summary);
        self.session = Some(session);
        self.event_emitter
            .emit(&GameEngineEvent::SessionStarted(summary.clone()));
        Ok(summary)
    }

    /// Re-evaluates the per-attempt countdown. Returns true while the
    /// live session is timed out; the record is appended only on the
    /// transition itself.
    pub fn poll_timeout(&mut self, now: SystemTime) -> bool {
        let expired = match self.session.as_mut() {
            Some(session) => session.check_timeout(now),
            None => return false,
        };
        if let Some(record) = expired {
            self.finish(record);
        }
        matches!(
            self.session.as_ref().map(GameSession::status),
            Some(SessionStatus::TimedOut)
        )
    }

    /// Evaluates one guess against the live session. The countdown is
    /// re-checked first: an expired attempt times the session out and
    /// the guess is rejected.
    pub fn submit_guess(&mut self, guess: u32, now: SystemTime) -> Result<GuessOutcome, GameError> {
        if self.poll_timeout(now) {
            return Err(GameError::InvalidState("session timed out"));
        }
        let session = self
            .session
            .as_mut()
            .ok_or(GameError::InvalidState("no game in progress"))?;

        let (outcome, record) = session.submit_guess(guess, now)?;
        self.event_emitter
            .emit(&GameEngineEvent::GuessEvaluated(outcome.clone()));
        if let Some(record) = record {
            self.finish(record);
        }
        Ok(outcome)
    }

    /// Abandons the current session. The leaderboard is untouched; no
    /// row exists until a terminal transition, and abandoning is not one.
    pub fn restart(&mut self) {
        if self.session.take().is_some() {
            trace!(target: "engine", "Session abandoned");
            self.event_emitter.emit(&GameEngineEvent::SessionAbandoned);
        }
    }

    /// Full display ranking, recomputed from the stored set.
    pub fn leaderboard(&self) -> Result<Vec<RankedRow>, GameError> {
        let records = self.store.load_all()?;
        Ok(rank(&records))
    }

    /// Persists a terminal record and announces the end of the session.
    /// A storage failure is surfaced but does not unwind the game
    /// outcome; the session stays terminal either way.
    fn finish(&mut self, record: LeaderboardRecord) {
        if let Err(err) = self.store.append(&record) {
            warn!(target: "engine", "Could not append leaderboard row: {}", err);
            self.event_emitter
                .emit(&GameEngineEvent::LeaderboardSaveFailed(err.to_string()));
        }
        self.event_emitter
            .emit(&GameEngineEvent::SessionEnded(record));
    }
}
