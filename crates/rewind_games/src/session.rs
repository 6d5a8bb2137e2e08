//! Named game sessions.
//!
//! Each session owns exactly one engine. All access goes through the
//! manager's lock, so a session is never mutated by two callers at once.

use derive_more::{Display, Error};
use rewind_tictactoe::ClassicGame;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A game session: a name and the engine it owns.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game engine.
    pub game: ClassicGame,
}

impl GameSession {
    /// Creates a session holding a fresh game.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: ClassicGame::new(),
        }
    }
}

/// Session lookup and registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// No session with that ID.
    #[display("No session named '{}'", id)]
    NotFound {
        /// Requested ID.
        id: SessionId,
    },
    /// A session with that ID already exists.
    #[display("Session '{}' already exists", id)]
    AlreadyExists {
        /// Requested ID.
        id: SessionId,
    },
}

/// Thread-safe registry of game sessions.
///
/// Clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates an empty manager.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        // Engine operations never leave partial state, so a poisoned map is still consistent.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a fresh session under `id`.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock();
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists { id });
        }
        sessions.insert(id.clone(), GameSession::new(id.clone()));
        info!(session_id = %id, total = sessions.len(), "Session registered");
        Ok(id)
    }

    /// Runs `f` against the session while holding the lock.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.lock();
        match sessions.get_mut(id) {
            Some(session) => {
                debug!(session_id = %id, "Session locked");
                Ok(f(session))
            }
            None => {
                warn!(session_id = %id, "Session not found");
                Err(SessionError::NotFound { id: id.to_string() })
            }
        }
    }

    /// Returns a detached copy of a session.
    ///
    /// Changes to the copy do not reach the manager; use `with_session` to
    /// mutate.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        self.lock().get(id).cloned()
    }

    /// Returns true if a session with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    /// Removes a session, returning it.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<GameSession, SessionError> {
        self.lock().remove(id).ok_or_else(|| SessionError::NotFound { id: id.to_string() })
    }

    /// Lists session IDs in sorted order.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }
}
