//! Process-wide session state.
//!
//! The hosting application owns the lifecycle: open a session (empty,
//! everyone `NoResponse`, then hydrated from the store), swap in fresh
//! snapshots as transitions land or change notifications arrive, and
//! clear on teardown. The global holds at most one current snapshot; a
//! failed refresh leaves it untouched.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::boundary::GameId;
use crate::roster::Snapshot;

/// Global session state singleton
pub static SESSION_STATE: Lazy<Arc<RwLock<SessionState>>> =
    Lazy::new(|| Arc::new(RwLock::new(SessionState::default())));

/// Current session: which game, for which Sunday, and the latest
/// snapshot of confirmations.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub game_id: Option<GameId>,
    pub target_date: Option<NaiveDate>,
    snapshot: Option<Snapshot>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly opened session.
    pub fn begin(&mut self, game_id: GameId, target_date: NaiveDate, snapshot: Snapshot) {
        self.game_id = Some(game_id);
        self.target_date = Some(target_date);
        self.snapshot = Some(snapshot);
    }

    /// Swap in a newer snapshot (after a local transition persisted, or
    /// after a change-notification reload).
    pub fn refresh(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Session teardown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global session state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, SessionState> {
    SESSION_STATE.read().expect("SESSION_STATE lock poisoned")
}

/// Get a write lock on the global session state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, SessionState> {
    SESSION_STATE.write().expect("SESSION_STATE lock poisoned")
}

/// Reset the global state to default
pub fn reset_state() {
    *SESSION_STATE.write().expect("SESSION_STATE lock poisoned") = SessionState::new();
}

/// Replace the entire global state
pub fn set_state(new_state: SessionState) {
    *SESSION_STATE.write().expect("SESSION_STATE lock poisoned") = new_state;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Roster, Snapshot, Status};

    fn roster() -> Roster {
        Roster::new(["A", "B"]).unwrap()
    }

    #[test]
    fn test_begin_refresh_clear_lifecycle() {
        let mut state = SessionState::new();
        assert!(state.snapshot().is_none());

        let target = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        state.begin(GameId::new("g1"), target, Snapshot::new(&roster()));
        assert_eq!(state.target_date, Some(target));
        assert!(state.snapshot().unwrap().confirmation_queue().is_empty());

        let updated = state
            .snapshot()
            .unwrap()
            .apply_transition("A", Status::Confirmed)
            .unwrap();
        state.refresh(updated);
        assert_eq!(state.snapshot().unwrap().confirmation_queue(), ["A"]);

        state.clear();
        assert!(state.snapshot().is_none());
        assert!(state.game_id.is_none());
    }

    #[test]
    fn test_failed_reload_keeps_the_old_snapshot() {
        // The refresh contract: only a successful reload produces a
        // snapshot to install, so an error path never touches state.
        let mut state = SessionState::new();
        let target = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let snapshot = Snapshot::new(&roster())
            .apply_transition("B", Status::Confirmed)
            .unwrap();
        state.begin(GameId::new("g1"), target, snapshot);

        let reload: Result<Snapshot, crate::error::BoundaryError> =
            Err(crate::error::BoundaryError::unavailable("offline"));
        if let Ok(fresh) = reload {
            state.refresh(fresh);
        }

        assert_eq!(state.snapshot().unwrap().confirmation_queue(), ["B"]);
    }
}
