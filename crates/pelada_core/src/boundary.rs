//! Contracts for the external managed backend.
//!
//! The core owns no transport: a hosted datastore keeps the
//! confirmation rows and pushes row-level change notifications. These
//! traits are what the core needs from it, and [`SyncDriver`] is the
//! load -> mutate -> persist glue the hosting application runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{BoundaryError, SessionError};
use crate::roster::{Roster, Snapshot, Status};

/// Opaque identifier of one game in the external store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One persisted confirmation row. `NoResponse` is never stored: it is
/// represented by the row's absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRow {
    pub player: String,
    pub status: Status,
}

/// Confirmation rows for a game.
///
/// `list_confirmations` must return rows in stable insertion order
/// (e.g. ordered by a monotonically increasing row id); the queue model
/// depends on it.
pub trait ConfirmationRepository {
    fn list_confirmations(&self, game_id: &GameId) -> Result<Vec<ConfirmationRow>, BoundaryError>;

    fn upsert_confirmation(
        &self,
        game_id: &GameId,
        row: &ConfirmationRow,
    ) -> Result<(), BoundaryError>;

    fn delete_confirmation(&self, game_id: &GameId, player: &str) -> Result<(), BoundaryError>;
}

/// Games keyed by their canonical YYYY-MM-DD date key.
pub trait GameRegistry {
    fn find_or_create_game(&self, date_key: &str) -> Result<GameId, BoundaryError>;
}

/// Row-level change notifications for a game's confirmations.
///
/// The notification payload promises nothing; the only valid reaction
/// is to re-fetch the snapshot and recompute derived views, never to
/// patch incrementally.
pub trait ChangeChannel {
    fn subscribe(
        &self,
        game_id: &GameId,
        on_change: Box<dyn Fn() + Send + Sync>,
    ) -> Result<(), BoundaryError>;
}

/// Load / mutate / persist glue over a [`ConfirmationRepository`].
pub struct SyncDriver<R> {
    repo: R,
}

impl<R: ConfirmationRepository> SyncDriver<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Apply one status transition and persist it.
    ///
    /// A toggle-off becomes a row delete. A transition into `Confirmed`
    /// is persisted as delete-then-upsert so the row re-enters at the
    /// store's tail and the persisted order matches the local queue
    /// (queue positions come from the store's serialization order, not
    /// local clocks). On any backend error the old snapshot stays valid
    /// and is what the caller keeps.
    pub fn toggle(
        &self,
        snapshot: &Snapshot,
        player: &str,
        requested: Status,
        game_id: &GameId,
    ) -> Result<Snapshot, SessionError> {
        let next = snapshot.apply_transition(player, requested)?;
        let effective = next.status_of(player)?;

        match effective {
            Status::NoResponse => {
                self.repo.delete_confirmation(game_id, player)?;
            }
            Status::Confirmed => {
                self.repo.delete_confirmation(game_id, player)?;
                self.repo.upsert_confirmation(
                    game_id,
                    &ConfirmationRow { player: player.to_string(), status: effective },
                )?;
            }
            Status::Absent => {
                self.repo.upsert_confirmation(
                    game_id,
                    &ConfirmationRow { player: player.to_string(), status: effective },
                )?;
            }
        }

        log::debug!("Persisted {} -> {:?} for game {}", player, effective, game_id.as_str());
        Ok(next)
    }

    /// Re-fetch the full snapshot for a game.
    ///
    /// Fails without producing a snapshot: a backend outage must never
    /// silently default everyone to `NoResponse`, so the caller keeps
    /// whatever snapshot it already holds.
    pub fn reload(&self, roster: &Roster, game_id: &GameId) -> Result<Snapshot, SessionError> {
        let rows = self.repo.list_confirmations(game_id)?;
        let snapshot =
            Snapshot::from_records(roster, rows.into_iter().map(|r| (r.player, r.status)))?;

        log::debug!(
            "Loaded {} confirmations for game {}",
            snapshot.counts().confirmed + snapshot.counts().absent,
            game_id.as_str()
        );
        Ok(snapshot)
    }
}

/// Resolve the upcoming session and load its state: next Sunday from
/// `today`, find-or-create the game for that date key, initial fetch.
pub fn open_session<G, R>(
    registry: &G,
    driver: &SyncDriver<R>,
    roster: &Roster,
    today: NaiveDate,
) -> Result<(GameId, NaiveDate, Snapshot), SessionError>
where
    G: GameRegistry,
    R: ConfirmationRepository,
{
    let target_date = calendar::next_sunday(today);
    let game_id = registry.find_or_create_game(&calendar::date_key(target_date))?;
    let snapshot = driver.reload(roster, &game_id)?;

    log::info!("Session open for {} (game {})", target_date, game_id.as_str());
    Ok((game_id, target_date, snapshot))
}
