//! Roster data model and the attendance state machine.
//!
//! A [`Snapshot`] is the full state for one game: every roster player's
//! [`Status`] plus the confirmation queue (confirmed players, ordered by
//! the time of their most recent confirmation). Snapshots are immutable
//! per call: [`Snapshot::apply_transition`] returns a new value and the
//! hosting application decides what to do with it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RosterError;

/// Attendance status of one player.
///
/// `NoResponse` is the absence-of-record default; it is never written to
/// the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "absent")]
    Absent,
    #[serde(rename = "no_response")]
    #[default]
    NoResponse,
}

/// Fixed, ordered list of eligible players for the recurring session.
///
/// Immutable for the lifetime of a session; duplicates are a
/// configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = std::collections::HashSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(RosterError::DuplicatePlayer { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    /// The regulars, in board order.
    pub fn default_roster() -> Self {
        Self::new([
            "Alberto", "Amarildo", "Arthur", "Batata", "Caleffi", "Callefinho", "Diego", "Gilson",
            "Pedro", "Rafael", "Rodrigo", "Vinicius",
        ])
        .expect("default roster has no duplicates")
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Per-status headcount, for the counters above the roster grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub confirmed: usize,
    pub absent: usize,
    pub no_response: usize,
}

/// Full attendance state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    roster: Roster,
    status: HashMap<String, Status>,
    /// Currently-confirmed players, earliest still-active confirmation
    /// first. Invariant: its set equals the set of `Confirmed` entries in
    /// `status`, with no duplicates.
    queue: Vec<String>,
}

impl Snapshot {
    /// Empty snapshot: everyone `NoResponse`, empty queue.
    pub fn new(roster: &Roster) -> Self {
        let status =
            roster.names().iter().map(|n| (n.clone(), Status::NoResponse)).collect();
        Self { roster: roster.clone(), status, queue: Vec::new() }
    }

    /// Rebuild a snapshot from the repository's insertion-ordered rows.
    ///
    /// Queue order is taken from row order, never from local clocks. A
    /// row naming a player outside the roster is a configuration
    /// mismatch and fails the whole hydration.
    pub fn from_records<I, S>(roster: &Roster, records: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (S, Status)>,
        S: Into<String>,
    {
        let mut snapshot = Self::new(roster);
        for (name, status) in records {
            let name = name.into();
            if !roster.contains(&name) {
                return Err(RosterError::UnknownPlayer { name });
            }
            snapshot.force_status(&name, status);
        }
        Ok(snapshot)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Current status of a roster player.
    pub fn status_of(&self, name: &str) -> Result<Status, RosterError> {
        self.status
            .get(name)
            .copied()
            .ok_or_else(|| RosterError::UnknownPlayer { name: name.to_string() })
    }

    /// Confirmed players, earliest confirmation first.
    pub fn confirmation_queue(&self) -> &[String] {
        &self.queue
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for status in self.status.values() {
            match status {
                Status::Confirmed => counts.confirmed += 1,
                Status::Absent => counts.absent += 1,
                Status::NoResponse => counts.no_response += 1,
            }
        }
        counts
    }

    /// The single mutation rule of the roster state machine.
    ///
    /// Requesting the status a player already has toggles them back to
    /// `NoResponse` (and out of the queue). Any other request sets the
    /// new status; a transition into `Confirmed` always re-enters the
    /// queue at the back, so un-confirming and re-confirming surrenders
    /// queue priority. Repeated confirms keep moving the player to the
    /// back; that is intentional, not a bug.
    pub fn apply_transition(
        &self,
        player: &str,
        requested: Status,
    ) -> Result<Snapshot, RosterError> {
        let current = self.status_of(player)?;

        let effective = if current == requested { Status::NoResponse } else { requested };

        let mut next = self.clone();
        next.force_status(player, effective);
        Ok(next)
    }

    /// Directly assign a status, keeping the queue consistent. Confirmed
    /// assignments always (re-)append at the back.
    fn force_status(&mut self, name: &str, status: Status) {
        self.queue.retain(|n| n != name);
        if status == Status::Confirmed {
            self.queue.push(name.to_string());
        }
        self.status.insert(name.to_string(), status);
    }
}
