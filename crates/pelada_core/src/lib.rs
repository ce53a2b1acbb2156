//! # pelada_core - Weekly Pickup Session Roster Core
//!
//! Attendance tracking for a recurring Sunday football session: a fixed
//! roster marks itself in or out, confirmed players queue up and split
//! into a main list and a waitlist, and the whole state renders into a
//! shareable plain-text report.
//!
//! ## Features
//! - Pure snapshot-transforming state machine (no hidden clocks, no I/O)
//! - Insertion-ordered confirmation queue with capacity split
//! - Deterministic team draws (same seed = same teams)
//! - Boundary traits for the hosted datastore and its change channel

pub mod boundary;
pub mod calendar;
pub mod draw;
pub mod error;
pub mod partition;
pub mod report;
pub mod roster;
pub mod state;

pub use boundary::{
    open_session, ChangeChannel, ConfirmationRepository, ConfirmationRow, GameId, GameRegistry,
    SyncDriver,
};
pub use calendar::{is_past_deadline, next_sunday};
pub use draw::{draw_teams, draw_teams_seeded};
pub use error::{BoundaryError, DrawError, RosterError, SessionError};
pub use partition::{partition, Partition, DEFAULT_CAPACITY};
pub use report::{format_report, share_url, EventInfo};
pub use roster::{Roster, Snapshot, Status, StatusCounts};
pub use state::{get_state, get_state_mut, reset_state, set_state, SessionState, SESSION_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
