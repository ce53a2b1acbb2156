use thiserror::Error;

/// Errors raised by the roster state machine itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Unknown player: {name}")]
    UnknownPlayer { name: String },

    #[error("Duplicate player in roster: {name}")]
    DuplicatePlayer { name: String },
}

/// Errors raised when drawing teams.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Not enough players for a draw: found {found}, need at least 2")]
    InsufficientPlayers { found: usize },
}

/// Errors surfaced from boundary collaborators (repository, registry,
/// realtime channel). The core never retries; callers decide.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("Backend unavailable: {reason}")]
    Unavailable { reason: String },
}

impl BoundaryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        BoundaryError::Unavailable { reason: reason.into() }
    }
}

/// Anything that can go wrong while driving a live session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Boundary(#[from] BoundaryError),
}

impl SessionError {
    /// Roster mismatches are configuration bugs; backend outages are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::Roster(_) => false,
            SessionError::Boundary(_) => true,
        }
    }
}
