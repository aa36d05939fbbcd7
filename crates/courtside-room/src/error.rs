//! Error types for the room layer.

use courtside_core::RoomId;

/// Errors that can occur during room operations.
///
/// Every variant except `Backend` is an expected, recoverable outcome the
/// caller is meant to branch on (404, 403, form re-prompt). `Backend` is
/// an infrastructure failure and should be treated as fatal.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The acting player is not the room's master and may not mutate it.
    #[error("only the master may modify room {0}")]
    Forbidden(RoomId),

    /// The draft failed validation (empty title, zero capacity, end time
    /// not after start time).
    #[error("invalid room draft: {0}")]
    Validation(String),

    /// The registry backend failed. Fatal; propagated unmodified.
    #[error("room registry backend failure: {0}")]
    Backend(String),
}
