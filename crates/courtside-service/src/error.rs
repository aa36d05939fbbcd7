//! Unified error type for the service layer.

use courtside_player::PlayerError;
use courtside_room::RoomError;

/// Top-level error surfaced by the membership service and the catalog.
///
/// Every operation funnels through this single type, so a transport
/// layer deals with one error instead of importing each domain crate's.
/// The `#[from]` attributes let `?` convert sub-errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A room-side failure (not found, forbidden, validation, backend).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A player-side failure (not found, auth, email taken, backend).
    #[error(transparent)]
    Player(#[from] PlayerError),
}
