//! The storage port for player records.
//!
//! Courtside doesn't persist players itself — that's the job of whatever
//! backs this trait (an in-memory store, a relational database, ...).
//! The domain only ever talks to this narrow contract, which keeps every
//! service testable against a throwaway double.

use crate::{Player, PlayerError};

/// Durable storage and retrieval of players, keyed by email.
///
/// # Trait bounds
///
/// - `Send + Sync` → a directory handle is shared across async tasks.
/// - `'static` → implementations own their data rather than borrowing it.
///
/// # Errors
///
/// Implementations report infrastructure failures as
/// [`PlayerError::Backend`]; absence is `Ok(None)`, never an error —
/// the caller decides whether a miss is a [`PlayerError::NotFound`].
pub trait PlayerDirectory: Send + Sync + 'static {
    /// Stores a brand-new player record.
    ///
    /// The caller has already checked email uniqueness; an implementation
    /// may still reject a duplicate with [`PlayerError::EmailTaken`] if it
    /// can detect one.
    async fn insert(&self, player: Player) -> Result<Player, PlayerError>;

    /// Looks up a player by their unique email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Player>, PlayerError>;

    /// Persists an updated player record (changed profile fields or
    /// joined-room back-references).
    async fn update(&self, player: Player) -> Result<Player, PlayerError>;
}
