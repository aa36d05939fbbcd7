//! The storage port for room aggregates.

use courtside_core::RoomId;

use crate::{Room, RoomError};

/// One player's membership mutation, applied by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    /// Add the player to the room's member list and the room to the
    /// player's joined set.
    Join,
    /// Remove both sides. A non-member is a safe no-op.
    Quit,
}

/// Durable storage and retrieval of rooms, keyed by id, with a secondary
/// lookup by member email.
///
/// The membership service is the only writer. The two-sided membership
/// mutation goes through [`apply_membership`](Self::apply_membership) so
/// the read-modify-write of the member list happens inside the store's
/// transactional boundary — two concurrent joins on the same room
/// serialize there instead of both working from a stale member list.
///
/// Absence is `Ok(None)` from [`find_by_id`](Self::find_by_id); only
/// [`delete`](Self::delete) treats a missing room as an error, because by
/// then the caller has asserted it exists.
pub trait RoomRegistry: Send + Sync + 'static {
    /// Inserts or replaces a room record.
    async fn save(&self, room: Room) -> Result<Room, RoomError>;

    /// Persists a brand-new room and adds it to the master's joined set
    /// as a single atomic write.
    ///
    /// The store resolves the master's current record itself, inside its
    /// transactional boundary — a snapshot taken by the caller could go
    /// stale between the read and this write and erase a concurrent join.
    ///
    /// # Errors
    /// [`RoomError::Backend`] — the master's player record is missing,
    /// which only an inconsistent backend can produce
    async fn save_membership(&self, room: Room, master_email: &str) -> Result<Room, RoomError>;

    /// Applies a join or quit for one player atomically: loads the
    /// current room and player records, mutates both sides, and stores
    /// them — all under the same lock/transaction. Returns the updated
    /// room.
    ///
    /// Both mutations are idempotent set operations, so re-applying a
    /// change is harmless.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] — the room vanished since the caller
    ///   resolved it
    /// - [`RoomError::Backend`] — the player record is missing, which
    ///   only an inconsistent backend can produce
    async fn apply_membership(
        &self,
        room_id: RoomId,
        email: &str,
        change: MembershipChange,
    ) -> Result<Room, RoomError>;

    /// Looks up a room by id.
    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RoomError>;

    /// Every stored room, in stable registry order (ascending id, which
    /// is creation order).
    async fn find_all(&self) -> Result<Vec<Room>, RoomError>;

    /// Every room whose member list contains the given email, in the
    /// same stable order.
    async fn find_by_member_email(&self, email: &str) -> Result<Vec<Room>, RoomError>;

    /// Removes a room record.
    ///
    /// Does NOT touch any player's joined-room set — the service owns
    /// that explicit cleanup before it calls this.
    async fn delete(&self, id: RoomId) -> Result<(), RoomError>;
}
