//! The membership service: room lifecycle and two-sided membership.

use std::sync::atomic::{AtomicU64, Ordering};

use courtside_core::RoomId;
use courtside_player::{Player, PlayerDirectory, PlayerError};
use courtside_room::{MembershipChange, Room, RoomDraft, RoomError, RoomRegistry};

use crate::ServiceError;

/// Counter for minting unique room ids.
static NEXT_ROOM_ID: AtomicU64 = AtomicU64::new(1);

/// Orchestrates every mutation of rooms and their membership.
///
/// The central invariant of the whole system is bidirectionality: a
/// room's member list and a player's joined-room set must always agree.
/// All mutating paths therefore run through this service, and the
/// two-sided writes land in the registry as single transactional calls
/// (`save_membership` at creation, `apply_membership` for join/quit).
///
/// Every operation that needs authority takes the authenticated actor
/// explicitly. There is no ambient "current player" anywhere.
pub struct MembershipService<R, P> {
    registry: R,
    directory: P,
}

impl<R, P> MembershipService<R, P>
where
    R: RoomRegistry,
    P: PlayerDirectory,
{
    pub fn new(registry: R, directory: P) -> Self {
        Self {
            registry,
            directory,
        }
    }

    /// Creates a room with the actor as master.
    ///
    /// The master auto-joins: the room starts with the actor as its only
    /// member, and the actor's joined-room set gains the new room. Both
    /// records are persisted atomically. No capacity check applies to
    /// creation.
    ///
    /// # Errors
    /// - [`RoomError::Validation`] — malformed draft
    /// - [`PlayerError::NotFound`] — the actor is no longer registered
    pub async fn create(&self, draft: RoomDraft, actor: &Player) -> Result<Room, ServiceError> {
        draft.validate()?;

        // Re-resolve the actor to confirm they are still registered. The
        // master's joined set is mutated by the registry itself, inside
        // its transactional boundary, never from a snapshot held here.
        let master = self.find_player(&actor.email).await?;

        let id = RoomId(NEXT_ROOM_ID.fetch_add(1, Ordering::Relaxed));
        let room = Room::create(id, draft, &master);

        let room = self.registry.save_membership(room, &master.email).await?;
        tracing::info!(room_id = %room.id, master = %room.master_email(), "room created");
        Ok(room)
    }

    /// Replaces a room's mutable scalar fields from the draft.
    ///
    /// Master and member list survive untouched regardless of the
    /// payload. Only the master may update a room.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] — no such room
    /// - [`RoomError::Forbidden`] — actor is not the master
    /// - [`RoomError::Validation`] — malformed draft
    pub async fn update(
        &self,
        room_id: RoomId,
        draft: RoomDraft,
        actor: &Player,
    ) -> Result<RoomId, ServiceError> {
        let mut room = self.find_room(room_id).await?;
        if !room.is_mastered_by(actor) {
            return Err(RoomError::Forbidden(room_id).into());
        }
        draft.validate()?;

        room.apply(draft);
        let room = self.registry.save(room).await?;
        tracing::info!(room_id = %room.id, "room updated");
        Ok(room.id)
    }

    /// Deletes a room.
    ///
    /// Before the record goes away, every member's joined-room set drops
    /// the room — the registry does not cascade, so a dangling
    /// back-reference is this method's job to prevent. Only the master
    /// may delete a room.
    ///
    /// # Errors
    /// - [`RoomError::NotFound`] — no such room
    /// - [`RoomError::Forbidden`] — actor is not the master
    pub async fn delete(&self, room_id: RoomId, actor: &Player) -> Result<(), ServiceError> {
        let room = self.find_room(room_id).await?;
        if !room.is_mastered_by(actor) {
            return Err(RoomError::Forbidden(room_id).into());
        }

        for email in room.member_emails() {
            if let Some(mut member) = self.directory.find_by_email(email).await? {
                member.leave(room_id);
                self.directory.update(member).await?;
            }
        }

        self.registry.delete(room_id).await?;
        tracing::info!(%room_id, members = room.member_count(), "room deleted");
        Ok(())
    }

    /// Adds a player (resolved by email) to a room, updating both sides.
    ///
    /// Idempotent: joining a room you are already in changes nothing.
    /// There is no capacity check — a full room merely stops appearing in
    /// the catalog; a direct join by id still lands.
    ///
    /// The actual read-modify-write runs inside the registry's
    /// transactional boundary, so two players racing into the same room
    /// both land exactly once.
    ///
    /// # Errors
    /// - [`PlayerError::NotFound`] — unknown email
    /// - [`RoomError::NotFound`] — unknown room
    pub async fn join(&self, email: &str, room_id: RoomId) -> Result<(), ServiceError> {
        let player = self.find_player(email).await?;
        self.find_room(room_id).await?;

        let room = self
            .registry
            .apply_membership(room_id, &player.email, MembershipChange::Join)
            .await?;
        tracing::info!(%room_id, %email, members = room.member_count(), "player joined room");
        Ok(())
    }

    /// Removes a player from a room, updating both sides.
    ///
    /// Quitting a room the player never joined is a safe no-op.
    ///
    /// # Errors
    /// - [`PlayerError::NotFound`] — unknown email
    /// - [`RoomError::NotFound`] — unknown room
    pub async fn quit(&self, email: &str, room_id: RoomId) -> Result<(), ServiceError> {
        let player = self.find_player(email).await?;
        self.find_room(room_id).await?;

        let room = self
            .registry
            .apply_membership(room_id, &player.email, MembershipChange::Quit)
            .await?;
        tracing::info!(%room_id, %email, members = room.member_count(), "player quit room");
        Ok(())
    }

    /// Looks up a single room.
    ///
    /// # Errors
    /// [`RoomError::NotFound`] when the id does not resolve.
    pub async fn find_room(&self, room_id: RoomId) -> Result<Room, ServiceError> {
        Ok(self
            .registry
            .find_by_id(room_id)
            .await?
            .ok_or(RoomError::NotFound(room_id))?)
    }

    /// Every room in the registry, unfiltered. Administrative use.
    pub async fn find_all_rooms(&self) -> Result<Vec<Room>, ServiceError> {
        Ok(self.registry.find_all().await?)
    }

    async fn find_player(&self, email: &str) -> Result<Player, ServiceError> {
        Ok(self
            .directory
            .find_by_email(email)
            .await?
            .ok_or_else(|| PlayerError::NotFound(email.to_owned()))?)
    }
}
