//! The single-lock in-memory store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use courtside_core::RoomId;
use courtside_player::{Player, PlayerDirectory, PlayerError};
use courtside_room::{MembershipChange, Room, RoomError, RoomRegistry};
use tokio::sync::RwLock;

/// Both storage tables, guarded together.
///
/// Rooms live in a `BTreeMap` keyed by `RoomId`: ids ascend with
/// creation, so iterating the map IS the registry's stable order.
#[derive(Default)]
struct Tables {
    rooms: BTreeMap<RoomId, Room>,
    players: HashMap<String, Player>,
}

/// An in-memory implementation of both storage ports.
///
/// Cheap to clone — clones share the same tables through an `Arc`, the
/// way one database is shared by every service holding a handle to it.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomRegistry for MemoryStore {
    async fn save(&self, room: Room) -> Result<Room, RoomError> {
        let mut tables = self.tables.write().await;
        tables.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn save_membership(&self, room: Room, master_email: &str) -> Result<Room, RoomError> {
        // One write guard covers both tables, and the master's record is
        // resolved here rather than passed in: a caller-held snapshot
        // could be stale by the time this runs.
        let mut guard = self.tables.write().await;
        let Tables { rooms, players } = &mut *guard;

        let master = players.get_mut(master_email).ok_or_else(|| {
            RoomError::Backend(format!("player record missing for {master_email}"))
        })?;
        master.join(room.id);
        rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn apply_membership(
        &self,
        room_id: RoomId,
        email: &str,
        change: MembershipChange,
    ) -> Result<Room, RoomError> {
        // The read-modify-write happens entirely under the write guard:
        // a concurrent join on the same room waits here instead of
        // working from a stale member list.
        let mut guard = self.tables.write().await;
        let Tables { rooms, players } = &mut *guard;

        let room = rooms
            .get_mut(&room_id)
            .ok_or(RoomError::NotFound(room_id))?;
        let player = players.get_mut(email).ok_or_else(|| {
            RoomError::Backend(format!("player record missing for {email}"))
        })?;

        match change {
            MembershipChange::Join => {
                if room.admit(email) {
                    player.join(room_id);
                }
            }
            MembershipChange::Quit => {
                if room.expel(email) {
                    player.leave(room_id);
                }
            }
        }

        Ok(room.clone())
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RoomError> {
        Ok(self.tables.read().await.rooms.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Room>, RoomError> {
        Ok(self.tables.read().await.rooms.values().cloned().collect())
    }

    async fn find_by_member_email(&self, email: &str) -> Result<Vec<Room>, RoomError> {
        Ok(self
            .tables
            .read()
            .await
            .rooms
            .values()
            .filter(|room| room.is_member(email))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: RoomId) -> Result<(), RoomError> {
        let mut tables = self.tables.write().await;
        match tables.rooms.remove(&id) {
            Some(_) => {
                tracing::debug!(room_id = %id, "room record removed");
                Ok(())
            }
            None => Err(RoomError::NotFound(id)),
        }
    }
}

impl PlayerDirectory for MemoryStore {
    async fn insert(&self, player: Player) -> Result<Player, PlayerError> {
        let mut tables = self.tables.write().await;
        if tables.players.contains_key(&player.email) {
            return Err(PlayerError::EmailTaken(player.email));
        }
        tables.players.insert(player.email.clone(), player.clone());
        Ok(player)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Player>, PlayerError> {
        Ok(self.tables.read().await.players.get(email).cloned())
    }

    async fn update(&self, player: Player) -> Result<Player, PlayerError> {
        let mut tables = self.tables.write().await;
        tables.players.insert(player.email.clone(), player.clone());
        Ok(player)
    }
}
