//! The player entity and its registration draft.

use std::collections::BTreeSet;

use courtside_core::{PlayerId, RoomId};
use serde::{Deserialize, Serialize};

use crate::PlayerError;

/// The fields a new player submits when registering.
///
/// This is the write-side payload; it never leaves the service layer as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub status_message: String,
    /// Optional reference to a profile image.
    pub profile: Option<String>,
}

impl PlayerDraft {
    /// Checks that the fields required for an account are present.
    pub fn validate(&self) -> Result<(), PlayerError> {
        if self.email.trim().is_empty() {
            return Err(PlayerError::Validation("email must not be empty".into()));
        }
        if self.nickname.trim().is_empty() {
            return Err(PlayerError::Validation("nickname must not be empty".into()));
        }
        if self.password.is_empty() {
            return Err(PlayerError::Validation("password must not be empty".into()));
        }
        Ok(())
    }
}

/// A registered player.
///
/// Two fields are deliberately private:
///
/// - `password` — only [`Player::verify_password`] can look at it, so a
///   credential never leaks through a projection or a log line.
/// - `joined` — the back-reference set of rooms this player is in.
///   Membership is always driven from the room side; this set is only
///   mutated through [`Player::join`] / [`Player::leave`] by the
///   membership service, which keeps both sides of the relationship in
///   agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Unique across the directory; the sole lookup key for login and
    /// for join/quit operations.
    pub email: String,
    pub nickname: String,
    password: String,
    pub status_message: String,
    pub profile: Option<String>,
    joined: BTreeSet<RoomId>,
}

impl Player {
    /// Builds a player from a validated registration draft.
    pub fn register(id: PlayerId, draft: PlayerDraft) -> Self {
        Self {
            id,
            email: draft.email,
            nickname: draft.nickname,
            password: draft.password,
            status_message: draft.status_message,
            profile: draft.profile,
            joined: BTreeSet::new(),
        }
    }

    /// Compares a login attempt against the stored credential.
    pub fn verify_password(&self, attempt: &str) -> bool {
        self.password == attempt
    }

    /// Records that this player is a member of `room_id`.
    ///
    /// Returns `false` if the room was already recorded — joining twice
    /// never duplicates membership.
    pub fn join(&mut self, room_id: RoomId) -> bool {
        self.joined.insert(room_id)
    }

    /// Drops the back-reference to `room_id`.
    ///
    /// Removing a room the player never joined is a safe no-op and
    /// returns `false`.
    pub fn leave(&mut self, room_id: RoomId) -> bool {
        self.joined.remove(&room_id)
    }

    /// Returns `true` if this player's joined-room set contains `room_id`.
    pub fn has_joined(&self, room_id: RoomId) -> bool {
        self.joined.contains(&room_id)
    }

    /// The rooms this player has joined, in id order.
    pub fn joined_rooms(&self) -> &BTreeSet<RoomId> {
        &self.joined
    }
}
