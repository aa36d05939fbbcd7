//! The create/update payload for rooms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Address, RoomError};

/// The fields a master submits when creating or updating a room.
///
/// The same shape serves both operations: on create it seeds the whole
/// aggregate, on update it replaces the mutable scalars. It never
/// carries master or membership data — those are not the caller's to set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDraft {
    pub title: String,
    pub intro: String,
    pub address: Address,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Capacity including the master. Must be at least 1.
    pub players_limit: usize,
}

impl RoomDraft {
    /// Rejects drafts that could never describe a playable room.
    ///
    /// # Errors
    /// [`RoomError::Validation`] with a human-readable reason.
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.title.trim().is_empty() {
            return Err(RoomError::Validation("title must not be empty".into()));
        }
        if self.players_limit == 0 {
            return Err(RoomError::Validation(
                "players limit must be at least 1".into(),
            ));
        }
        if self.end_time <= self.start_time {
            return Err(RoomError::Validation(
                "end time must be after start time".into(),
            ));
        }
        Ok(())
    }
}
