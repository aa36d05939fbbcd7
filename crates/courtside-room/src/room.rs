//! The room aggregate and its location value object.

use std::fmt;

use chrono::{DateTime, Utc};
use courtside_core::RoomId;
use courtside_player::Player;
use serde::{Deserialize, Serialize};

use crate::RoomDraft;

/// Free-text location of a room: city, section, detail.
///
/// No validation beyond presence — this is whatever the master typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub section: String,
    pub detail: String,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        section: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            section: section.into(),
            detail: detail.into(),
        }
    }
}

/// The one-line form used in catalog projections.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.city, self.section, self.detail)
    }
}

/// A scheduled, capacity-bounded session.
///
/// Two fields are private because they carry the aggregate's invariants:
///
/// - `master_email` — set once at creation, immutable ever after.
///   [`Room::apply`] deliberately cannot touch it.
/// - `members` — ordered member emails with set semantics (no
///   duplicates), master first. Callers go through [`Room::admit`] /
///   [`Room::expel`]; handing out `&mut` access here would let the
///   room's member list and the players' joined-room sets drift apart.
///
/// "Expired" and "full" are computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub title: String,
    pub intro: String,
    pub address: Address,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Capacity, master included.
    pub players_limit: usize,
    master_email: String,
    members: Vec<String>,
}

impl Room {
    /// Builds a new room from a validated draft.
    ///
    /// The master auto-joins: the member list starts as exactly
    /// `[master.email]`. There is no capacity check at creation.
    pub fn create(id: RoomId, draft: RoomDraft, master: &Player) -> Self {
        Self {
            id,
            title: draft.title,
            intro: draft.intro,
            address: draft.address,
            start_time: draft.start_time,
            end_time: draft.end_time,
            players_limit: draft.players_limit,
            master_email: master.email.clone(),
            members: vec![master.email.clone()],
        }
    }

    /// Replaces the mutable scalar fields from an update draft.
    ///
    /// Master and member list are untouched regardless of what the
    /// caller sends.
    pub fn apply(&mut self, draft: RoomDraft) {
        self.title = draft.title;
        self.intro = draft.intro;
        self.address = draft.address;
        self.start_time = draft.start_time;
        self.end_time = draft.end_time;
        self.players_limit = draft.players_limit;
    }

    /// Adds a member.
    ///
    /// Returns `false` when the email is already on the list — joining
    /// twice must not duplicate membership. Capacity is NOT checked
    /// here: a full room only stops being discoverable, it doesn't
    /// reject a direct join.
    pub fn admit(&mut self, email: &str) -> bool {
        if self.is_member(email) {
            return false;
        }
        self.members.push(email.to_owned());
        true
    }

    /// Removes a member.
    ///
    /// Returns `false` when the email was never a member — a safe no-op,
    /// not an error. The master can be expelled from the member list like
    /// anyone else; `master_email` itself never changes.
    pub fn expel(&mut self, email: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != email);
        self.members.len() != before
    }

    /// Returns `true` if the email is on the member list.
    pub fn is_member(&self, email: &str) -> bool {
        self.members.iter().any(|m| m == email)
    }

    /// Member emails in join order, master first.
    pub fn member_emails(&self) -> &[String] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// The owning player's email. Set at creation; immutable.
    pub fn master_email(&self) -> &str {
        &self.master_email
    }

    /// Returns `true` if `player` is this room's master.
    pub fn is_mastered_by(&self, player: &Player) -> bool {
        self.master_email == player.email
    }

    /// A room is full once the member count reaches the capacity.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.players_limit
    }

    /// A room is expired once its end time is no longer in the future.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_time <= now
    }
}
