//! Read-side catalog queries.

use courtside_core::Clock;
use courtside_player::Player;
use courtside_room::RoomRegistry;

use crate::{RoomSummary, ServiceError};

/// Read-only room discovery.
///
/// The clock comes in as a port so the expiration filter is a pure
/// function of (registry contents, now) — tests pin "now" and get the
/// same answer every time.
pub struct Catalog<R, C> {
    registry: R,
    clock: C,
}

impl<R, C> Catalog<R, C>
where
    R: RoomRegistry,
    C: Clock,
{
    pub fn new(registry: R, clock: C) -> Self {
        Self { registry, clock }
    }

    /// The primary browsing view: rooms a new player could still join.
    ///
    /// Keeps rooms whose end time is strictly in the future AND whose
    /// member count is below the limit, in registry order. An expired or
    /// full room never shows up here, even though it still exists.
    pub async fn find_all_unexpired_rooms(&self) -> Result<Vec<RoomSummary>, ServiceError> {
        let now = self.clock.now();
        let summaries = self
            .registry
            .find_all()
            .await?
            .iter()
            .filter(|room| !room.is_expired(now) && !room.is_full())
            .map(RoomSummary::project)
            .collect();
        Ok(summaries)
    }

    /// Every room the player is a member of, in registry order.
    ///
    /// Deliberately unfiltered: a player keeps seeing rooms they are in
    /// even once those are past their end time or full.
    pub async fn find_player_joined_rooms(
        &self,
        player: &Player,
    ) -> Result<Vec<RoomSummary>, ServiceError> {
        let summaries = self
            .registry
            .find_by_member_email(&player.email)
            .await?
            .iter()
            .map(RoomSummary::project)
            .collect();
        Ok(summaries)
    }
}
