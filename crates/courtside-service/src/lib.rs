//! The operational core of Courtside.
//!
//! Two services live here, one writer and one reader:
//!
//! - [`MembershipService`] — creates, updates, deletes rooms and moves
//!   players in and out of them, keeping the room's member list and each
//!   player's joined-room set in agreement. This is the only code in the
//!   system allowed to mutate either side of that relationship.
//! - [`Catalog`] — read-only browsing: unexpired rooms with open slots,
//!   and the rooms a given player is in, both as [`RoomSummary`]
//!   projections rather than raw aggregates.
//!
//! Both are generic over the storage ports ([`RoomRegistry`],
//! [`PlayerDirectory`]) and, for the catalog, the [`Clock`] — so every
//! behavior here is testable against an in-memory store and a pinned
//! clock.
//!
//! [`Clock`]: courtside_core::Clock
//! [`PlayerDirectory`]: courtside_player::PlayerDirectory
//! [`RoomRegistry`]: courtside_room::RoomRegistry

mod catalog;
mod error;
mod membership;
mod summary;

pub use catalog::Catalog;
pub use error::ServiceError;
pub use membership::MembershipService;
pub use summary::RoomSummary;
