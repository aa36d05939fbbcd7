//! Shared building blocks for Courtside.
//!
//! This crate sits at the bottom of the workspace. It defines the types
//! that every other crate agrees on:
//!
//! - **Identity** ([`PlayerId`], [`RoomId`]) — newtype ids that keep a
//!   player id from ever being passed where a room id is expected.
//! - **Time** ([`Clock`]) — the injectable time source the catalog uses
//!   for its expiration filter, with a real implementation
//!   ([`SystemClock`]) and a settable one for tests ([`ManualClock`]).
//!
//! Nothing here knows about rooms, players, or storage.

mod clock;
mod ids;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{PlayerId, RoomId};
