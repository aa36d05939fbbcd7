//! The room aggregate for Courtside.
//!
//! A room is a scheduled, capacity-bounded session: a title, a location,
//! a time window, a capacity, one immutable master, and an ordered member
//! list. This crate owns the aggregate and the rules that protect it;
//! orchestration across rooms and players lives one layer up.
//!
//! # Key types
//!
//! - [`Room`] — the aggregate, with invariant-guarding mutators
//! - [`Address`] — free-text location value object
//! - [`RoomDraft`] — create/update payload plus validation
//! - [`RoomRegistry`] — the storage port the service consumes
//! - [`RoomError`] — everything that can go wrong at this layer

#![allow(async_fn_in_trait)]

mod draft;
mod error;
mod registry;
mod room;

pub use draft::RoomDraft;
pub use error::RoomError;
pub use registry::{MembershipChange, RoomRegistry};
pub use room::{Address, Room};
