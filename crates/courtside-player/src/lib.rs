//! Player identity for Courtside.
//!
//! This crate owns everything about a player:
//!
//! 1. **The entity** ([`Player`]) — identity, credentials, and the
//!    back-reference set of rooms the player has joined.
//! 2. **The directory port** ([`PlayerDirectory`]) — the narrow storage
//!    contract the rest of the system consumes.
//! 3. **Account operations** ([`Accounts`]) — registration and login on
//!    top of the directory.
//!
//! # How it fits in the stack
//!
//! ```text
//! Membership service (above)  ← resolves players by email for join/quit
//!     ↕
//! Player layer (this crate)   ← identity, credentials, joined-room set
//!     ↕
//! Core (below)                ← PlayerId, RoomId
//! ```

#![allow(async_fn_in_trait)]

mod accounts;
mod directory;
mod error;
mod player;

pub use accounts::Accounts;
pub use directory::PlayerDirectory;
pub use error::PlayerError;
pub use player::{Player, PlayerDraft};
