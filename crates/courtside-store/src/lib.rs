//! In-memory storage for Courtside.
//!
//! [`MemoryStore`] implements both ports — `RoomRegistry` and
//! `PlayerDirectory` — over a single `tokio::sync::RwLock`. Holding both
//! tables behind one lock is what makes the two-sided membership writes
//! genuinely atomic: `apply_membership` resolves and mutates the room's
//! member list and the player's joined-room set under the write guard, so
//! concurrent joins on the same room serialize instead of racing on a
//! stale member list, and `save_membership` lands a fresh room and its
//! master together or not at all.
//!
//! This is the store used by tests and single-process deployments; a
//! relational backend would implement the same two traits with real
//! transactions.

mod memory;

pub use memory::MemoryStore;
