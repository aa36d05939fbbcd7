//! # Courtside
//!
//! A room membership and lifecycle service for meetup-style sessions:
//! players register and log in, create time-boxed rooms with a location
//! and a capacity, and join or quit them. The core guarantee is that a
//! room's member list and each player's joined-room set never disagree.
//!
//! This meta-crate re-exports the whole workspace behind one import.
//!
//! ## Quick start
//!
//! ```rust
//! use courtside::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! let accounts = Accounts::new(store.clone());
//! let service = MembershipService::new(store.clone(), store.clone());
//! let catalog = Catalog::new(store, SystemClock);
//!
//! let master = accounts
//!     .register(PlayerDraft {
//!         nickname: "ace".into(),
//!         email: "ace@example.com".into(),
//!         password: "secret".into(),
//!         status_message: String::new(),
//!         profile: None,
//!     })
//!     .await?;
//!
//! let start = chrono::Utc::now() + chrono::Duration::days(1);
//! let room = service
//!     .create(
//!         RoomDraft {
//!             title: "friday pickup".into(),
//!             intro: "all levels welcome".into(),
//!             address: Address::new("seoul", "songpa", "court 1"),
//!             start_time: start,
//!             end_time: start + chrono::Duration::hours(3),
//!             players_limit: 6,
//!         },
//!         &master,
//!     )
//!     .await?;
//!
//! assert_eq!(catalog.find_all_unexpired_rooms().await?.len(), 1);
//! assert!(room.is_member("ace@example.com"));
//! # Ok(())
//! # }
//! ```

pub use courtside_core::{Clock, ManualClock, PlayerId, RoomId, SystemClock};
pub use courtside_player::{Accounts, Player, PlayerDirectory, PlayerDraft, PlayerError};
pub use courtside_room::{
    Address, MembershipChange, Room, RoomDraft, RoomError, RoomRegistry,
};
pub use courtside_service::{Catalog, MembershipService, RoomSummary, ServiceError};
pub use courtside_store::MemoryStore;

/// Everything most callers need, in one import.
pub mod prelude {
    pub use crate::{
        Accounts, Address, Catalog, Clock, MembershipService, MemoryStore, Player,
        PlayerDraft, PlayerError, PlayerId, Room, RoomDraft, RoomError, RoomId,
        RoomSummary, ServiceError, SystemClock,
    };
}
