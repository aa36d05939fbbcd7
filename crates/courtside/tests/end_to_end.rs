//! Whole-stack smoke test through the meta-crate surface.

use std::sync::Arc;

use chrono::{Duration, Utc};
use courtside::prelude::*;
use courtside::ManualClock;

fn draft(title: &str, limit: usize, now: chrono::DateTime<Utc>) -> RoomDraft {
    RoomDraft {
        title: title.into(),
        intro: String::new(),
        address: Address::new("seoul", "mapo", "riverside court"),
        start_time: now + Duration::hours(2),
        end_time: now + Duration::hours(5),
        players_limit: limit,
    }
}

#[tokio::test]
async fn test_full_lifecycle_register_create_join_quit_delete() {
    let store = MemoryStore::new();
    let clock = Arc::new(ManualClock::fixed(Utc::now()));
    let accounts = Accounts::new(store.clone());
    let service = MembershipService::new(store.clone(), store.clone());
    let catalog = Catalog::new(store, Arc::clone(&clock));

    // 1. Two players register; one logs in again.
    let master = accounts
        .register(PlayerDraft {
            nickname: "ace".into(),
            email: "ace@example.com".into(),
            password: "secret".into(),
            status_message: "bring water".into(),
            profile: None,
        })
        .await
        .unwrap();
    accounts
        .register(PlayerDraft {
            nickname: "bee".into(),
            email: "bee@example.com".into(),
            password: "words".into(),
            status_message: String::new(),
            profile: None,
        })
        .await
        .unwrap();
    let authed = accounts
        .authenticate("bee@example.com", "words")
        .await
        .unwrap();
    assert_eq!(authed.nickname, "bee");

    // 2. Master creates a two-seat room; it shows up for browsing.
    let room = service
        .create(draft("duo", 2, clock.now()), &master)
        .await
        .unwrap();
    assert_eq!(catalog.find_all_unexpired_rooms().await.unwrap().len(), 1);

    // 3. Second player joins: room is now full and leaves the browsing
    //    view, but both members still see it.
    service.join("bee@example.com", room.id).await.unwrap();
    assert!(catalog.find_all_unexpired_rooms().await.unwrap().is_empty());
    let joined = catalog.find_player_joined_rooms(&authed).await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].member_count, 2);

    // 4. They quit; a seat frees up and the room is browsable again.
    service.quit("bee@example.com", room.id).await.unwrap();
    assert_eq!(catalog.find_all_unexpired_rooms().await.unwrap().len(), 1);

    // 5. Master deletes the room; nobody keeps a reference to it.
    service.delete(room.id, &master).await.unwrap();
    assert!(matches!(
        service.find_room(room.id).await,
        Err(ServiceError::Room(RoomError::NotFound(_)))
    ));
    let master_after = accounts.find_by_email("ace@example.com").await.unwrap();
    assert!(!master_after.has_joined(room.id));
}
