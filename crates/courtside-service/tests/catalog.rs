//! Integration tests for the catalog queries: expiry and fullness
//! filtering, projection fidelity, and ordering.

use std::sync::Arc;

use chrono::{Duration, Utc};
use courtside_core::{Clock, ManualClock};
use courtside_player::{Accounts, Player, PlayerDraft};
use courtside_room::{Address, RoomDraft};
use courtside_service::{Catalog, MembershipService, RoomSummary};
use courtside_store::MemoryStore;

// =========================================================================
// Helpers
// =========================================================================

struct Fixture {
    accounts: Accounts<MemoryStore>,
    service: MembershipService<MemoryStore, MemoryStore>,
    catalog: Catalog<MemoryStore, Arc<ManualClock>>,
    clock: Arc<ManualClock>,
}

/// Builds a fixture whose clock starts at the current wall time and only
/// moves when a test says so.
fn fixture() -> Fixture {
    let store = MemoryStore::new();
    let clock = Arc::new(ManualClock::fixed(Utc::now()));
    Fixture {
        accounts: Accounts::new(store.clone()),
        service: MembershipService::new(store.clone(), store.clone()),
        catalog: Catalog::new(store, Arc::clone(&clock)),
        clock,
    }
}

fn player_draft(email: &str) -> PlayerDraft {
    PlayerDraft {
        nickname: "player".into(),
        email: email.into(),
        password: "hunter2".into(),
        status_message: String::new(),
        profile: None,
    }
}

/// A draft starting one day after `now`, lasting three hours.
fn room_draft(title: &str, limit: usize, now: chrono::DateTime<Utc>) -> RoomDraft {
    RoomDraft {
        title: title.into(),
        intro: String::new(),
        address: Address::new("seoul", "songpa", "court 1"),
        start_time: now + Duration::days(1),
        end_time: now + Duration::days(1) + Duration::hours(3),
        players_limit: limit,
    }
}

async fn register(fx: &Fixture, email: &str) -> Player {
    fx.accounts.register(player_draft(email)).await.unwrap()
}

fn titles(summaries: &[RoomSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.title.as_str()).collect()
}

// =========================================================================
// find_all_unexpired_rooms()
// =========================================================================

#[tokio::test]
async fn test_unexpired_listing_keeps_open_future_rooms() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let now = fx.clock.now();
    fx.service.create(room_draft("open", 6, now), &master).await.unwrap();

    let listed = fx.catalog.find_all_unexpired_rooms().await.unwrap();

    assert_eq!(titles(&listed), ["open"]);
}

#[tokio::test]
async fn test_unexpired_listing_excludes_past_rooms() {
    // A room that ended an hour ago stays out of the browsing view even
    // though it still has open slots.
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let now = fx.clock.now();
    let mut past = room_draft("yesterday", 6, now);
    past.start_time = now - Duration::hours(4);
    past.end_time = now - Duration::hours(1);
    fx.service.create(past, &master).await.unwrap();
    fx.service.create(room_draft("tomorrow", 6, now), &master).await.unwrap();

    let listed = fx.catalog.find_all_unexpired_rooms().await.unwrap();

    assert_eq!(titles(&listed), ["tomorrow"]);
}

#[tokio::test]
async fn test_unexpired_listing_excludes_full_rooms() {
    // playersLimit=2: master plus one joiner fills the room, and the
    // browsing view must never show a room a new player cannot join.
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    register(&fx, "joiner@b.c").await;
    let now = fx.clock.now();
    let duo = fx.service.create(room_draft("duo", 2, now), &master).await.unwrap();
    fx.service.create(room_draft("roomy", 6, now), &master).await.unwrap();

    fx.service.join("joiner@b.c", duo.id).await.unwrap();

    let listed = fx.catalog.find_all_unexpired_rooms().await.unwrap();
    assert_eq!(titles(&listed), ["roomy"]);
}

#[tokio::test]
async fn test_room_expires_as_the_clock_passes_its_end() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let now = fx.clock.now();
    fx.service.create(room_draft("game", 6, now), &master).await.unwrap();
    assert_eq!(fx.catalog.find_all_unexpired_rooms().await.unwrap().len(), 1);

    // Jump past the end time: one day + three hours, and a bit more.
    fx.clock.advance(Duration::days(1) + Duration::hours(4));

    assert!(fx.catalog.find_all_unexpired_rooms().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unexpired_listing_preserves_registry_order() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let now = fx.clock.now();
    fx.service.create(room_draft("first", 6, now), &master).await.unwrap();
    fx.service.create(room_draft("second", 6, now), &master).await.unwrap();
    fx.service.create(room_draft("third", 6, now), &master).await.unwrap();

    let listed = fx.catalog.find_all_unexpired_rooms().await.unwrap();

    assert_eq!(titles(&listed), ["first", "second", "third"]);
}

// =========================================================================
// find_player_joined_rooms()
// =========================================================================

#[tokio::test]
async fn test_joined_listing_returns_exactly_the_players_rooms() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let joiner = register(&fx, "joiner@b.c").await;
    let now = fx.clock.now();
    let mine = fx.service.create(room_draft("mine", 6, now), &master).await.unwrap();
    fx.service.create(room_draft("not mine", 6, now), &master).await.unwrap();
    fx.service.join("joiner@b.c", mine.id).await.unwrap();

    let listed = fx.catalog.find_player_joined_rooms(&joiner).await.unwrap();

    assert_eq!(titles(&listed), ["mine"]);
}

#[tokio::test]
async fn test_joined_listing_keeps_full_and_expired_rooms() {
    // The scenario from the membership contract: a playersLimit=2 room
    // fills up, disappears from browsing, but stays visible to both of
    // its members — and keeps doing so after it expires.
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let joiner = register(&fx, "joiner@b.c").await;
    let now = fx.clock.now();
    let duo = fx.service.create(room_draft("duo", 2, now), &master).await.unwrap();
    fx.service.join("joiner@b.c", duo.id).await.unwrap();

    assert!(fx.catalog.find_all_unexpired_rooms().await.unwrap().is_empty());
    let for_master = fx.catalog.find_player_joined_rooms(&master).await.unwrap();
    let for_joiner = fx.catalog.find_player_joined_rooms(&joiner).await.unwrap();
    assert_eq!(titles(&for_master), ["duo"]);
    assert_eq!(titles(&for_joiner), ["duo"]);

    fx.clock.advance(Duration::days(2));

    let after_expiry = fx.catalog.find_player_joined_rooms(&joiner).await.unwrap();
    assert_eq!(titles(&after_expiry), ["duo"]);
}

#[tokio::test]
async fn test_joined_listing_empty_for_player_in_no_rooms() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let loner = register(&fx, "loner@b.c").await;
    let now = fx.clock.now();
    fx.service.create(room_draft("game", 6, now), &master).await.unwrap();

    let listed = fx.catalog.find_player_joined_rooms(&loner).await.unwrap();

    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_summaries_carry_projection_fields() {
    let fx = fixture();
    let master = register(&fx, "master@b.c").await;
    let now = fx.clock.now();
    let room = fx.service.create(room_draft("game", 6, now), &master).await.unwrap();

    let listed = fx.catalog.find_all_unexpired_rooms().await.unwrap();

    let summary = &listed[0];
    assert_eq!(summary.id, room.id);
    assert_eq!(summary.address, "seoul songpa court 1");
    assert_eq!(summary.master_email, "master@b.c");
    assert_eq!(summary.players_limit, 6);
    assert_eq!(summary.member_count, 1);
    assert!(summary.play_time.contains(" - "));
}
