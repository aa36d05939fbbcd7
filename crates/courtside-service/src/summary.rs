//! The presentation projection of a room.

use courtside_core::RoomId;
use courtside_room::Room;
use serde::Serialize;

/// Format for both ends of the displayed time range.
const PLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A read-only, presentation-shaped view of a room.
///
/// This is what the catalog hands to the transport layer — never the
/// aggregate itself. The mapping is pure and deterministic: same room
/// in, same summary out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub title: String,
    pub intro: String,
    /// One line: "city section detail".
    pub address: String,
    /// "start - end", both `%Y-%m-%d %H:%M`.
    pub play_time: String,
    pub players_limit: usize,
    pub master_email: String,
    pub member_count: usize,
}

impl RoomSummary {
    /// Projects a room into its catalog row.
    pub fn project(room: &Room) -> Self {
        Self {
            id: room.id,
            title: room.title.clone(),
            intro: room.intro.clone(),
            address: room.address.to_string(),
            play_time: format!(
                "{} - {}",
                room.start_time.format(PLAY_TIME_FORMAT),
                room.end_time.format(PLAY_TIME_FORMAT),
            ),
            players_limit: room.players_limit,
            master_email: room.master_email().to_owned(),
            member_count: room.member_count(),
        }
    }
}
