//! Identity newtypes shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a player.
///
/// Newtype wrapper over `u64` so a player id can never be confused with a
/// room id, even though both are plain integers underneath.
///
/// `#[serde(transparent)]` serializes this as the bare number, not as a
/// one-field struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for a room.
///
/// `Ord` matters here: ids are minted from an ascending counter, so
/// ordering by `RoomId` is creation order. The registry relies on this
/// for its stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_with_prefix() {
        assert_eq!(PlayerId(7).to_string(), "P-7");
        assert_eq!(RoomId(42).to_string(), "R-42");
    }

    #[test]
    fn test_room_id_orders_by_value() {
        assert!(RoomId(1) < RoomId(2));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&RoomId(3)).unwrap();
        assert_eq!(json, "3");
        let back: RoomId = serde_json::from_str("3").unwrap();
        assert_eq!(back, RoomId(3));
    }
}
