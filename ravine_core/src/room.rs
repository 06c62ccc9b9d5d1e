use serde::Serialize;

/// Scenery reveal counters shared by every actor in the room.
///
/// `active` stays non-zero while a reveal is in progress; `alpha` is the
/// visibility level of the revealed geometry (255 is fully visible).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealCounters {
    pub active: i16,
    pub alpha: i16,
}

/// The slice of per-room state that actors in this crate write to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RoomContext {
    pub room_id: i8,
    pub reveal: RevealCounters,
}

impl RoomContext {
    pub fn new(room_id: i8) -> Self {
        Self {
            room_id,
            reveal: RevealCounters::default(),
        }
    }
}
