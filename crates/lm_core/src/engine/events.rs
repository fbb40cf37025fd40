//! Textual event notices for the log/console sink.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u32,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub is_home_team: bool,
    /// Track id (0..21) of the primary actor, if any.
    pub player_track_id: Option<u8>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Match start, restart after a goal, or second-half restart.
    KickOff,
    Goal,
    Save,
    Tackle,
    Interception,
    HalfTime,
    FullTime,
}

impl MatchEvent {
    fn new(minute: u32, event_type: EventType, is_home_team: bool, track: Option<usize>) -> Self {
        Self { minute, event_type, is_home_team, player_track_id: track.map(|t| t as u8) }
    }

    pub fn kick_off(minute: u32, is_home_team: bool, track: usize) -> Self {
        Self::new(minute, EventType::KickOff, is_home_team, Some(track))
    }

    pub fn goal(minute: u32, is_home_team: bool, scorer: usize) -> Self {
        Self::new(minute, EventType::Goal, is_home_team, Some(scorer))
    }

    pub fn save(minute: u32, is_home_team: bool, keeper: usize) -> Self {
        Self::new(minute, EventType::Save, is_home_team, Some(keeper))
    }

    pub fn tackle(minute: u32, is_home_team: bool, tackler: usize) -> Self {
        Self::new(minute, EventType::Tackle, is_home_team, Some(tackler))
    }

    pub fn interception(minute: u32, is_home_team: bool, passer: usize) -> Self {
        Self::new(minute, EventType::Interception, is_home_team, Some(passer))
    }

    pub fn half_time(minute: u32) -> Self {
        Self::new(minute, EventType::HalfTime, false, None)
    }

    pub fn full_time(minute: u32) -> Self {
        Self::new(minute, EventType::FullTime, false, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_shape() {
        let event = MatchEvent::goal(45, true, 9);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "goal");
        assert_eq!(json["minute"], 45);
        assert_eq!(json["is_home_team"], true);
        assert_eq!(json["player_track_id"], 9);
    }

    #[test]
    fn test_whistle_events_carry_no_actor() {
        assert_eq!(MatchEvent::half_time(45).player_track_id, None);
        assert_eq!(MatchEvent::full_time(90).player_track_id, None);
    }
}
