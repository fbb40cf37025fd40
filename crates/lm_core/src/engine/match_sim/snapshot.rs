//! Per-tick render data.
//!
//! The engine owns no display; it hands this frame to whatever consumes
//! it — a terminal renderer, a viewer, a test.

use serde::{Deserialize, Serialize};

use crate::models::player::Role;
use crate::models::team::TeamSide;

use super::{MatchEngine, MatchPhase};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub minute: u32,
    pub score_home: u8,
    pub score_away: u8,
    pub phase: MatchPhase,
    pub players: Vec<PlayerMarker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMarker {
    pub track_id: u8,
    pub is_home_team: bool,
    pub role: Role,
    pub x: i32,
    pub y: i32,
    pub has_ball: bool,
}

impl MatchEngine {
    pub fn frame(&self) -> RenderFrame {
        let (score_home, score_away) = self.score();
        RenderFrame {
            minute: self.minute(),
            score_home,
            score_away,
            phase: self.phase(),
            players: self
                .players()
                .iter()
                .enumerate()
                .map(|(track, p)| PlayerMarker {
                    track_id: track as u8,
                    is_home_team: TeamSide::of_track(track).is_home(),
                    role: p.role,
                    x: p.pos.x,
                    y: p.pos.y,
                    has_ball: p.has_ball,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::demo_engine;
    use super::*;
    use crate::engine::match_sim::InputCommand;

    #[test]
    fn test_frame_mirrors_engine_state() {
        let mut engine = demo_engine(71);
        engine.tick(InputCommand::Confirm);
        for _ in 0..30 {
            engine.tick(InputCommand::None);
        }
        let frame = engine.frame();
        assert_eq!(frame.players.len(), super::super::PLAYERS_ON_PITCH);
        assert_eq!(frame.minute, engine.minute());
        assert_eq!((frame.score_home, frame.score_away), engine.score());
        assert_eq!(frame.players.iter().filter(|m| m.has_ball).count(), engine.holder_count());
        for marker in &frame.players {
            let p = engine.player(marker.track_id as usize).unwrap();
            assert_eq!((marker.x, marker.y), (p.pos.x, p.pos.y));
        }
    }

    #[test]
    fn test_frame_serializes_for_external_consumers() {
        let mut engine = demo_engine(72);
        engine.tick(InputCommand::Confirm);
        let json = serde_json::to_value(engine.frame()).unwrap();
        assert_eq!(json["players"].as_array().unwrap().len(), 22);
        assert!(json["minute"].is_number());
    }
}
