//! Formation templates and home-coordinate assignment.
//!
//! A template is one relative `(x%, y%)` anchor plus a role per lineup
//! slot. Anchors span the whole pitch and are compressed into the team's
//! own half at assignment time, mirrored for the side attacking leftward.
//! The goalkeeper ignores its anchor and takes the column next to its own
//! goal line.

use serde::{Deserialize, Serialize};

use crate::models::player::Role;
use crate::models::team::LINEUP_SIZE;

use super::pitch::{AttackDirection, GridPos, Pitch};

/// Named formation templates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "3-5-2")]
    F352,
}

impl Formation {
    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F433 => "4-3-3",
            Formation::F442 => "4-4-2",
            Formation::F352 => "3-5-2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "4-3-3" => Some(Formation::F433),
            "4-4-2" => Some(Formation::F442),
            "3-5-2" => Some(Formation::F352),
            _ => None,
        }
    }

    /// Role played in each lineup slot, goalkeeper first.
    pub fn slot_roles(&self) -> [Role; LINEUP_SIZE] {
        use Role::{Defender as D, Forward as F, Goalkeeper as G, Midfielder as M};
        match self {
            Formation::F433 => [G, D, D, D, D, M, M, M, F, F, F],
            Formation::F442 => [G, D, D, D, D, M, M, M, M, F, F],
            Formation::F352 => [G, D, D, D, M, M, M, M, M, F, F],
        }
    }

    /// Relative `(x%, y%)` anchor per slot, 0..1 across the full pitch.
    fn anchors(&self) -> &'static [(f32, f32); LINEUP_SIZE] {
        match self {
            Formation::F433 => &[
                (0.05, 0.50),
                (0.20, 0.20),
                (0.20, 0.80),
                (0.40, 0.30),
                (0.40, 0.70),
                (0.55, 0.50),
                (0.70, 0.30),
                (0.70, 0.70),
                (0.85, 0.40),
                (0.90, 0.30),
                (0.90, 0.70),
            ],
            Formation::F442 => &[
                (0.05, 0.50),
                (0.20, 0.15),
                (0.20, 0.38),
                (0.20, 0.62),
                (0.20, 0.85),
                (0.55, 0.15),
                (0.55, 0.38),
                (0.55, 0.62),
                (0.55, 0.85),
                (0.85, 0.35),
                (0.85, 0.65),
            ],
            Formation::F352 => &[
                (0.05, 0.50),
                (0.22, 0.25),
                (0.22, 0.50),
                (0.22, 0.75),
                (0.50, 0.10),
                (0.55, 0.30),
                (0.55, 0.50),
                (0.55, 0.70),
                (0.50, 0.90),
                (0.85, 0.35),
                (0.85, 0.65),
            ],
        }
    }
}

/// Scale a formation's anchors into the pitch for one side.
///
/// Runs at kickoff and again at the half-time handoff with the same
/// direction flag; identical inputs yield identical homes.
pub fn assign_home_positions(
    formation: Formation,
    pitch: &Pitch,
    direction: AttackDirection,
) -> [GridPos; LINEUP_SIZE] {
    let anchors = formation.anchors();
    let roles = formation.slot_roles();
    let mut homes = [GridPos::new(0, 0); LINEUP_SIZE];

    for (slot, &(rx, ry)) in anchors.iter().enumerate() {
        let home = if roles[slot].is_goalkeeper() {
            GridPos::new(pitch.own_goal_column(direction), pitch.center_y())
        } else {
            // Compress into the defending half; mirror for the side
            // attacking leftward.
            let scaled = match direction {
                AttackDirection::Right => rx * 0.5,
                AttackDirection::Left => 1.0 - rx * 0.5,
            };
            GridPos::new(
                pitch.left + (scaled * (pitch.right - pitch.left) as f32) as i32,
                pitch.top + (ry * (pitch.bottom - pitch.top) as f32) as i32,
            )
        };
        homes[slot] = pitch.clamp(home);
    }

    homes
}
