//! Match flow states and the simulated clock.

use serde::{Deserialize, Serialize};

use crate::models::team::TeamSide;

/// Match flow states. `AwaitingKickoff` doubles as the restart gate after
/// goals and at the start of each half: the outer loop polls it and feeds
/// a `Confirm` command instead of the engine blocking on an input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    AwaitingKickoff { side: TeamSide },
    Running,
    Paused,
    HalfBreak,
    Ended,
}

impl MatchPhase {
    pub fn is_ended(&self) -> bool {
        matches!(self, MatchPhase::Ended)
    }

    /// Whether this phase waits for a `Confirm` from the outer loop.
    pub fn awaits_confirmation(&self) -> bool {
        matches!(self, MatchPhase::AwaitingKickoff { .. } | MatchPhase::HalfBreak)
    }
}

/// Simulated match clock. Monotonic; advances only while the match runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchClock {
    minutes: f64,
    ticks: u64,
    tick_minutes: f64,
}

impl MatchClock {
    pub fn new(tick_minutes: f64) -> Self {
        Self { minutes: 0.0, ticks: 0, tick_minutes }
    }

    pub fn advance(&mut self) {
        self.ticks += 1;
        self.minutes += self.tick_minutes;
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Display minute, quantized to an integer.
    pub fn minute(&self) -> u32 {
        self.minutes.round() as u32
    }
}
