//! Engine tunables. Defaults mirror the classic console balance; hosts can
//! deserialize overrides from JSON.

use serde::{Deserialize, Serialize};

/// Named tactical presets. Nominal base-probability adjustments only; no
/// deeper tactical modeling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TacticalPreset {
    #[default]
    Balanced,
    Attacking,
    Defensive,
}

impl TacticalPreset {
    /// Added to the base shot-attempt chances.
    pub fn shot_bonus(&self) -> f64 {
        match self {
            TacticalPreset::Balanced => 0.0,
            TacticalPreset::Attacking => 0.05,
            TacticalPreset::Defensive => -0.05,
        }
    }

    /// Added to the base per-defender tackle chance.
    pub fn tackle_bonus(&self) -> f64 {
        match self {
            TacticalPreset::Balanced => 0.0,
            TacticalPreset::Attacking => -0.01,
            TacticalPreset::Defensive => 0.01,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Simulated minutes added per tick.
    pub tick_minutes: f64,
    pub half_time_minute: f64,
    pub full_time_minute: f64,

    /// A pass is considered every this many ticks.
    pub pass_interval: u64,
    /// A shot is considered every this many ticks.
    pub shot_interval: u64,

    pub tackle_radius: f64,
    /// Per-defender chance per tackle check.
    pub tackle_chance: f64,
    pub interception_chance: f64,
    pub shot_chance_attacking: f64,
    pub shot_chance_defensive: f64,
    pub save_chance: f64,

    /// Holder drift per tick in its own half.
    pub dribble_step_own_half: i32,
    /// Holder drift range per tick in the attacking half.
    pub dribble_step_attacking_min: i32,
    pub dribble_step_attacking_max: i32,

    /// How far outfielders push past their home when their team has the ball.
    pub attack_offset: i32,
    /// Players this close to their own holder push up further.
    pub support_radius: f64,
    pub support_offset: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_minutes: 0.1,
            half_time_minute: 45.0,
            full_time_minute: 90.0,
            pass_interval: 10,
            shot_interval: 20,
            tackle_radius: 3.0,
            tackle_chance: 0.05,
            interception_chance: 0.01,
            shot_chance_attacking: 0.5,
            shot_chance_defensive: 0.3,
            save_chance: 0.4,
            dribble_step_own_half: 1,
            dribble_step_attacking_min: 2,
            dribble_step_attacking_max: 3,
            attack_offset: 10,
            support_radius: 5.0,
            support_offset: 5,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.tick_minutes <= 0.0 {
            return Err(format!("tick_minutes must be positive, got {}", self.tick_minutes));
        }
        if self.half_time_minute <= 0.0 || self.full_time_minute <= self.half_time_minute {
            return Err(format!(
                "half/full time out of order: {} / {}",
                self.half_time_minute, self.full_time_minute
            ));
        }
        if self.pass_interval == 0 || self.shot_interval == 0 {
            return Err("pass_interval and shot_interval must be non-zero".to_string());
        }
        if self.tackle_radius < 0.0 || self.support_radius < 0.0 {
            return Err("radii must be non-negative".to_string());
        }
        for (name, p) in [
            ("tackle_chance", self.tackle_chance),
            ("interception_chance", self.interception_chance),
            ("shot_chance_attacking", self.shot_chance_attacking),
            ("shot_chance_defensive", self.shot_chance_defensive),
            ("save_chance", self.save_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{} must be within 0..=1, got {}", name, p));
            }
        }
        if self.dribble_step_own_half < 0
            || self.dribble_step_attacking_min < 0
            || self.dribble_step_attacking_max < self.dribble_step_attacking_min
        {
            return Err("dribble steps out of order".to_string());
        }
        Ok(())
    }
}
