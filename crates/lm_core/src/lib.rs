//! # lm_core - Tick-Driven Live Match Simulation Engine
//!
//! A cooperative, single-threaded football match simulator: per-tick
//! updates of up to 22 players, a single ball-possession token,
//! probabilistic event resolution (dribble, tackle, pass, shot) and
//! collision-free movement via grid BFS.
//!
//! ## Features
//! - Deterministic simulation (same plan + seed = same result)
//! - Explicit input events; the engine never touches an input device
//! - Per-tick render frames for any display layer
//! - Final score reported exactly once per match

pub mod engine;
pub mod error;
pub mod models;

pub use engine::{
    AttackDirection, EngineConfig, EventType, Formation, GridPos, InputCommand, MatchEngine,
    MatchEvent, MatchPhase, MatchPlan, Pitch, RenderFrame, TacticalPreset,
};
pub use error::{EngineError, Result};
pub use models::{MatchReport, Role, SheetEntry, TeamSheet, TeamSide, LINEUP_SIZE};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
