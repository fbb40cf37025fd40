//! Match engine internals: pitch geometry, the per-tick occupancy grid,
//! grid pathfinding, formation assignment, pure action resolvers, and the
//! tick-driven simulation itself.

pub mod actions;
pub mod config;
pub mod events;
pub mod formation;
pub mod grid;
pub mod match_sim;
pub mod pathfind;
pub mod pitch;

pub use config::{EngineConfig, TacticalPreset};
pub use events::{EventType, MatchEvent};
pub use formation::Formation;
pub use match_sim::{
    InputCommand, MatchEngine, MatchPhase, MatchPlan, MatchPlayer, RenderFrame,
};
pub use pitch::{AttackDirection, GridPos, Pitch};
