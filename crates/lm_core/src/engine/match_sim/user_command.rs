//! Input events handed into the engine.
//!
//! One command per `tick` call; the engine never reads an input device
//! itself, so simulation stays decoupled from whatever the host polls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCommand {
    #[default]
    None,
    /// Start or restart play (kickoff, half-time, after a goal).
    Confirm,
    TogglePause,
    Quit,
}
