//! Input from the host to the simulation.
//!
//! Scene-level actions are commands, queued and processed at the next tick
//! boundary. Flight controls are polled: the host overwrites an
//! [`InputState`] whenever its devices change and the simulation reads it
//! once per tick.

use serde::{Deserialize, Serialize};

/// Scene-level actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Generate the map and launch the ship into the home room.
    StartSector,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}

/// Held state of every flight control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub reverse: bool,
    pub shield: bool,
    pub fire: bool,
    /// Enter a wormhole when close to an exit marker.
    pub wormhole: bool,
    /// Relaunch after a death. Read even while input is locked.
    pub relaunch: bool,
}
