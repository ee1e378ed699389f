//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Facing;

/// All possible player actions during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Face a direction and start moving (key down). The turn also
    /// attempts one immediate move.
    Turn { facing: Facing },
    /// Stop moving (key up).
    Stop,
    /// Stop and fire a shell in the current facing.
    Shoot,
}
