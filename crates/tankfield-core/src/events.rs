//! Events emitted by the simulation for audio feedback.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::Faction;

/// Audio events for the frontend sound system. Sound loading/mixing is
/// a frontend concern; a missing sound degrades to silence out there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A tank fired a shell.
    Shot { faction: Faction },
    /// A tank blew up at the given pixel center.
    Explosion { center: IVec2 },
}
