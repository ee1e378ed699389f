//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Facing, Faction};
use crate::types::Rect;

/// Physical presence on the playfield. Every live entity has one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Axis-aligned bounding rectangle (position + fixed sprite size).
    pub rect: Rect,
    /// Exempt from shell destroy rules (walls, explosions).
    pub indestructible: bool,
}

/// Directional motion state for tanks and shells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobile {
    pub facing: Facing,
    /// Pending per-tick delta. Axis-aligned; magnitude equals `speed`.
    pub delta: IVec2,
    /// Fixed per-type speed constant (pixels per tick).
    pub speed: i32,
    /// A moving entity re-attempts its move every tick; a stopped one
    /// does nothing.
    pub moving: bool,
}

/// A tank, player- or enemy-faction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TankUnit {
    pub faction: Faction,
}

/// A fired shell. Faction is inherited from the firer and decides which
/// tank type it must not destroy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shell {
    pub faction: Faction,
}

/// Short-lived explosion effect left behind by a destroyed tank.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Blast {
    /// Elapsed ticks since creation; despawns at BLAST_TICKS.
    pub age: u32,
}

/// Remembered level type-tag, attached to level-placeable entities
/// (walls and tanks). Used by the editor to write levels back out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Placed {
    pub kind: EntityKind,
}
