//! Game state snapshot — the complete visible state sent to the
//! frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Facing, Outcome, SpriteKind};
use crate::events::AudioEvent;
use crate::types::{Rect, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub outcome: Outcome,
    /// Live entities in ascending entity-id order.
    pub entities: Vec<EntityView>,
    /// Sounds triggered during this tick.
    pub audio_events: Vec<AudioEvent>,
    /// Live enemy tanks (the win-check counter, surfaced for HUDs).
    pub enemy_count: u32,
}

/// One live entity as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable entity id within this run.
    pub id: u32,
    pub sprite: SpriteKind,
    /// Current bounding rectangle in field pixels.
    pub rect: Rect,
    /// Rotated-sprite selection for mobile entities; None for walls
    /// and explosions.
    pub facing: Option<Facing>,
}
