//! Enumeration types used throughout the simulation.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Facing/orientation of a mobile entity. Also selects the rotated
/// sprite variant on the render side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Up,
    Left,
    Down,
    Right,
}

impl Facing {
    /// Per-tick movement delta for this facing at the given speed.
    /// Always axis-aligned, never diagonal.
    pub fn delta(self, speed: i32) -> IVec2 {
        match self {
            Facing::Up => IVec2::new(0, -speed),
            Facing::Left => IVec2::new(-speed, 0),
            Facing::Down => IVec2::new(0, speed),
            Facing::Right => IVec2::new(speed, 0),
        }
    }
}

/// Player or enemy affiliation. Governs which shells may harm which tanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Level-file entity tags. The numeric values are the on-disk format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Wall,
    Player,
    Enemy,
}

impl EntityKind {
    /// On-disk tag for the level file format.
    pub fn tag(self) -> u8 {
        match self {
            EntityKind::Wall => 0,
            EntityKind::Player => 1,
            EntityKind::Enemy => 2,
        }
    }

    /// Parse an on-disk tag. Unknown tags are a format error.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(EntityKind::Wall),
            1 => Some(EntityKind::Player),
            2 => Some(EntityKind::Enemy),
            _ => None,
        }
    }
}

/// Editor palette slots, cycled in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteSlot {
    #[default]
    Wall,
    Player,
    Enemy,
    Delete,
}

impl PaletteSlot {
    /// Next slot in the cycle, wrapping after Delete.
    pub fn next(self) -> Self {
        match self {
            PaletteSlot::Wall => PaletteSlot::Player,
            PaletteSlot::Player => PaletteSlot::Enemy,
            PaletteSlot::Enemy => PaletteSlot::Delete,
            PaletteSlot::Delete => PaletteSlot::Wall,
        }
    }

    /// The entity kind this slot places, if it places one.
    pub fn kind(self) -> Option<EntityKind> {
        match self {
            PaletteSlot::Wall => Some(EntityKind::Wall),
            PaletteSlot::Player => Some(EntityKind::Player),
            PaletteSlot::Enemy => Some(EntityKind::Enemy),
            PaletteSlot::Delete => None,
        }
    }
}

/// Game-over state evaluated after each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// All enemy tanks destroyed.
    Victory,
    /// Player tank destroyed (or absent).
    Defeat,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Playing
    }
}

/// Sprite selection for the renderer, keyed to fixed asset filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Wall,
    PlayerTank,
    EnemyTank,
    Shell,
    Blast,
}

impl SpriteKind {
    /// Asset filename the frontend image loader is keyed by.
    pub fn asset(self) -> &'static str {
        match self {
            SpriteKind::Wall => STONE_IMAGE,
            SpriteKind::PlayerTank => PLAYER_IMAGE,
            SpriteKind::EnemyTank => ENEMY_IMAGE,
            SpriteKind::Shell => BULLET_IMAGE,
            SpriteKind::Blast => BANG_IMAGE,
        }
    }
}
