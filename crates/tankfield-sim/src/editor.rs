//! Level editor session.
//!
//! The editor owns a world of its own, populated from the same level
//! placements the engine loads. The cursor carries the currently
//! selected palette slot and is never registered in the world, so it
//! cannot collide with anything or be saved.

use glam::IVec2;
use hecs::World;
use thiserror::Error;

use tankfield_core::components::{Body, Placed};
use tankfield_core::constants::{TANK_SIZE, WALL_SIZE};
use tankfield_core::enums::{EntityKind, Faction, PaletteSlot};
use tankfield_core::level::{LevelError, Placement};
use tankfield_core::types::Rect;

use crate::collision::overlapping;
use crate::spawn;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("unknown editor action")]
    UnknownAction,
}

pub struct EditorSession {
    world: World,
    field: Rect,
    slot: PaletteSlot,
    cursor: Rect,
}

impl EditorSession {
    /// Open a session on an existing set of placements. Fails if they
    /// contain more than one player tank.
    pub fn new(field: Rect, placements: &[Placement]) -> Result<Self, LevelError> {
        let mut world = World::new();
        spawn::setup_level(&mut world, placements)?;
        let slot = PaletteSlot::Wall;
        Ok(Self {
            world,
            field,
            slot,
            cursor: Rect::from_center(field.center(), footprint(slot)),
        })
    }

    pub fn slot(&self) -> PaletteSlot {
        self.slot
    }

    pub fn cursor(&self) -> Rect {
        self.cursor
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Move the cursor so its footprint is centered on `center`. A
    /// move that would push the footprint out of the field is ignored.
    pub fn set_cursor(&mut self, center: IVec2) {
        let moved = Rect::from_center(center, self.cursor.size);
        if self.field.contains_rect(&moved) {
            self.cursor = moved;
        }
    }

    /// Cycle to the next palette slot. The cursor footprint follows
    /// the slot, keeping its center.
    pub fn next_slot(&mut self) {
        self.slot = self.slot.next();
        let center = self.cursor.center();
        self.cursor = Rect::from_center(center, footprint(self.slot));
        log::debug!("palette slot now {:?}", self.slot);
    }

    /// Place the selected entity at the cursor. Placement is refused
    /// without error when the footprint overlaps an existing entity or
    /// would add a second player tank. The delete slot cannot place.
    pub fn create(&mut self) -> Result<(), EditorError> {
        let kind = self.slot.kind().ok_or(EditorError::UnknownAction)?;

        if !overlapping(&self.world, self.cursor).is_empty() {
            return Ok(());
        }
        if kind == EntityKind::Player && self.has_player() {
            log::warn!("level already has a player tank");
            return Ok(());
        }

        let center = self.cursor.center();
        match kind {
            EntityKind::Wall => {
                spawn::spawn_wall(&mut self.world, center);
            }
            EntityKind::Player => {
                spawn::spawn_tank(&mut self.world, center, Faction::Player);
            }
            EntityKind::Enemy => {
                spawn::spawn_tank(&mut self.world, center, Faction::Enemy);
            }
        }
        Ok(())
    }

    /// Remove every placed entity the cursor footprint touches.
    pub fn delete(&mut self) {
        for entity in overlapping(&self.world, self.cursor) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Export the session as level placements, in ascending entity-id
    /// order so saved files are stable.
    pub fn placements(&self) -> Vec<Placement> {
        let mut rows: Vec<(u32, Placement)> = self
            .world
            .query::<(&Body, &Placed)>()
            .iter()
            .map(|(entity, (body, placed))| {
                (
                    entity.id(),
                    Placement {
                        kind: placed.kind,
                        center: body.rect.center(),
                    },
                )
            })
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, placement)| placement).collect()
    }

    fn has_player(&self) -> bool {
        self.world
            .query::<&Placed>()
            .iter()
            .any(|(_, placed)| placed.kind == EntityKind::Player)
    }
}

fn footprint(slot: PaletteSlot) -> IVec2 {
    match slot {
        PaletteSlot::Wall => IVec2::splat(WALL_SIZE),
        PaletteSlot::Player | PaletteSlot::Enemy => IVec2::splat(TANK_SIZE),
        PaletteSlot::Delete => IVec2::splat(WALL_SIZE),
    }
}
