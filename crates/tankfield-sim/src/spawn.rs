//! Entity lifecycle: spawn factories, firing, and destruction.
//!
//! Creation registers the entity in the world immediately; despawning
//! is the sole destruction mechanism. Tank destruction leaves a blast
//! behind.

use glam::IVec2;
use hecs::{Entity, World};

use tankfield_core::components::{Blast, Body, Mobile, Placed, Shell, TankUnit};
use tankfield_core::constants::*;
use tankfield_core::enums::{EntityKind, Facing, Faction};
use tankfield_core::events::AudioEvent;
use tankfield_core::level::{LevelError, Placement};
use tankfield_core::types::Rect;

use crate::systems::movement;

/// Populate a world from level placements. Returns the player entity
/// if the level has one; a second player is rejected.
pub fn setup_level(world: &mut World, placements: &[Placement]) -> Result<Option<Entity>, LevelError> {
    let mut player = None;
    for placement in placements {
        match placement.kind {
            EntityKind::Wall => {
                spawn_wall(world, placement.center);
            }
            EntityKind::Player => {
                if player.is_some() {
                    return Err(LevelError::MorePlayers);
                }
                player = Some(spawn_tank(world, placement.center, Faction::Player));
            }
            EntityKind::Enemy => {
                spawn_tank(world, placement.center, Faction::Enemy);
            }
        }
    }
    Ok(player)
}

/// Spawn an indestructible wall centered at `center`.
pub fn spawn_wall(world: &mut World, center: IVec2) -> Entity {
    world.spawn((
        Body {
            rect: Rect::from_center(center, IVec2::splat(WALL_SIZE)),
            indestructible: true,
        },
        Placed {
            kind: EntityKind::Wall,
        },
    ))
}

/// Spawn a tank of the given faction centered at `center`, facing up
/// and stationary.
pub fn spawn_tank(world: &mut World, center: IVec2, faction: Faction) -> Entity {
    let kind = match faction {
        Faction::Player => EntityKind::Player,
        Faction::Enemy => EntityKind::Enemy,
    };
    world.spawn((
        Body {
            rect: Rect::from_center(center, IVec2::splat(TANK_SIZE)),
            indestructible: false,
        },
        Mobile {
            facing: Facing::Up,
            delta: Facing::Up.delta(TANK_SPEED),
            speed: TANK_SPEED,
            moving: false,
        },
        TankUnit { faction },
        Placed { kind },
    ))
}

/// Spawn a shell at the off-field (0,0) placeholder; `shoot` aligns it
/// to the firing tank before its first move.
pub fn spawn_shell(world: &mut World, faction: Faction) -> Entity {
    world.spawn((
        Body {
            rect: Rect::from_center(IVec2::ZERO, IVec2::splat(SHELL_SIZE)),
            indestructible: false,
        },
        Mobile {
            facing: Facing::Up,
            delta: Facing::Up.delta(SHELL_SPEED),
            speed: SHELL_SPEED,
            moving: false,
        },
        Shell { faction },
    ))
}

/// Spawn an explosion effect centered at `center` and play its sound.
pub fn spawn_blast(world: &mut World, center: IVec2, audio_events: &mut Vec<AudioEvent>) -> Entity {
    audio_events.push(AudioEvent::Explosion { center });
    world.spawn((
        Body {
            rect: Rect::from_center(center, IVec2::splat(BLAST_SIZE)),
            indestructible: true,
        },
        Blast::default(),
    ))
}

/// Kill an entity. Tanks leave exactly one blast at their last center;
/// everything else just deregisters. Idempotent for absent entities.
pub fn destroy(world: &mut World, entity: Entity, audio_events: &mut Vec<AudioEvent>) {
    let tank_center = match world.query_one_mut::<(&Body, &TankUnit)>(entity) {
        Ok((body, _)) => Some(body.rect.center()),
        Err(_) => None,
    };

    if world.despawn(entity).is_err() {
        return;
    }
    if let Some(center) = tank_center {
        log::debug!("tank destroyed at {center}");
        spawn_blast(world, center, audio_events);
    }
}

/// Fire a shell from `tank`: spawn it, align it to the facing edge of
/// the tank (top/left/bottom/right center), match its facing, then run
/// one move so it starts clear of the firer's own body.
pub fn shoot(world: &mut World, tank: Entity, field: Rect, audio_events: &mut Vec<AudioEvent>) {
    let Ok((body, mobile, unit)) = world.query_one_mut::<(&Body, &Mobile, &TankUnit)>(tank) else {
        return;
    };
    let tank_rect = body.rect;
    let facing = mobile.facing;
    let faction = unit.faction;

    audio_events.push(AudioEvent::Shot { faction });

    let shell = spawn_shell(world, faction);
    if let Ok((body, mobile)) = world.query_one_mut::<(&mut Body, &mut Mobile)>(shell) {
        match facing {
            Facing::Up => body.rect.set_mid_top(tank_rect.mid_top()),
            Facing::Left => body.rect.set_mid_left(tank_rect.mid_left()),
            Facing::Down => body.rect.set_mid_bottom(tank_rect.mid_bottom()),
            Facing::Right => body.rect.set_mid_right(tank_rect.mid_right()),
        }
        mobile.facing = facing;
        mobile.delta = facing.delta(mobile.speed);
    }

    movement::shell_move(world, shell, field, audio_events);
}
