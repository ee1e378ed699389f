//! Movement for tanks and shells.
//!
//! Both movers advance speculatively and then consult the shared
//! obstruction test. A tank reverts to its previous rectangle when the
//! new one is obstructed; a shell resolves the contact instead.

use hecs::{Entity, World};

use tankfield_core::components::{Body, Mobile, Shell, TankUnit};
use tankfield_core::enums::Facing;
use tankfield_core::events::AudioEvent;
use tankfield_core::types::Rect;

use crate::collision::{destroy_rule, obstructed, overlapping};
use crate::spawn;

/// Point a mover in a direction without changing whether it moves.
pub fn turn(world: &mut World, entity: Entity, facing: Facing) {
    if let Ok(mobile) = world.query_one_mut::<&mut Mobile>(entity) {
        mobile.facing = facing;
        mobile.delta = facing.delta(mobile.speed);
    }
}

/// Halt a mover in place. Its facing is untouched.
pub fn stop(world: &mut World, entity: Entity) {
    if let Ok(mobile) = world.query_one_mut::<&mut Mobile>(entity) {
        mobile.moving = false;
    }
}

/// Advance a tank one step along its facing. Marks the tank as moving,
/// then reverts the step entirely if the destination leaves the field
/// or touches any other body. Reverting does not clear the moving
/// flag; the tank keeps trying on later ticks.
pub fn tank_move(world: &mut World, entity: Entity, field: Rect) {
    let (old, probe) = match world.query_one_mut::<(&mut Body, &mut Mobile)>(entity) {
        Ok((body, mobile)) => {
            mobile.moving = true;
            let old = body.rect;
            body.rect = body.rect.translated(mobile.delta);
            (old, body.rect)
        }
        Err(_) => return,
    };

    if obstructed(world, probe, field) {
        if let Ok(body) = world.query_one_mut::<&mut Body>(entity) {
            body.rect = old;
        }
    }
}

/// Advance a shell one step. An unobstructed shell just flies on.
///
/// An obstructed shell with contacts applies the destruction rule to
/// every overlapped body except itself; bodies its own faction owns
/// and indestructible bodies survive. The shell is not removed in that
/// branch, so a shell lodged inside a wall keeps advancing through it.
/// An obstructed shell with no contact left the field and despawns.
pub fn shell_move(world: &mut World, shell: Entity, field: Rect, audio_events: &mut Vec<AudioEvent>) {
    let probe = match world.query_one_mut::<(&mut Body, &Mobile)>(shell) {
        Ok((body, mobile)) => {
            body.rect = body.rect.translated(mobile.delta);
            body.rect
        }
        Err(_) => return,
    };

    if !obstructed(world, probe, field) {
        return;
    }

    let faction = match world.get::<&Shell>(shell) {
        Ok(component) => component.faction,
        Err(_) => return,
    };

    let hits = overlapping(world, probe);
    if hits.len() > 1 {
        for hit in hits {
            if hit == shell {
                continue;
            }
            let indestructible = match world.get::<&Body>(hit) {
                Ok(body) => body.indestructible,
                Err(_) => continue,
            };
            if indestructible {
                continue;
            }
            let target_tank = world.get::<&TankUnit>(hit).ok().map(|tank| tank.faction);
            if destroy_rule(faction, target_tank) {
                spawn::destroy(world, hit, audio_events);
            }
        }
    } else {
        let _ = world.despawn(shell);
    }
}
