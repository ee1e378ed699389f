//! Snapshot assembly: serialize the world into the per-tick view the
//! frontend renders from.

use hecs::World;

use tankfield_core::components::{Blast, Body, Mobile, Shell, TankUnit};
use tankfield_core::enums::{Faction, Outcome, SpriteKind};
use tankfield_core::events::AudioEvent;
use tankfield_core::state::{EntityView, GameSnapshot};
use tankfield_core::types::SimTime;

use crate::collision;

/// Build the tick snapshot. Entities appear in ascending id order so
/// the stream is stable across runs of the same seed.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    outcome: Outcome,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    let mut entities: Vec<EntityView> = Vec::new();

    for (entity, (body, mobile, shell, tank, blast)) in world
        .query::<(
            &Body,
            Option<&Mobile>,
            Option<&Shell>,
            Option<&TankUnit>,
            Option<&Blast>,
        )>()
        .iter()
    {
        let sprite = if blast.is_some() {
            SpriteKind::Blast
        } else if shell.is_some() {
            SpriteKind::Shell
        } else if let Some(tank) = tank {
            match tank.faction {
                Faction::Player => SpriteKind::PlayerTank,
                Faction::Enemy => SpriteKind::EnemyTank,
            }
        } else {
            SpriteKind::Wall
        };

        entities.push(EntityView {
            id: entity.id(),
            sprite,
            rect: body.rect,
            facing: mobile.map(|mobile| mobile.facing),
        });
    }
    entities.sort_by_key(|view| view.id);

    GameSnapshot {
        time,
        outcome,
        entities,
        audio_events,
        enemy_count: collision::enemy_count(world) as u32,
    }
}
