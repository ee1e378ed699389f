//! Blast lifetime.

use hecs::{Entity, World};

use tankfield_core::components::Blast;
use tankfield_core::constants::BLAST_TICKS;

/// Age a blast by one tick and despawn it once it has lived a full
/// `BLAST_TICKS` ticks.
pub fn update(world: &mut World, entity: Entity) {
    let expired = match world.query_one_mut::<&mut Blast>(entity) {
        Ok(blast) => {
            blast.age += 1;
            blast.age >= BLAST_TICKS
        }
        Err(_) => return,
    };

    if expired {
        let _ = world.despawn(entity);
    }
}
