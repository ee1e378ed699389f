//! Per-entity update systems dispatched by the engine each tick.

pub mod explosion;
pub mod movement;
pub mod snapshot;
