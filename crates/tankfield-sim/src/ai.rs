//! Enemy tank policy.
//!
//! A fixed, memoryless random walk: one uniform [0,1) draw per enemy
//! per tick is partitioned into four equal turn bands, one fire band,
//! and a large "keep doing what you're doing" remainder. Pure function
//! of the sample — no ECS dependency — so tests can drive it with
//! chosen samples and the engine with its seeded RNG.

use tankfield_core::constants::{ENEMY_ROTATE, ENEMY_SHOOT};
use tankfield_core::enums::Facing;

/// What an enemy tank does this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Face a direction and attempt a move.
    Turn(Facing),
    /// Stop and fire.
    Shoot,
    /// Keep the current motion (re-attempt the move if already moving).
    Continue,
}

/// Partition the uniform sample into the policy bands.
pub fn decide(sample: f64) -> EnemyAction {
    if sample <= ENEMY_ROTATE {
        EnemyAction::Turn(Facing::Up)
    } else if sample <= 2.0 * ENEMY_ROTATE {
        EnemyAction::Turn(Facing::Left)
    } else if sample <= 3.0 * ENEMY_ROTATE {
        EnemyAction::Turn(Facing::Down)
    } else if sample <= 4.0 * ENEMY_ROTATE {
        EnemyAction::Turn(Facing::Right)
    } else if sample <= 4.0 * ENEMY_ROTATE + ENEMY_SHOOT {
        EnemyAction::Shoot
    } else {
        EnemyAction::Continue
    }
}
