//! Collision queries over the entity registry.
//!
//! The hecs `World` is the single shared collection of live entities;
//! these functions are the query protocol every mover and the editor
//! depend on. All calls are synchronous within one tick.

use hecs::{Entity, World};

use tankfield_core::components::{Body, TankUnit};
use tankfield_core::enums::Faction;
use tankfield_core::types::Rect;

/// Every registered entity whose body intersects `rect`, in ascending
/// entity-id order. The probing entity itself is included when its
/// body holds `rect` (a rectangle always intersects itself).
pub fn overlapping(world: &World, rect: Rect) -> Vec<Entity> {
    let mut hits: Vec<Entity> = world
        .query::<&Body>()
        .iter()
        .filter(|(_, body)| body.rect.intersects(&rect))
        .map(|(entity, _)| entity)
        .collect();
    hits.sort_by_key(|entity| entity.id());
    hits
}

/// Obstruction test for a speculative move: true if `rect` exits the
/// field bounds on any side, or if anything besides its owner overlaps
/// it (more than one hit, the owner's own body being the first).
pub fn obstructed(world: &World, rect: Rect, field: Rect) -> bool {
    if !field.contains_rect(&rect) {
        return true;
    }
    overlapping(world, rect).len() > 1
}

/// Number of live enemy-faction tanks (the win-check counter).
pub fn enemy_count(world: &World) -> usize {
    world
        .query::<&TankUnit>()
        .iter()
        .filter(|(_, tank)| tank.faction == Faction::Enemy)
        .count()
}

/// Whether a shell of `shell` faction destroys an overlapped target.
///
/// Targets are identified only by their tank faction, if any — no type
/// introspection. A shell never destroys a tank of its own faction;
/// every other non-indestructible target (opposing tanks, shells of
/// either faction) is destroyed. Indestructibility is checked by the
/// caller before this rule applies.
pub fn destroy_rule(shell: Faction, target_tank: Option<Faction>) -> bool {
    target_tank != Some(shell)
}

#[cfg(test)]
mod tests {
    use super::destroy_rule;
    use tankfield_core::enums::Faction;

    #[test]
    fn test_destroy_rule_spares_own_faction_only() {
        // Player shell: spares player tanks, kills enemy tanks and
        // everything untagged (shells).
        assert!(!destroy_rule(Faction::Player, Some(Faction::Player)));
        assert!(destroy_rule(Faction::Player, Some(Faction::Enemy)));
        assert!(destroy_rule(Faction::Player, None));

        // Enemy shell: the mirror image.
        assert!(!destroy_rule(Faction::Enemy, Some(Faction::Enemy)));
        assert!(destroy_rule(Faction::Enemy, Some(Faction::Player)));
        assert!(destroy_rule(Faction::Enemy, None));
    }
}
