//! Cleanup system: removes expired projectiles and dead enemies.

use hecs::{Entity, World};

use negspace_core::components::{Enemy, Projectile};
use negspace_core::enums::LifePhase;

use crate::map::GameMap;

/// Despawn projectiles that are no longer alive and enemies that finished
/// dying, then drop despawned entities from the room rosters.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, map: &mut GameMap, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if !projectile.alive {
            despawn_buffer.push(entity);
        }
    }

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.phase == LifePhase::Dead {
            despawn_buffer.push(entity);
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for room in map.rooms_mut() {
        room.enemies.retain(|e| world.contains(*e));
    }
}
