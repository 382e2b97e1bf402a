//! Kinematic integration system for enemies.
//!
//! Updates Position from Velocity and rotation from spin each tick. The ship
//! has its own integrator in `systems::ship`; projectiles move in
//! `systems::projectile`.

use hecs::{Entity, World};

use negspace_core::components::{Enemy, Heading};
use negspace_core::types::{Position, Velocity};

/// Integrate the enemies of one roster.
pub fn run(world: &mut World, roster: &[Entity], dt: f64) {
    for &entity in roster {
        if let Ok((_enemy, pos, vel, heading)) =
            world.query_one_mut::<(&Enemy, &mut Position, &Velocity, &mut Heading)>(entity)
        {
            pos.advance(vel, dt);
            heading.rotation += heading.angular_velocity * dt;
        }
    }
}
