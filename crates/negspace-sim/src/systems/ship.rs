//! Player ship: input, kinematics, weapons, shield and the death/relaunch
//! lifecycle.

use hecs::{Entity, World};

use negspace_core::commands::InputState;
use negspace_core::components::*;
use negspace_core::config::{GameConfig, ProjectileConfig, ShipConfig};
use negspace_core::constants::*;
use negspace_core::energy::{Gauge, Shield};
use negspace_core::enums::{LifePhase, Owner, ProjectileKind};
use negspace_core::events::{GameEvent, ParticleColor, SoundId, VisualKind, VisualStyle};
use negspace_core::types::{facing_vector, Position, Velocity};

use crate::presentation::Presentation;
use crate::systems::projectile;

/// Lock or unlock flight controls, logging and announcing the change.
pub fn set_input_lock(input_locked: &mut bool, locked: bool, presentation: &mut Presentation) {
    if *input_locked != locked {
        log::debug!("input lock: {locked}");
        *input_locked = locked;
        presentation.notify(GameEvent::InputLocked { locked });
    }
}

/// Lifecycle phase and remaining lives, if the ship exists.
pub fn status(world: &World, ship: Entity) -> Option<(LifePhase, u32)> {
    world
        .get::<&PlayerShip>(ship)
        .ok()
        .map(|s| (s.phase, s.lives))
}

/// Dying → Dead once the explosion has run for `death_duration`.
/// A life is spent at this transition.
pub fn update_lifecycle(
    world: &mut World,
    ship: Entity,
    now: f64,
    config: &ShipConfig,
    presentation: &mut Presentation,
) {
    let Ok(mut player) = world.get::<&mut PlayerShip>(ship) else {
        return;
    };
    if player.phase != LifePhase::Dying || now - player.phase_start < config.death_duration {
        return;
    }
    player.phase = LifePhase::Dead;
    player.phase_start = now;
    player.lives = player.lives.saturating_sub(1);
    if let Some(handle) = player.explosion.take() {
        presentation.destroy_visual(handle);
    }
    log::info!("ship lost, {} lives remaining", player.lives);
    presentation.notify(GameEvent::LivesChanged {
        lives: player.lives,
    });
}

/// Alive → Dying: hide the ship, lock input, play the explosion.
///
/// Returns false (and does nothing) unless the ship was alive.
pub fn destroy_ship(
    world: &mut World,
    ship: Entity,
    now: f64,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) -> bool {
    let Ok((player, pos, vel, thrust, appearance)) = world.query_one_mut::<(
        &mut PlayerShip,
        &Position,
        &mut Velocity,
        &mut Thrust,
        &mut Appearance,
    )>(ship) else {
        return false;
    };
    if player.phase != LifePhase::Alive {
        return false;
    }

    log::info!("ship destroyed with {} lives left", player.lives);
    player.phase = LifePhase::Dying;
    player.phase_start = now;
    player.explosion = Some(presentation.spawn_visual(
        VisualKind::Explosion,
        *pos,
        VisualStyle::Particles(ParticleColor::Red),
    ));
    *vel = Velocity::zero();
    *thrust = Thrust::default();
    appearance.visible = false;

    presentation.play_one_shot(SoundId::Explosion, DEFAULT_SOUND_VOLUME);
    presentation.notify(GameEvent::ShipDestroyed);
    set_input_lock(input_locked, true, presentation);
    true
}

/// Launch a fresh ship after a death. Only allowed while Dead with lives left.
///
/// The caller clears projectiles and scatters the room's enemies.
pub fn relaunch(
    world: &mut World,
    ship: Entity,
    now: f64,
    config: &GameConfig,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) -> bool {
    {
        let Ok(player) = world.get::<&PlayerShip>(ship) else {
            return false;
        };
        if player.phase != LifePhase::Dead || player.lives == 0 {
            return false;
        }
    }

    reset_to_launch_point(world, ship, config.ship.scale);
    if let Ok((player, shield)) = world.query_one_mut::<(&mut PlayerShip, &mut Shield)>(ship) {
        player.phase = LifePhase::Alive;
        player.phase_start = now;
        shield.reset();
    }
    if let Ok(mut appearance) = world.get::<&mut Appearance>(ship) {
        appearance.visible = true;
    }

    log::info!("launching new ship");
    presentation.notify(GameEvent::ShipLaunched);
    set_input_lock(input_locked, false, presentation);
    true
}

/// Put the ship back at the launch point, facing up, at rest and full size.
pub fn reset_to_launch_point(world: &mut World, ship: Entity, scale: f64) {
    if let Ok((pos, vel, heading, thrust, appearance)) = world.query_one_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Heading,
        &mut Thrust,
        &mut Appearance,
    )>(ship)
    {
        *pos = Position::new(SHIP_SPAWN_X, SHIP_SPAWN_Y);
        *vel = Velocity::zero();
        *heading = Heading::default();
        *thrust = Thrust::default();
        appearance.scale = scale;
    }
}

/// Apply the held flight controls. Steering and thrust are cleared every
/// frame; nothing else happens while input is locked or the ship is not
/// alive.
pub fn handle_input(
    world: &mut World,
    ship: Entity,
    input: &InputState,
    input_locked: bool,
    now: f64,
    config: &ShipConfig,
    presentation: &mut Presentation,
) {
    let alive = is_alive(world, ship);
    let Ok((heading, thrust)) = world.query_one_mut::<(&mut Heading, &mut Thrust)>(ship) else {
        return;
    };
    heading.angular_velocity = 0.0;
    *thrust = Thrust::default();
    if input_locked || !alive {
        return;
    }

    let turn_rate = config.rotation_speed_deg.to_radians();
    if input.rotate_left {
        heading.angular_velocity = -turn_rate;
    } else if input.rotate_right {
        heading.angular_velocity = turn_rate;
    }

    let facing = facing_vector(heading.rotation);
    if input.thrust {
        thrust.x = facing.x * config.acceleration;
        thrust.y = facing.y * config.acceleration;
    } else if input.reverse {
        thrust.x = -facing.x * config.acceleration;
        thrust.y = -facing.y * config.acceleration;
    }

    if input.shield {
        activate_shield(world, ship, now, presentation);
    }
    if input.fire {
        fire_projectile(world, ship, now, config, presentation);
    }
}

/// Pulse the shield if it is idle and the gauge can pay for it.
pub fn activate_shield(
    world: &mut World,
    ship: Entity,
    now: f64,
    presentation: &mut Presentation,
) -> bool {
    let Ok((player, shield, gauge)) =
        world.query_one_mut::<(&PlayerShip, &mut Shield, &mut Gauge)>(ship)
    else {
        return false;
    };
    if player.phase != LifePhase::Alive || !shield.can_activate(gauge) {
        return false;
    }
    shield.activate(gauge, now);
    presentation.play_one_shot(SoundId::Shield, SHIELD_SOUND_VOLUME);
    true
}

/// Fire a shot from the nose, rate limited and paid from the gauge.
pub fn fire_projectile(
    world: &mut World,
    ship: Entity,
    now: f64,
    config: &ShipConfig,
    presentation: &mut Presentation,
) -> bool {
    let (origin, rotation) = {
        let Ok((player, gauge, pos, heading)) =
            world.query_one_mut::<(&mut PlayerShip, &mut Gauge, &Position, &Heading)>(ship)
        else {
            return false;
        };
        if player.phase != LifePhase::Alive
            || !gauge.can_use(config.shot_cost)
            || now - player.last_shot_at <= config.shot_interval
        {
            return false;
        }
        gauge.spend(config.shot_cost);
        player.last_shot_at = now;
        (
            pos.offset_along(heading.rotation, SHIP_NOSE_OFFSET),
            heading.rotation,
        )
    };

    projectile::spawn(
        world,
        &ProjectileConfig {
            kind: ProjectileKind::Shot,
            owner: Owner::Player,
            position: origin,
            rotation,
            ..Default::default()
        },
        now,
        presentation,
    );
    presentation.play_one_shot(SoundId::Shot, DEFAULT_SOUND_VOLUME);
    true
}

/// Integrate rotation, thrust, drag and velocity, then keep the ship inside
/// the arena.
pub fn integrate(world: &mut World, ship: Entity, dt: f64, config: &ShipConfig) {
    let Ok((pos, vel, heading, thrust)) =
        world.query_one_mut::<(&mut Position, &mut Velocity, &mut Heading, &Thrust)>(ship)
    else {
        return;
    };

    heading.rotation += heading.angular_velocity * dt;

    let max = config.max_velocity;
    vel.x = accelerate_axis(vel.x, thrust.x, config.drag, dt).clamp(-max, max);
    vel.y = accelerate_axis(vel.y, thrust.y, config.drag, dt).clamp(-max, max);

    pos.advance(vel, dt);

    if pos.x < 0.0 || pos.x > ARENA_WIDTH {
        pos.x = pos.x.clamp(0.0, ARENA_WIDTH);
        vel.x = 0.0;
    }
    if pos.y < 0.0 || pos.y > ARENA_HEIGHT {
        pos.y = pos.y.clamp(0.0, ARENA_HEIGHT);
        vel.y = 0.0;
    }
}

/// Thrust accelerates; without thrust, drag decays the axis toward zero.
fn accelerate_axis(v: f64, accel: f64, drag: f64, dt: f64) -> f64 {
    if accel != 0.0 {
        v + accel * dt
    } else if v > 0.0 {
        (v - drag * dt).max(0.0)
    } else {
        (v + drag * dt).min(0.0)
    }
}

/// Gauge recharge and shield expiry.
pub fn regen(world: &mut World, ship: Entity, now: f64, dt: f64) {
    if let Ok((gauge, shield)) = world.query_one_mut::<(&mut Gauge, &mut Shield)>(ship) {
        gauge.update(dt);
        shield.update(now);
    }
}

pub fn is_alive(world: &World, ship: Entity) -> bool {
    matches!(status(world, ship), Some((LifePhase::Alive, _)))
}

/// Whether the ship's shield is currently up.
pub fn shield_active(world: &World, ship: Entity) -> bool {
    world
        .get::<&Shield>(ship)
        .map(|s| s.is_active())
        .unwrap_or(false)
}

/// Ship position, if it exists.
pub fn position(world: &World, ship: Entity) -> Option<Position> {
    world.get::<&Position>(ship).ok().map(|p| *p)
}
