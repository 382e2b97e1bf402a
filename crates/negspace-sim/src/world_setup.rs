//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ship and enemy entities with appropriate component bundles,
//! fills room rosters and binds or releases enemy visuals as rooms are
//! entered and left.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use negspace_core::components::*;
use negspace_core::config::{EnemyConfig, GameConfig, MapConfig};
use negspace_core::constants::*;
use negspace_core::energy::{Gauge, Shield};
use negspace_core::enums::*;
use negspace_core::events::{VisualKind, VisualStyle};
use negspace_core::types::{Position, RoomId, Velocity};

use negspace_enemy_ai::fsm::{jitter, roll_shot_interval};
use negspace_enemy_ai::profiles::{get_profile, SpawnRegion};

use crate::map::GameMap;
use crate::presentation::Presentation;

/// Spawn the player's ship at the launch point with a full gauge.
pub fn spawn_ship(
    world: &mut World,
    config: &GameConfig,
    now: f64,
    presentation: &mut Presentation,
) -> Entity {
    let position = Position::new(SHIP_SPAWN_X, SHIP_SPAWN_Y);
    let visual = presentation.spawn_visual(VisualKind::Ship, position, VisualStyle::Plain);

    world.spawn((
        PlayerShip {
            lives: config.ship.lives,
            phase: LifePhase::Alive,
            phase_start: now,
            last_shot_at: now,
            explosion: None,
        },
        position,
        Velocity::zero(),
        Heading::default(),
        Thrust::default(),
        Appearance {
            scale: config.ship.scale,
            visible: true,
        },
        Gauge::from_config(&config.gauge),
        Shield::from_config(&config.shield),
        Visual { handle: visual },
    ))
}

/// Spawn one enemy into `room`'s world storage (the caller adds it to the
/// roster). Unset config fields come from the kind profile; speed and spin
/// are then randomized per instance.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &EnemyConfig,
    room: RoomId,
) -> Entity {
    let profile = get_profile(config.kind);

    let position = config
        .position
        .unwrap_or_else(|| profile.spawn_region.sample(rng));
    let speed = jitter(config.speed.unwrap_or(profile.base_speed), rng);
    let spin_deg = jitter(
        config.angular_velocity_deg.unwrap_or(profile.base_spin_deg),
        rng,
    );
    let shot_interval = profile
        .ranged
        .map(|ranged| roll_shot_interval(&ranged, rng))
        .unwrap_or(0.0);

    world.spawn((
        Enemy {
            kind: config.kind,
            room,
            life: profile.life,
            hit_radius: config.hit_radius.unwrap_or(profile.hit_radius),
            speed,
            spin: spin_deg.to_radians(),
            phase: LifePhase::Alive,
            phase_start: 0.0,
            stunned: false,
            stunned_at: 0.0,
            last_shot_at: 0.0,
            shot_interval,
            explosion: None,
        },
        position,
        Velocity::zero(),
        Heading::default(),
        Appearance {
            scale: profile.scale,
            visible: true,
        },
    ))
}

/// Fill every room except home with 5-10 random enemies.
pub fn populate_map(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    map: &mut GameMap,
    config: &MapConfig,
) {
    for room in map.rooms_mut().iter_mut().skip(1) {
        let count = rng.gen_range(config.enemies_min..=config.enemies_max);
        for _ in 0..count {
            let kind = roll_enemy_kind(rng);
            let entity = spawn_enemy(world, rng, &EnemyConfig::of_kind(kind), room.id);
            room.enemies.push(entity);
        }
    }
}

fn roll_enemy_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    let roll: f64 = rng.gen();
    if roll < THRESHER_CUTOFF {
        EnemyKind::Thresher
    } else if roll < SPINNER_CUTOFF {
        EnemyKind::Spinner
    } else {
        EnemyKind::Sprayer
    }
}

/// Sprite kind for an enemy.
pub fn enemy_visual_kind(kind: EnemyKind) -> VisualKind {
    match kind {
        EnemyKind::Spinner => VisualKind::Spinner,
        EnemyKind::Sprayer => VisualKind::Sprayer,
        EnemyKind::Thresher => VisualKind::Thresher,
    }
}

/// Spawn sprites for the living enemies of a roster.
pub fn show_roster(world: &mut World, roster: &[Entity], presentation: &mut Presentation) {
    let mut bound = Vec::new();
    for &entity in roster {
        let Ok(mut query) = world.query_one::<(&Enemy, &Position)>(entity) else {
            continue;
        };
        if let Some((enemy, pos)) = query.get() {
            if enemy.phase == LifePhase::Alive {
                let handle = presentation.spawn_visual(
                    enemy_visual_kind(enemy.kind),
                    *pos,
                    VisualStyle::Plain,
                );
                bound.push((entity, handle));
            }
        }
    }
    for (entity, handle) in bound {
        let _ = world.insert_one(entity, Visual { handle });
    }
}

/// Release every visual held by a roster (sprites and explosions).
pub fn hide_roster(world: &mut World, roster: &[Entity], presentation: &mut Presentation) {
    for &entity in roster {
        if let Ok(visual) = world.remove_one::<Visual>(entity) {
            presentation.destroy_visual(visual.handle);
        }
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            if let Some(handle) = enemy.explosion.take() {
                presentation.destroy_visual(handle);
            }
        }
    }
}

/// Start the first-shot delay for the roster's ranged enemies.
pub fn arm_roster(world: &mut World, roster: &[Entity], now: f64) {
    for &entity in roster {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            if let Some(ranged) = get_profile(enemy.kind).ranged {
                enemy.last_shot_at = now + ranged.first_shot_delay;
            }
        }
    }
}

/// Scatter the roster's living enemies after a relaunch. No enemy is
/// respawned and no life is restored.
pub fn reset_enemy_positions(world: &mut World, rng: &mut ChaCha8Rng, roster: &[Entity]) {
    for &entity in roster {
        let Ok((enemy, pos, vel)) =
            world.query_one_mut::<(&Enemy, &mut Position, &mut Velocity)>(entity)
        else {
            continue;
        };
        if enemy.phase == LifePhase::Alive {
            *pos = SpawnRegion::RESET.sample(rng);
            *vel = Velocity::zero();
        }
    }
}

/// Release every entity-bound visual and empty the world.
pub fn clear_world(world: &mut World, presentation: &mut Presentation) {
    for (_entity, visual) in world.query_mut::<&Visual>() {
        presentation.destroy_visual(visual.handle);
    }
    for (_entity, enemy) in world.query_mut::<&Enemy>() {
        if let Some(handle) = enemy.explosion {
            presentation.destroy_visual(handle);
        }
    }
    for (_entity, ship) in world.query_mut::<&PlayerShip>() {
        if let Some(handle) = ship.explosion {
            presentation.destroy_visual(handle);
        }
    }
    world.clear();
}
