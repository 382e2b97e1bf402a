//! Enemy AI system: updates the active room's roster each tick.
//!
//! Calls the enemy FSM from negspace-enemy-ai for steering, stun and ship
//! contact, runs the death timers and fires ranged attacks.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use negspace_core::components::{Enemy, Heading, Visual};
use negspace_core::config::ProjectileConfig;
use negspace_core::constants::*;
use negspace_core::enums::{EnemyKind, LifePhase, Owner, ProjectileKind};
use negspace_core::events::{ParticleColor, SoundId, VisualKind, VisualStyle};
use negspace_core::types::{Position, Velocity};

use negspace_enemy_ai::fsm::{aim_rotation, evaluate, should_fire, ContactOutcome, EnemyContext};
use negspace_enemy_ai::profiles::get_profile;

use crate::presentation::Presentation;
use crate::score::ScoreState;
use crate::systems::{projectile, ship};

/// Run the enemy AI for one roster.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    roster: &[Entity],
    ship_entity: Entity,
    now: f64,
    score: &mut ScoreState,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) {
    update_death_timers(world, roster, now, score, presentation);

    let Some(ship_pos) = ship::position(world, ship_entity) else {
        return;
    };
    let shield_active = ship::shield_active(world, ship_entity);

    for &entity in roster {
        let contact = {
            let Ok((enemy, pos, vel, heading)) =
                world.query_one_mut::<(&mut Enemy, &Position, &mut Velocity, &mut Heading)>(entity)
            else {
                continue;
            };
            if enemy.phase != LifePhase::Alive {
                continue;
            }

            let update = evaluate(&EnemyContext {
                kind: enemy.kind,
                phase: enemy.phase,
                position: *pos,
                speed: enemy.speed,
                spin: enemy.spin,
                hit_radius: enemy.hit_radius,
                stunned: enemy.stunned,
                stunned_at: enemy.stunned_at,
                ship_position: ship_pos,
                shield_active,
                now,
            });
            *vel = update.velocity;
            heading.angular_velocity = update.angular_velocity;
            enemy.stunned = update.stunned;
            enemy.stunned_at = update.stunned_at;
            (enemy.kind, update.contact)
        };

        match contact {
            (kind, ContactOutcome::Stunned { entered: true }) => {
                score.award(get_profile(kind).stun_score);
            }
            (_, ContactOutcome::ShipDestroyed) => {
                ship::destroy_ship(world, ship_entity, now, input_locked, presentation);
            }
            _ => {}
        }

        fire_if_ready(world, rng, entity, ship_pos, now, presentation);
    }
}

/// Dying → Dead once the explosion has played; award the kill score.
fn update_death_timers(
    world: &mut World,
    roster: &[Entity],
    now: f64,
    score: &mut ScoreState,
    presentation: &mut Presentation,
) {
    for &entity in roster {
        let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
            continue;
        };
        if enemy.phase != LifePhase::Dying || now - enemy.phase_start < ENEMY_DEATH_DURATION {
            continue;
        }
        enemy.phase = LifePhase::Dead;
        enemy.phase_start = now;
        if let Some(handle) = enemy.explosion.take() {
            presentation.destroy_visual(handle);
        }
        score.enemies_destroyed += 1;
        score.award(get_profile(enemy.kind).kill_score);
    }
}

fn fire_if_ready(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    entity: Entity,
    ship_pos: Position,
    now: f64,
    presentation: &mut Presentation,
) {
    let shot = {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(entity) else {
            return;
        };
        let Some(ranged) = get_profile(enemy.kind).ranged else {
            return;
        };
        if enemy.phase != LifePhase::Alive
            || !should_fire(enemy.last_shot_at, enemy.shot_interval, now)
        {
            return;
        }
        enemy.last_shot_at = now;
        ProjectileConfig {
            kind: ProjectileKind::Shot,
            owner: Owner::Enemy,
            position: *pos,
            rotation: aim_rotation(ranged.aim, *pos, ship_pos, rng),
            speed: Some(ranged.projectile_speed),
            lifetime_secs: Some(ranged.projectile_lifetime),
            color: Some(ParticleColor::Red),
            ..Default::default()
        }
    };
    projectile::spawn(world, &shot, now, presentation);
}

/// A player projectile touched this enemy.
///
/// Returns false for enemies already dying or dead. Otherwise applies the
/// damage and starts the death sequence at zero life, and returns true.
pub fn on_shot_hit(
    world: &mut World,
    entity: Entity,
    damage: i32,
    now: f64,
    presentation: &mut Presentation,
) -> bool {
    {
        let Ok((enemy, pos)) = world.query_one_mut::<(&mut Enemy, &Position)>(entity) else {
            return false;
        };
        if enemy.phase != LifePhase::Alive {
            return false;
        }

        presentation.play_one_shot(SoundId::Hit, DEFAULT_SOUND_VOLUME);
        enemy.life -= damage;
        if enemy.life > 0 {
            return true;
        }

        enemy.phase = LifePhase::Dying;
        enemy.phase_start = now;
        enemy.explosion = Some(presentation.spawn_visual(
            VisualKind::Explosion,
            *pos,
            VisualStyle::Particles(explosion_color(enemy.kind)),
        ));
        presentation.play_one_shot(SoundId::Explosion, DEFAULT_SOUND_VOLUME);
    }

    // The sprite goes away as soon as the explosion starts
    if let Ok(visual) = world.remove_one::<Visual>(entity) {
        presentation.destroy_visual(visual.handle);
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
        *vel = Velocity::zero();
    }
    true
}

fn explosion_color(kind: EnemyKind) -> ParticleColor {
    match kind {
        EnemyKind::Spinner => ParticleColor::LightBlue,
        EnemyKind::Sprayer => ParticleColor::Red,
        EnemyKind::Thresher => ParticleColor::Blue,
    }
}
