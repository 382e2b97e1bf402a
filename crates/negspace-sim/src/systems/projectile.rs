//! Projectile system: spawn, expiry, integration and hit resolution.
//!
//! Hits are O(projectiles × targets) distance checks against a fixed radius.

use hecs::{Entity, World};

use negspace_core::components::{Projectile, Visual};
use negspace_core::config::ProjectileConfig;
use negspace_core::constants::SHOT_HIT_RADIUS;
use negspace_core::enums::Owner;
use negspace_core::events::{VisualKind, VisualStyle};
use negspace_core::types::{Position, Velocity};

use crate::presentation::Presentation;
use crate::systems::{enemy_ai, ship};

/// Spawn a projectile travelling along the firer's facing.
pub fn spawn(
    world: &mut World,
    config: &ProjectileConfig,
    now: f64,
    presentation: &mut Presentation,
) -> Entity {
    let velocity = Velocity::from_facing(config.rotation, config.speed());
    let handle = presentation.spawn_visual(
        VisualKind::ProjectileTrail,
        config.position,
        VisualStyle::Particles(config.color()),
    );

    world.spawn((
        Projectile {
            kind: config.kind,
            owner: config.owner,
            damage: config.damage(),
            lifetime_secs: config.lifetime_secs(),
            created_at: now,
            alive: true,
            has_hit: false,
            force_killed: false,
            bounced: false,
            bounce_color: config.bounce_color(),
        },
        config.position,
        velocity,
        Visual { handle },
    ))
}

/// Force-expire every projectile. They die on their next update.
pub fn kill_all(world: &mut World) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.force_killed = true;
    }
}

/// Update all projectiles, then resolve hits against the ship and the
/// active room's roster.
pub fn run(
    world: &mut World,
    ship_entity: Entity,
    roster: &[Entity],
    now: f64,
    dt: f64,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) {
    update(world, now, dt, presentation);
    check_hits(world, ship_entity, roster, now, input_locked, presentation);
}

/// Expire projectiles past their lifetime (or hit/killed) and move the rest.
fn update(world: &mut World, now: f64, dt: f64, presentation: &mut Presentation) {
    for (_entity, (projectile, pos, vel, visual)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity, &Visual)>()
    {
        if !projectile.alive {
            continue;
        }
        let lived = now - projectile.created_at;
        if lived > projectile.lifetime_secs || projectile.has_hit || projectile.force_killed {
            projectile.alive = false;
            projectile.has_hit = false;
            presentation.destroy_visual(visual.handle);
            continue;
        }
        pos.advance(vel, dt);
    }
}

fn check_hits(
    world: &mut World,
    ship_entity: Entity,
    roster: &[Entity],
    now: f64,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) {
    // Collect in buffers to avoid borrow issues with hecs
    let live: Vec<(Entity, Position, Owner, i32)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.alive)
        .map(|(e, (p, pos))| (e, *pos, p.owner, p.damage))
        .collect();
    if live.is_empty() {
        return;
    }

    let targets: Vec<(Entity, Position)> = roster
        .iter()
        .filter_map(|&e| world.get::<&Position>(e).ok().map(|pos| (e, *pos)))
        .collect();

    for (entity, pos, owner, damage) in live {
        match owner {
            Owner::Player => {
                let mut hit = false;
                for &(enemy, enemy_pos) in &targets {
                    if pos.range_to(&enemy_pos) < SHOT_HIT_RADIUS
                        && enemy_ai::on_shot_hit(world, enemy, damage, now, presentation)
                    {
                        hit = true;
                    }
                }
                if hit {
                    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
                        projectile.has_hit = true;
                    }
                }
            }
            Owner::Enemy => {
                let Some(ship_pos) = ship::position(world, ship_entity) else {
                    continue;
                };
                if pos.range_to(&ship_pos) >= SHOT_HIT_RADIUS {
                    continue;
                }
                if ship::shield_active(world, ship_entity) {
                    bounce(world, entity, pos, presentation);
                } else if ship::destroy_ship(world, ship_entity, now, input_locked, presentation) {
                    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
                        projectile.has_hit = true;
                    }
                }
            }
        }
    }
}

/// Reflect an enemy shot off the shield: it becomes player-owned and flies
/// back the way it came. A projectile bounces at most once.
fn bounce(world: &mut World, entity: Entity, at: Position, presentation: &mut Presentation) {
    let Ok((projectile, vel, visual)) =
        world.query_one_mut::<(&mut Projectile, &mut Velocity, &mut Visual)>(entity)
    else {
        return;
    };
    if projectile.bounced {
        return;
    }
    projectile.owner = Owner::Player;
    projectile.bounced = true;
    *vel = vel.reversed();

    presentation.destroy_visual(visual.handle);
    visual.handle = presentation.spawn_visual(
        VisualKind::ProjectileTrail,
        at,
        VisualStyle::Particles(projectile.bounce_color),
    );
}
