//! Enemy behavior finite state machine.
//!
//! Pure functions that compute steering, stun transitions and ship contact
//! for one enemy from its kind, lifecycle phase and the ship's situation.
//! No ECS dependency; operates on plain data.

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec2;
use negspace_core::constants::*;
use negspace_core::enums::{EnemyKind, LifePhase};
use negspace_core::types::{Position, Velocity};
use rand::Rng;

use crate::profiles::{get_profile, AimMode, RangedAttack};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub phase: LifePhase,
    pub position: Position,
    /// Per-instance speed (pixels/s).
    pub speed: f64,
    /// Per-instance spin magnitude (radians/s).
    pub spin: f64,
    pub hit_radius: f64,
    pub stunned: bool,
    pub stunned_at: f64,
    pub ship_position: Position,
    pub shield_active: bool,
    pub now: f64,
}

/// What touching the ship did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    None,
    /// Shielded contact. `entered` is false when an existing stun was refreshed.
    Stunned { entered: bool },
    /// Unshielded contact inside the hit radius.
    ShipDestroyed,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, Copy)]
pub struct EnemyUpdate {
    pub velocity: Velocity,
    /// Radians per second.
    pub angular_velocity: f64,
    pub stunned: bool,
    pub stunned_at: f64,
    pub contact: ContactOutcome,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    // Dying and dead enemies hold still and ignore the ship
    if ctx.phase != LifePhase::Alive {
        return EnemyUpdate {
            velocity: Velocity::zero(),
            angular_velocity: 0.0,
            stunned: ctx.stunned,
            stunned_at: ctx.stunned_at,
            contact: ContactOutcome::None,
        };
    }

    let profile = get_profile(ctx.kind);

    let mut stunned = ctx.stunned;
    let mut stunned_at = ctx.stunned_at;
    if stunned && ctx.now - stunned_at >= profile.stun_timeout {
        stunned = false;
    }

    let (velocity, angular_velocity) = steer(ctx, stunned);

    let mut contact = ContactOutcome::None;
    let distance = ctx.position.range_to(&ctx.ship_position);
    if distance < ctx.hit_radius * ENEMY_CONTACT_RADIUS_FACTOR {
        if ctx.shield_active {
            contact = ContactOutcome::Stunned { entered: !stunned };
            stunned = true;
            stunned_at = ctx.now;
        } else if distance < ctx.hit_radius {
            contact = ContactOutcome::ShipDestroyed;
        }
    }

    EnemyUpdate {
        velocity,
        angular_velocity,
        stunned,
        stunned_at,
        contact,
    }
}

/// Chase the ship, or flee with reversed spin while stunned.
fn steer(ctx: &EnemyContext, stunned: bool) -> (Velocity, f64) {
    let toward = (ctx.ship_position.to_vec2() - ctx.position.to_vec2()).normalize_or_zero();
    if stunned {
        (Velocity::from(-toward * ctx.speed), -ctx.spin)
    } else {
        (Velocity::from(toward * ctx.speed), ctx.spin)
    }
}

/// Per-instance randomization: `floor(base * U[0.8, 1.2))`.
pub fn jitter<R: Rng>(base: f64, rng: &mut R) -> f64 {
    let factor = ENEMY_SPEED_JITTER_MIN + rng.gen::<f64>() * ENEMY_SPEED_JITTER_SPAN;
    (base * factor).floor()
}

/// Draw the fixed shot interval for one instance.
pub fn roll_shot_interval<R: Rng>(ranged: &RangedAttack, rng: &mut R) -> f64 {
    ranged.base_interval + rng.gen::<f64>() * ranged.interval_jitter
}

/// True once more than `interval` seconds have passed since the last shot.
///
/// `last_shot_at` may lie in the future while the first-shot delay runs.
pub fn should_fire(last_shot_at: f64, interval: f64, now: f64) -> bool {
    now - last_shot_at > interval
}

/// Firing rotation (0 = up the screen) for a ranged shot.
pub fn aim_rotation<R: Rng>(aim: AimMode, from: Position, ship: Position, rng: &mut R) -> f64 {
    match aim {
        AimMode::AtPlayer => {
            let away = DVec2::new(from.x - ship.x, from.y - ship.y);
            away.y.atan2(away.x) - FRAC_PI_2
        }
        AimMode::RandomAngle => rng.gen::<f64>() * TAU,
    }
}
