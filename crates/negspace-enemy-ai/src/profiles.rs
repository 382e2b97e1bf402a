//! Kind-specific behavioral profiles.
//!
//! Consolidates per-kind parameters for the enemy FSM and the spawner.

use negspace_core::constants::*;
use negspace_core::enums::EnemyKind;
use negspace_core::types::Position;
use rand::Rng;

/// Behavioral profile for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehaviorProfile {
    /// Speed before per-instance jitter (pixels/s).
    pub base_speed: f64,
    /// Spin before per-instance jitter (degrees/s).
    pub base_spin_deg: f64,
    pub life: i32,
    pub hit_radius: f64,
    /// Sprite scale.
    pub scale: f64,
    /// How long a shield contact keeps the enemy stunned (seconds).
    pub stun_timeout: f64,
    /// Awarded when the enemy enters stun.
    pub stun_score: u64,
    /// Awarded when the death animation finishes.
    pub kill_score: u64,
    pub ranged: Option<RangedAttack>,
    pub spawn_region: SpawnRegion,
}

/// Ranged attack parameters.
#[derive(Debug, Clone, Copy)]
pub struct RangedAttack {
    /// Delay after room entry before the shot timer starts (seconds).
    pub first_shot_delay: f64,
    pub base_interval: f64,
    /// Uniform extra interval drawn once per instance, `[0, jitter)`.
    pub interval_jitter: f64,
    pub projectile_speed: f64,
    pub projectile_lifetime: f64,
    pub aim: AimMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimMode {
    /// Straight at the player's current position.
    AtPlayer,
    /// Uniform random direction.
    RandomAngle,
}

/// Axis-aligned spawn area, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SpawnRegion {
    /// Where any enemy is scattered to when the ship relaunches.
    pub const RESET: SpawnRegion = SpawnRegion {
        x_min: ENEMY_RESET_X_MIN,
        x_max: ENEMY_RESET_X_MAX,
        y_min: ENEMY_RESET_Y_MIN,
        y_max: ENEMY_RESET_Y_MAX,
    };

    /// Random whole-pixel point inside the region.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Position {
        let x = (rng.gen::<f64>() * (self.x_max - self.x_min)).floor() + self.x_min;
        let y = (rng.gen::<f64>() * (self.y_max - self.y_min)).floor() + self.y_min;
        Position::new(x, y)
    }

    pub fn contains(&self, p: &Position) -> bool {
        p.x >= self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y < self.y_max
    }
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyBehaviorProfile {
    match kind {
        EnemyKind::Spinner => EnemyBehaviorProfile {
            base_speed: SPINNER_SPEED,
            base_spin_deg: SPINNER_SPIN_DEG,
            life: SPINNER_LIFE,
            hit_radius: SPINNER_HIT_RADIUS,
            scale: 0.5,
            stun_timeout: ENEMY_STUN_TIMEOUT,
            stun_score: 0,
            kill_score: 0,
            ranged: None,
            spawn_region: SpawnRegion::RESET,
        },
        EnemyKind::Sprayer => EnemyBehaviorProfile {
            base_speed: SPRAYER_SPEED,
            base_spin_deg: 0.0,
            life: SPRAYER_LIFE,
            hit_radius: SPRAYER_HIT_RADIUS,
            scale: 0.75,
            stun_timeout: ENEMY_STUN_TIMEOUT,
            stun_score: 0,
            kill_score: 0,
            ranged: Some(RangedAttack {
                first_shot_delay: SPRAYER_FIRST_SHOT_DELAY,
                base_interval: SPRAYER_BASE_SHOT_INTERVAL,
                interval_jitter: SPRAYER_SHOT_INTERVAL_JITTER,
                projectile_speed: SPRAYER_PROJECTILE_SPEED,
                projectile_lifetime: ENEMY_PROJECTILE_LIFETIME,
                aim: AimMode::AtPlayer,
            }),
            spawn_region: SpawnRegion::RESET,
        },
        EnemyKind::Thresher => EnemyBehaviorProfile {
            base_speed: THRESHER_SPEED,
            base_spin_deg: 0.0,
            life: THRESHER_LIFE,
            hit_radius: THRESHER_HIT_RADIUS,
            scale: 0.75,
            stun_timeout: THRESHER_STUN_TIMEOUT,
            stun_score: THRESHER_STUN_SCORE,
            kill_score: THRESHER_KILL_SCORE,
            ranged: Some(RangedAttack {
                first_shot_delay: THRESHER_FIRST_SHOT_DELAY,
                base_interval: THRESHER_BASE_SHOT_INTERVAL,
                interval_jitter: THRESHER_SHOT_INTERVAL_JITTER,
                projectile_speed: THRESHER_PROJECTILE_SPEED,
                projectile_lifetime: ENEMY_PROJECTILE_LIFETIME,
                aim: AimMode::RandomAngle,
            }),
            // Threshers sit near the middle of the upper arena.
            spawn_region: SpawnRegion {
                x_min: 300.0,
                x_max: 500.0,
                y_min: 150.0,
                y_max: 300.0,
            },
        },
    }
}
