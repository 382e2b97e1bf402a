//! Runtime configuration.
//!
//! [`GameConfig`] holds the tunable subset of [`crate::constants`]. Every
//! section is `#[serde(default)]`, so a JSON document only needs the keys it
//! overrides; missing keys fall back to the compile-time defaults.
//!
//! The per-entity spawn configs ([`ProjectileConfig`], [`EnemyConfig`]) are
//! option bags: `None` fields resolve to the kind's documented default.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyKind, Owner, ProjectileKind};
use crate::error::{ConfigError, ConfigResult};
use crate::events::ParticleColor;
use crate::types::Position;

/// Top-level tuning for one sector run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub ship: ShipConfig,
    pub gauge: GaugeConfig,
    pub shield: ShieldConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub scale: f64,
    pub max_velocity: f64,
    pub drag: f64,
    pub acceleration: f64,
    /// Turn rate in degrees per second.
    pub rotation_speed_deg: f64,
    pub shot_cost: f64,
    /// Minimum seconds between shots.
    pub shot_interval: f64,
    pub lives: u32,
    /// Explosion length before the ship counts as dead (seconds).
    pub death_duration: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            scale: SHIP_SCALE,
            max_velocity: SHIP_MAX_VELOCITY,
            drag: SHIP_DRAG,
            acceleration: SHIP_ACCELERATION,
            rotation_speed_deg: SHIP_ROTATION_SPEED_DEG,
            shot_cost: SHIP_SHOT_COST,
            shot_interval: SHIP_SHOT_INTERVAL,
            lives: SHIP_LIVES,
            death_duration: SHIP_DEATH_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    pub max: f64,
    /// Starting level; `None` starts full.
    pub current: Option<f64>,
    /// Units per second.
    pub recharge_rate: f64,
    /// Display segments reported in snapshots.
    pub segments: usize,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            max: GAUGE_MAX,
            current: None,
            recharge_rate: GAUGE_RECHARGE_RATE,
            segments: GAUGE_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldConfig {
    pub drain: f64,
    /// Pulse length (seconds).
    pub duration: f64,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            drain: SHIELD_DRAIN,
            duration: SHIELD_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub min_rooms: usize,
    /// Extra rooms drawn uniformly from `0..=rng_rooms`.
    pub rng_rooms: usize,
    pub enemies_min: usize,
    pub enemies_max: usize,
    pub wormhole_activation_distance: f64,
    /// Transit length (seconds).
    pub wormhole_delay: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            min_rooms: MIN_ROOMS,
            rng_rooms: RNG_ROOMS,
            enemies_min: ROOM_ENEMIES_MIN,
            enemies_max: ROOM_ENEMIES_MAX,
            wormhole_activation_distance: WORMHOLE_ACTIVATION_DISTANCE,
            wormhole_delay: WORMHOLE_DELAY,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("ship.scale", self.ship.scale)?;
        positive("ship.max_velocity", self.ship.max_velocity)?;
        non_negative("ship.drag", self.ship.drag)?;
        non_negative("ship.acceleration", self.ship.acceleration)?;
        non_negative("ship.shot_cost", self.ship.shot_cost)?;
        non_negative("ship.shot_interval", self.ship.shot_interval)?;
        non_negative("ship.death_duration", self.ship.death_duration)?;
        if self.ship.lives == 0 {
            return Err(ConfigError::Invalid {
                field: "ship.lives",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        positive("gauge.max", self.gauge.max)?;
        non_negative("gauge.recharge_rate", self.gauge.recharge_rate)?;
        if let Some(current) = self.gauge.current {
            if !(0.0..=self.gauge.max).contains(&current) {
                return Err(ConfigError::Invalid {
                    field: "gauge.current",
                    value: current,
                    reason: "must lie within 0..=gauge.max",
                });
            }
        }

        non_negative("shield.drain", self.shield.drain)?;
        positive("shield.duration", self.shield.duration)?;

        if self.map.min_rooms < 2 {
            return Err(ConfigError::Invalid {
                field: "map.min_rooms",
                value: self.map.min_rooms as f64,
                reason: "a sector needs the home room plus at least one more",
            });
        }
        if self.map.enemies_min == 0 || self.map.enemies_min > self.map.enemies_max {
            return Err(ConfigError::Invalid {
                field: "map.enemies_min",
                value: self.map.enemies_min as f64,
                reason: "must be at least 1 and not exceed map.enemies_max",
            });
        }
        positive(
            "map.wormhole_activation_distance",
            self.map.wormhole_activation_distance,
        )?;
        non_negative("map.wormhole_delay", self.map.wormhole_delay)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            reason: "must be a finite value greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            value,
            reason: "must be a finite value of zero or more",
        })
    }
}

/// Spawn parameters for one projectile.
#[derive(Debug, Clone, Default)]
pub struct ProjectileConfig {
    pub kind: ProjectileKind,
    pub owner: Owner,
    pub position: Position,
    /// Firer facing (0 = up the screen).
    pub rotation: f64,
    /// Defaults to `SHOT_DAMAGE_DEFAULT`.
    pub damage: Option<i32>,
    /// Defaults to the kind's speed, see [`default_speed`].
    pub speed: Option<f64>,
    /// Defaults to `SHOT_LIFETIME_DEFAULT`.
    pub lifetime_secs: Option<f64>,
    /// Defaults to light blue.
    pub color: Option<ParticleColor>,
    /// Color after a shield bounce. Defaults to off-white.
    pub bounce_color: Option<ParticleColor>,
}

impl ProjectileConfig {
    pub fn damage(&self) -> i32 {
        self.damage.unwrap_or(SHOT_DAMAGE_DEFAULT)
    }

    pub fn speed(&self) -> f64 {
        self.speed.unwrap_or_else(|| default_speed(self.kind))
    }

    pub fn lifetime_secs(&self) -> f64 {
        self.lifetime_secs.unwrap_or(SHOT_LIFETIME_DEFAULT)
    }

    pub fn color(&self) -> ParticleColor {
        self.color.unwrap_or(ParticleColor::LightBlue)
    }

    pub fn bounce_color(&self) -> ParticleColor {
        self.bounce_color.unwrap_or(ParticleColor::OffWhite)
    }
}

/// Type-dependent projectile speed (pixels/s).
pub fn default_speed(kind: ProjectileKind) -> f64 {
    match kind {
        ProjectileKind::Shot => SHOT_SPEED_DEFAULT,
        ProjectileKind::Homing => HOMING_SPEED_DEFAULT,
        ProjectileKind::Beam => BEAM_SPEED_DEFAULT,
    }
}

/// Spawn parameters for one enemy. `None` fields come from the kind's
/// behavior profile (speeds are then randomized per instance).
#[derive(Debug, Clone, Default)]
pub struct EnemyConfig {
    pub kind: EnemyKind,
    /// Defaults to a random point in the kind's spawn region.
    pub position: Option<Position>,
    pub speed: Option<f64>,
    /// Degrees per second.
    pub angular_velocity_deg: Option<f64>,
    pub hit_radius: Option<f64>,
}

impl EnemyConfig {
    pub fn of_kind(kind: EnemyKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn at(kind: EnemyKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
            ..Default::default()
        }
    }
}
