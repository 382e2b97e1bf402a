//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. The energy components
//! (`Gauge`, `Shield`) live in `crate::energy`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{ParticleColor, VisualHandle};
use crate::types::RoomId;

/// Marks the player's ship and carries its lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub lives: u32,
    pub phase: LifePhase,
    /// Time the current phase began (seconds).
    pub phase_start: f64,
    /// Time of the last successful shot (seconds).
    pub last_shot_at: f64,
    /// Explosion visual while dying.
    pub explosion: Option<VisualHandle>,
}

/// Facing and spin of an entity (radians; 0 = up the screen).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub rotation: f64,
    /// Radians per second.
    pub angular_velocity: f64,
}

/// Commanded acceleration (pixels/s²). Zero means coasting under drag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Thrust {
    pub x: f64,
    pub y: f64,
}

/// Visual scale and visibility of an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Appearance {
    pub scale: f64,
    pub visible: bool,
}

/// Host-side visual bound to an entity. Its transform is synced every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub handle: VisualHandle,
}

/// Enemy state. The kind selects the behavior profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Room whose roster owns this enemy.
    pub room: RoomId,
    pub life: i32,
    pub hit_radius: f64,
    /// Randomized per-instance speed (pixels/s).
    pub speed: f64,
    /// Randomized per-instance spin (radians/s).
    pub spin: f64,
    pub phase: LifePhase,
    pub phase_start: f64,
    pub stunned: bool,
    pub stunned_at: f64,
    /// Ranged kinds only.
    pub last_shot_at: f64,
    /// Seconds between shots; 0 for kinds without a ranged attack.
    pub shot_interval: f64,
    /// Explosion visual while dying.
    pub explosion: Option<VisualHandle>,
}

/// Projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub owner: Owner,
    pub damage: i32,
    pub lifetime_secs: f64,
    pub created_at: f64,
    pub alive: bool,
    pub has_hit: bool,
    pub force_killed: bool,
    /// Set once an enemy shot has been reflected by the shield.
    pub bounced: bool,
    pub bounce_color: ParticleColor,
}
