//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Overall game phase for one sector run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `StartSector`.
    #[default]
    Briefing,
    Active,
    Paused,
    /// Every room is clear and the final wormhole completed.
    Victory,
    /// Ship dead with no lives left.
    GameOver,
}

/// Enemy variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast melee spinner, no ranged attack.
    #[default]
    Spinner,
    /// Slow drifter that fires aimed shots.
    Sprayer,
    /// Stationary turret spraying shots in random directions.
    Thresher,
}

/// Lifecycle phase shared by the ship and enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifePhase {
    #[default]
    Alive,
    /// Death animation playing; no contact or AI.
    Dying,
    Dead,
}

/// Projectile type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Shot,
    Beam,
    Homing,
}

/// Who a projectile can hurt. Player-owned projectiles hit enemies,
/// enemy-owned projectiles hit the ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

/// Room background artwork reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    /// Home room.
    Planet,
    #[default]
    Stars,
}
