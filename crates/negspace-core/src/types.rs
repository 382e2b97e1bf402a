//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels).
/// x = right, y = down; the arena spans `ARENA_WIDTH` × `ARENA_HEIGHT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in arena space (pixels/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking. `elapsed_secs` is the monotonic clock every
/// timestamp in the simulation is measured against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Stable identifier of a room inside one generated map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move by `velocity * dt`.
    pub fn advance(&mut self, velocity: &Velocity, dt: f64) {
        self.x += velocity.x * dt;
        self.y += velocity.y * dt;
    }

    /// Offset along a facing angle (0 = up the screen, clockwise positive).
    pub fn offset_along(&self, rotation: f64, distance: f64) -> Position {
        let dir = facing_vector(rotation) * distance;
        Position::new(self.x + dir.x, self.y + dir.y)
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity of magnitude `speed` along a facing angle.
    ///
    /// Rotation 0 points up the screen (negative y); positive rotation turns
    /// clockwise. A rotation `r` gives `(sin r, -cos r) * speed`.
    pub fn from_facing(rotation: f64, speed: f64) -> Self {
        let v = facing_vector(rotation) * speed;
        Self { x: v.x, y: v.y }
    }

    /// Speed magnitude (pixels/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// The exact reverse of this velocity.
    pub fn reversed(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Unit vector for a top-is-zero facing angle.
pub fn facing_vector(rotation: f64) -> DVec2 {
    DVec2::new(rotation.sin(), -rotation.cos())
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }

    /// Seconds elapsed since `timestamp`.
    pub fn since(&self, timestamp: f64) -> f64 {
        self.elapsed_secs - timestamp
    }
}
