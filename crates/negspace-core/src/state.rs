//! Game state snapshot: the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, GameEvent, VisualEvent};
use crate::types::{Position, RoomId, SimTime};

/// Complete game state returned after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    pub room: RoomView,
    pub map: MapView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    pub visual_events: Vec<VisualEvent>,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

/// Player ship status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    /// Radians, 0 = up the screen.
    pub rotation: f64,
    pub scale: f64,
    pub lives: u32,
    pub phase: LifePhase,
    pub energy: EnergyView,
    pub shield_active: bool,
    pub input_locked: bool,
}

/// Energy gauge for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyView {
    pub current: f64,
    pub max: f64,
    /// Fill of each display segment, bottom first (0.0 - 1.0).
    pub segments: Vec<f64>,
}

/// The active room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomView {
    pub id: RoomId,
    /// Region name, e.g. "Region 4F-A09Z".
    pub label: String,
    pub background: Background,
    pub is_clear: bool,
    pub enemies_remaining: u32,
    pub exit_markers: Vec<ExitMarkerView>,
}

/// A wormhole exit visible in the active room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitMarkerView {
    pub slot: usize,
    pub target: RoomId,
    pub position: Position,
    pub rotation: f64,
}

/// Sector-wide progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapView {
    pub room_count: u32,
    pub rooms_cleared: u32,
    pub wormhole_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub rotation: f64,
    pub life: i32,
    pub phase: LifePhase,
    pub stunned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub owner: Owner,
    pub position: Position,
    pub bounced: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u64,
    pub enemies_destroyed: u32,
    pub sectors_cleared: u32,
    pub sector_time_secs: f64,
}

/// Score carried from one sector into the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    pub score: u64,
    pub enemies_destroyed: u32,
    pub sectors_cleared: u32,
}
