//! Events emitted by the simulation for the presentation layer.
//!
//! The core never draws or plays anything itself. It allocates opaque
//! handles and describes what should happen to them; the host drains these
//! events from each snapshot and drives its renderer and mixer.

use serde::{Deserialize, Serialize};

use crate::types::{Position, RoomId};

/// Opaque handle to a sprite, particle emitter or label owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// Opaque handle to a playing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioHandle(pub u32);

/// What a visual represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    Ship,
    Spinner,
    Sprayer,
    Thresher,
    /// Particle trail following a projectile.
    ProjectileTrail,
    /// Burst played while an enemy or the ship dies.
    Explosion,
    /// Wormhole sprite marking a room exit.
    ExitMarker,
    Background,
}

/// Particle tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    LightBlue,
    Blue,
    OffWhite,
    Red,
}

/// Styling hints for a spawned visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VisualStyle {
    Plain,
    Particles(ParticleColor),
    Backdrop(crate::enums::Background),
}

/// Full placement of a visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualTransform {
    pub position: Position,
    pub rotation: f64,
    pub scale: f64,
    /// 0.0 = invisible, 1.0 = opaque.
    pub alpha: f64,
}

/// Renderer instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VisualEvent {
    Spawn {
        handle: VisualHandle,
        kind: VisualKind,
        position: Position,
        style: VisualStyle,
    },
    Destroy {
        handle: VisualHandle,
    },
    SetTransform {
        handle: VisualHandle,
        transform: VisualTransform,
    },
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundId {
    Shot,
    Shield,
    Wormhole,
    Hit,
    Explosion,
}

/// Looping music tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicId {
    Stage1,
}

/// Mixer instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    PlayOneShot { sound: SoundId, volume: f64 },
    PlayLoop {
        music: MusicId,
        volume: f64,
        handle: AudioHandle,
    },
    Stop { handle: AudioHandle },
}

/// Gameplay notifications for HUD text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The active room changed; `label` is the region name to display.
    RoomEntered { room: RoomId, label: String },
    /// The active room's roster emptied for the first time.
    RoomCleared { room: RoomId },
    /// A wormhole transit started toward `target`.
    WormholeOpened { target: RoomId },
    ShipDestroyed,
    LivesChanged { lives: u32 },
    ShipLaunched,
    InputLocked { locked: bool },
    /// All rooms clear; hand off to the summary flow.
    SectorCleared,
    GameOver,
}
