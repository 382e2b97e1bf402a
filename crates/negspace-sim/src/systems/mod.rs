//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components, the map and the engine.

pub mod cleanup;
pub mod enemy_ai;
pub mod movement;
pub mod projectile;
pub mod ship;
pub mod snapshot;
pub mod sync;
pub mod wormhole;
