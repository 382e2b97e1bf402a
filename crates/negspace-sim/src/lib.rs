//! Simulation engine for NEGATIVE SPACE.
//!
//! Owns the hecs ECS world and the sector map, runs systems at a fixed tick
//! rate, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod map;
pub mod presentation;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use negspace_core as core;
