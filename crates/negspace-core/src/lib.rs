//! Core types and definitions for the NEGATIVE SPACE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, configuration and constants.
//! It has no dependency on a renderer, audio backend or ECS runtime.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod energy;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
