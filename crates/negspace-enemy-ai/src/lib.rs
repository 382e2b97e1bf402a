//! Enemy AI for NEGATIVE SPACE.
//!
//! Implements the shared enemy state machine (steering, stun, ship contact)
//! and the kind-driven behavior profiles for Spinner, Sprayer and Thresher.

pub mod fsm;
pub mod profiles;

pub use negspace_core as core;

#[cfg(test)]
mod tests;
