//! Room update and wormhole transit.
//!
//! Drives the active room's clear check and marker spin, activates a
//! wormhole when the ship asks for one next to an exit marker, animates the
//! ship through the transit and completes it after the configured delay.

use hecs::{Entity, World};

use negspace_core::commands::InputState;
use negspace_core::components::{Appearance, Heading};
use negspace_core::config::GameConfig;
use negspace_core::constants::*;
use negspace_core::types::RoomId;

use crate::map::GameMap;
use crate::presentation::Presentation;
use crate::systems::{projectile, ship};
use crate::world_setup;

/// What the room update resolved this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitOutcome {
    None,
    /// A transit finished and the ship is now in this room.
    Moved(RoomId),
    /// A transit finished with every room clear.
    SectorCleared,
}

/// Room update for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    map: &mut GameMap,
    ship_entity: Entity,
    input: &InputState,
    input_locked: &mut bool,
    now: f64,
    dt: f64,
    config: &GameConfig,
    presentation: &mut Presentation,
) -> TransitOutcome {
    map.update_active_room(dt, presentation);

    if map.is_transitioning() {
        animate_transit(world, ship_entity, dt);
        if let Some(target) = map.transit_due(now, config.map.wormhole_delay) {
            if map.all_clear() {
                map.end_transit();
                log::info!("sector cleared");
                return TransitOutcome::SectorCleared;
            }
            move_to(
                world,
                map,
                target,
                ship_entity,
                now,
                config,
                input_locked,
                presentation,
            );
            return TransitOutcome::Moved(target);
        }
        return TransitOutcome::None;
    }

    if input.wormhole && !*input_locked && map.active_room().is_clear() {
        let alive = ship::is_alive(world, ship_entity);
        let Some(ship_pos) = ship::position(world, ship_entity) else {
            return TransitOutcome::None;
        };
        if alive {
            if let Some((exit, target)) =
                map.exit_in_range(&ship_pos, config.map.wormhole_activation_distance)
            {
                map.begin_transit(exit, target, now, presentation);
                ship::set_input_lock(input_locked, true, presentation);
            }
        }
    }
    TransitOutcome::None
}

/// Spin and shrink the ship while it falls through the wormhole.
fn animate_transit(world: &mut World, ship_entity: Entity, dt: f64) {
    let frames = dt * REFERENCE_FRAME_RATE;
    if let Ok((heading, appearance)) =
        world.query_one_mut::<(&mut Heading, &mut Appearance)>(ship_entity)
    {
        heading.rotation += WORMHOLE_SHIP_SPIN_PER_FRAME * frames;
        appearance.scale *= WORMHOLE_SHIP_SHRINK_PER_FRAME.powf(frames);
    }
}

/// Finish a transit into `target`: nothing from the old room survives.
#[allow(clippy::too_many_arguments)]
pub fn move_to(
    world: &mut World,
    map: &mut GameMap,
    target: RoomId,
    ship_entity: Entity,
    now: f64,
    config: &GameConfig,
    input_locked: &mut bool,
    presentation: &mut Presentation,
) {
    let leaving = map.active_room().enemies.clone();
    world_setup::hide_roster(world, &leaving, presentation);

    projectile::kill_all(world);
    ship::reset_to_launch_point(world, ship_entity, config.ship.scale);
    enter_room(world, map, target, now, presentation);
    // A ship lost mid-transit stays locked until relaunch
    if ship::is_alive(world, ship_entity) {
        ship::set_input_lock(input_locked, false, presentation);
    }
}

/// Make `target` the active room and wake its enemies.
pub fn enter_room(
    world: &mut World,
    map: &mut GameMap,
    target: RoomId,
    now: f64,
    presentation: &mut Presentation,
) {
    map.switch_to(target, presentation);
    let roster = map.active_room().enemies.clone();
    world_setup::show_roster(world, &roster, presentation);
    world_setup::arm_roster(world, &roster, now);
}
