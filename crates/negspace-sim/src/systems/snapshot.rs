//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use negspace_core::components::*;
use negspace_core::energy::{Gauge, Shield};
use negspace_core::enums::*;
use negspace_core::state::*;
use negspace_core::types::{Position, SimTime};

use crate::map::GameMap;
use crate::presentation::PresentationFrame;
use crate::score::ScoreState;

/// Everything the snapshot reads besides the world.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: Option<Entity>,
    pub map: Option<&'a GameMap>,
    pub score: &'a ScoreState,
    pub input_locked: bool,
    pub gauge_segments: usize,
    /// Seconds since the current sector started.
    pub sector_time_secs: f64,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    inputs: SnapshotInputs<'_>,
    frame: PresentationFrame,
) -> GameStateSnapshot {
    let roster: &[Entity] = inputs
        .map
        .map(|m| m.active_room().enemies.as_slice())
        .unwrap_or(&[]);

    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        ship: build_ship(world, &inputs),
        room: inputs.map.map(build_room).unwrap_or_default(),
        map: inputs.map.map(build_map).unwrap_or_default(),
        enemies: build_enemies(world, roster),
        projectiles: build_projectiles(world),
        score: inputs.score.view(inputs.sector_time_secs),
        visual_events: frame.visual_events,
        audio_events: frame.audio_events,
        events: frame.events,
    }
}

fn build_ship(world: &World, inputs: &SnapshotInputs<'_>) -> ShipView {
    let Some(ship) = inputs.ship else {
        return ShipView::default();
    };
    let Ok(mut query) =
        world.query_one::<(&PlayerShip, &Position, &Heading, &Appearance, &Gauge, &Shield)>(ship)
    else {
        return ShipView::default();
    };
    let Some((player, pos, heading, appearance, gauge, shield)) = query.get() else {
        return ShipView::default();
    };

    ShipView {
        position: *pos,
        rotation: heading.rotation,
        scale: appearance.scale,
        lives: player.lives,
        phase: player.phase,
        energy: EnergyView {
            current: gauge.available(),
            max: gauge.max(),
            segments: gauge.segment_fill(inputs.gauge_segments),
        },
        shield_active: shield.is_active(),
        input_locked: inputs.input_locked,
    }
}

fn build_room(map: &GameMap) -> RoomView {
    let room = map.active_room();
    RoomView {
        id: room.id,
        label: room.label.clone(),
        background: room.background,
        is_clear: room.is_clear(),
        enemies_remaining: room.enemies.len() as u32,
        exit_markers: room
            .exit_markers()
            .map(|(slot, m)| ExitMarkerView {
                slot,
                target: m.target,
                position: m.position,
                rotation: m.rotation,
            })
            .collect(),
    }
}

fn build_map(map: &GameMap) -> MapView {
    MapView {
        room_count: map.rooms().len() as u32,
        rooms_cleared: map.rooms_cleared() as u32,
        wormhole_active: map.is_transitioning(),
    }
}

/// Enemies of the active room, in roster order.
fn build_enemies(world: &World, roster: &[Entity]) -> Vec<EnemyView> {
    roster
        .iter()
        .filter_map(|&e| {
            let mut query = world.query_one::<(&Enemy, &Position, &Heading)>(e).ok()?;
            let (enemy, pos, heading) = query.get()?;
            Some(EnemyView {
                kind: enemy.kind,
                position: *pos,
                rotation: heading.rotation,
                life: enemy.life,
                phase: enemy.phase,
                stunned: enemy.stunned,
            })
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (p, _))| p.alive)
        .map(|(_, (p, pos))| ProjectileView {
            kind: p.kind,
            owner: p.owner,
            position: *pos,
            bounced: p.bounced,
        })
        .collect()
}
