//! Sector map: a ring of rooms joined by wormholes.
//!
//! Stored in the engine, NOT as ECS entities. Rooms only hold the entity ids
//! of their enemy roster; the enemies themselves live in the hecs world.

use hecs::Entity;
use rand::seq::SliceRandom;
use rand::Rng;

use negspace_core::config::MapConfig;
use negspace_core::constants::*;
use negspace_core::enums::Background;
use negspace_core::events::{GameEvent, SoundId, VisualHandle, VisualKind, VisualStyle};
use negspace_core::types::{Position, RoomId};

use crate::presentation::Presentation;

const LABEL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Wormhole sprite shown for a linked exit once its room is clear.
#[derive(Debug, Clone)]
pub struct ExitMarker {
    pub target: RoomId,
    pub position: Position,
    pub rotation: f64,
    pub visual: VisualHandle,
}

/// One node of the sector graph.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    /// Display name, "Region XX-XXXX".
    pub label: String,
    pub background: Background,
    /// Enemy entities still in this room. Compacted by the cleanup sweep.
    pub enemies: Vec<Entity>,
    exits: [Option<RoomId>; MAX_EXITS],
    exit_markers: [Option<ExitMarker>; MAX_EXITS],
    /// Set once, on the first frame the roster is empty.
    pub has_cleared: bool,
}

impl Room {
    pub fn new(id: RoomId, label: String, background: Background) -> Self {
        Self {
            id,
            label,
            background,
            enemies: Vec::new(),
            exits: [None; MAX_EXITS],
            exit_markers: Default::default(),
            has_cleared: false,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn exits(&self) -> &[Option<RoomId>; MAX_EXITS] {
        &self.exits
    }

    /// Link `target` into the first free exit slot.
    ///
    /// A room has at most `MAX_EXITS` exits; further links are dropped with
    /// an error log and `false` is returned.
    pub fn add_exit(&mut self, target: RoomId) -> bool {
        match self.exits.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(target);
                true
            }
            None => {
                log::error!(
                    "room {} already has {} exits, dropping link to room {}",
                    self.id.0,
                    MAX_EXITS,
                    target.0
                );
                false
            }
        }
    }

    /// Live exit markers with their slot index.
    pub fn exit_markers(&self) -> impl Iterator<Item = (usize, &ExitMarker)> {
        self.exit_markers
            .iter()
            .enumerate()
            .filter_map(|(slot, marker)| marker.as_ref().map(|m| (slot, m)))
    }

    /// Spawn a marker for every linked exit that does not have one yet.
    pub fn create_exit_markers(&mut self, presentation: &mut Presentation) {
        let position = Position::new(EXIT_MARKER_X, EXIT_MARKER_Y);
        for (exit, marker) in self.exits.iter().zip(self.exit_markers.iter_mut()) {
            if marker.is_some() {
                continue;
            }
            if let Some(target) = *exit {
                let visual =
                    presentation.spawn_visual(VisualKind::ExitMarker, position, VisualStyle::Plain);
                *marker = Some(ExitMarker {
                    target,
                    position,
                    rotation: 0.0,
                    visual,
                });
            }
        }
    }

    pub fn destroy_exit_markers(&mut self, presentation: &mut Presentation) {
        for marker in self.exit_markers.iter_mut() {
            if let Some(m) = marker.take() {
                presentation.destroy_visual(m.visual);
            }
        }
    }

    fn spin_exit_markers(&mut self, dt: f64) {
        let step = EXIT_MARKER_SPIN_PER_FRAME * dt * REFERENCE_FRAME_RATE;
        for marker in self.exit_markers.iter_mut().flatten() {
            marker.rotation += step;
        }
    }
}

/// Timed wormhole transition. Only one can be in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WormholeState {
    Idle,
    Transitioning {
        exit: usize,
        target: RoomId,
        started_at: f64,
    },
}

/// The generated sector and the transition state machine.
#[derive(Debug, Clone)]
pub struct GameMap {
    rooms: Vec<Room>,
    active: RoomId,
    wormhole: WormholeState,
    background: Option<VisualHandle>,
}

impl GameMap {
    /// Generate the room ring.
    ///
    /// Room 0 is the empty home room. The others are visited in shuffled
    /// order and the last one links back home, so following `exits[0]` from
    /// home walks every room exactly once. Enemy rosters are left empty.
    pub fn generate<R: Rng>(rng: &mut R, config: &MapConfig) -> Self {
        let count = config.min_rooms + rng.gen_range(0..=config.rng_rooms);

        let mut rooms = Vec::with_capacity(count);
        rooms.push(Room::new(RoomId(0), region_label(rng), Background::Planet));
        for i in 1..count {
            rooms.push(Room::new(RoomId(i), region_label(rng), Background::Stars));
        }

        let mut order: Vec<usize> = (1..count).collect();
        order.shuffle(rng);

        let mut from = 0;
        for &to in &order {
            rooms[from].add_exit(RoomId(to));
            from = to;
        }
        rooms[from].add_exit(RoomId(0));

        log::info!("generated sector with {count} rooms");

        Self {
            rooms,
            active: RoomId(0),
            wormhole: WormholeState::Idle,
            background: None,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn active_id(&self) -> RoomId {
        self.active
    }

    pub fn active_room(&self) -> &Room {
        &self.rooms[self.active.0]
    }

    pub fn active_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.active.0]
    }

    pub fn wormhole(&self) -> WormholeState {
        self.wormhole
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.wormhole, WormholeState::Transitioning { .. })
    }

    pub fn all_clear(&self) -> bool {
        self.rooms.iter().all(Room::is_clear)
    }

    pub fn rooms_cleared(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_clear()).count()
    }

    /// Room state machine step for the active room: flip `has_cleared` and
    /// create the exit markers on the first empty frame, then spin them.
    ///
    /// Returns true on the frame the room becomes cleared.
    pub fn update_active_room(&mut self, dt: f64, presentation: &mut Presentation) -> bool {
        let room = self.active_room_mut();
        let mut cleared_now = false;
        if room.is_clear() && !room.has_cleared {
            room.has_cleared = true;
            room.create_exit_markers(presentation);
            log::info!("room {} cleared", room.id.0);
            presentation.notify(GameEvent::RoomCleared { room: room.id });
            cleared_now = true;
        }
        if room.is_clear() {
            room.spin_exit_markers(dt);
        }
        cleared_now
    }

    /// First exit marker of the active room within `distance` of `point`.
    pub fn exit_in_range(&self, point: &Position, distance: f64) -> Option<(usize, RoomId)> {
        self.active_room()
            .exit_markers()
            .find(|(_, m)| m.position.range_to(point) < distance)
            .map(|(slot, m)| (slot, m.target))
    }

    /// Enter `Transitioning`. Ignored while a transition is already running.
    pub fn begin_transit(
        &mut self,
        exit: usize,
        target: RoomId,
        now: f64,
        presentation: &mut Presentation,
    ) {
        if self.is_transitioning() {
            return;
        }
        log::info!("activating wormhole to room {}", target.0);
        presentation.play_one_shot(SoundId::Wormhole, DEFAULT_SOUND_VOLUME);
        presentation.notify(GameEvent::WormholeOpened { target });
        self.wormhole = WormholeState::Transitioning {
            exit,
            target,
            started_at: now,
        };
    }

    /// Target room once the running transition has lasted `delay` seconds.
    pub fn transit_due(&self, now: f64, delay: f64) -> Option<RoomId> {
        match self.wormhole {
            WormholeState::Transitioning {
                target, started_at, ..
            } if now - started_at >= delay => Some(target),
            _ => None,
        }
    }

    /// Drop a running transit without changing rooms.
    pub fn end_transit(&mut self) {
        self.wormhole = WormholeState::Idle;
    }

    /// Switch the active room and swap the room-bound visuals.
    ///
    /// Clears any transition, destroys the old markers and background,
    /// spawns the new background and, for an already-empty room, its markers.
    pub fn switch_to(&mut self, target: RoomId, presentation: &mut Presentation) {
        self.wormhole = WormholeState::Idle;
        self.active_room_mut().destroy_exit_markers(presentation);
        if let Some(bg) = self.background.take() {
            presentation.destroy_visual(bg);
        }

        if target.0 < self.rooms.len() {
            self.active = target;
        } else {
            log::error!("no room {} in sector, staying in room {}", target.0, self.active.0);
        }

        let room = self.active_room_mut();
        let background = room.background;
        if room.is_clear() {
            room.has_cleared = true;
            room.create_exit_markers(presentation);
        }
        let label = room.label.clone();
        let id = room.id;

        self.background = Some(presentation.spawn_visual(
            VisualKind::Background,
            Position::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            VisualStyle::Backdrop(background),
        ));
        log::info!("entered room {} ({label})", id.0);
        presentation.notify(GameEvent::RoomEntered { room: id, label });
    }

    /// Destroy the room-bound visuals before the map is discarded.
    pub fn teardown(&mut self, presentation: &mut Presentation) {
        self.active_room_mut().destroy_exit_markers(presentation);
        if let Some(bg) = self.background.take() {
            presentation.destroy_visual(bg);
        }
        self.wormhole = WormholeState::Idle;
    }
}

/// Random region name: two then four alphanumerics.
fn region_label<R: Rng>(rng: &mut R) -> String {
    let mut pick = |n: usize| -> String {
        (0..n)
            .map(|_| LABEL_CHARSET[rng.gen_range(0..LABEL_CHARSET.len())] as char)
            .collect()
    };
    let head = pick(2);
    let tail = pick(4);
    format!("Region {head}-{tail}")
}
