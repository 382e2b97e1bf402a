//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the sector map, processes
//! commands and polled input, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless (no renderer or audio backend),
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use negspace_core::commands::{InputState, PlayerCommand};
use negspace_core::config::GameConfig;
use negspace_core::constants::*;
use negspace_core::enums::{GamePhase, LifePhase};
use negspace_core::error::ConfigResult;
use negspace_core::events::{AudioHandle, GameEvent, MusicId};
use negspace_core::state::{GameStateSnapshot, SectorSummary};
use negspace_core::types::{RoomId, SimTime};

use crate::map::GameMap;
use crate::presentation::Presentation;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::systems::wormhole::TransitOutcome;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning.
    pub tuning: GameConfig,
    /// Score carried over from the previous sector.
    pub carryover: Option<SectorSummary>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tuning: GameConfig::default(),
            carryover: None,
        }
    }
}

/// The generated map and the ship flying through it.
struct Sector {
    map: GameMap,
    ship: Entity,
    started_at: f64,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    input: InputState,
    input_locked: bool,
    despawn_buffer: Vec<Entity>,
    presentation: Presentation,
    music: Option<AudioHandle>,
    sector: Option<Sector>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine, rejecting invalid tuning.
    pub fn try_new(config: SimConfig) -> ConfigResult<Self> {
        config.tuning.validate()?;
        Ok(Self::build(config))
    }

    /// Create a new simulation engine. Invalid tuning is replaced by the
    /// defaults with a warning.
    pub fn new(mut config: SimConfig) -> Self {
        if let Err(e) = config.tuning.validate() {
            log::warn!("{e}; falling back to default tuning");
            config.tuning = GameConfig::default();
        }
        Self::build(config)
    }

    fn build(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            config: config.tuning,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            input: InputState::default(),
            input_locked: false,
            despawn_buffer: Vec::new(),
            presentation: Presentation::default(),
            music: None,
            sector: None,
            score: config
                .carryover
                .as_ref()
                .map(ScoreState::from_summary)
                .unwrap_or_default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Replace the held flight controls. Read once per tick.
    pub fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let frame = self.presentation.drain();
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                time: self.time,
                phase: self.phase,
                ship: self.sector.as_ref().map(|s| s.ship),
                map: self.sector.as_ref().map(|s| &s.map),
                score: &self.score,
                input_locked: self.input_locked,
                gauge_segments: self.config.gauge.segments,
                sector_time_secs: self
                    .sector
                    .as_ref()
                    .map(|s| self.time.since(s.started_at))
                    .unwrap_or(0.0),
            },
            frame,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current sector map, once a sector has started.
    pub fn map(&self) -> Option<&GameMap> {
        self.sector.as_ref().map(|s| &s.map)
    }

    /// The ship entity, once a sector has started.
    pub fn ship(&self) -> Option<Entity> {
        self.sector.as_ref().map(|s| s.ship)
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    /// Score to carry into the next sector.
    pub fn summary(&self) -> SectorSummary {
        self.score.summary()
    }

    /// Mutable access to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy into the active room's roster (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        config: &negspace_core::config::EnemyConfig,
    ) -> Option<Entity> {
        let sector = self.sector.as_mut()?;
        let room = sector.map.active_id();
        let entity = world_setup::spawn_enemy(&mut self.world, &mut self.rng, config, room);
        sector.map.active_room_mut().enemies.push(entity);
        world_setup::show_roster(&mut self.world, &[entity], &mut self.presentation);
        world_setup::arm_roster(&mut self.world, &[entity], self.time.elapsed_secs);
        Some(entity)
    }

    /// Despawn every enemy in the sector (for tests).
    #[cfg(test)]
    pub fn clear_all_rooms(&mut self) {
        let Some(sector) = self.sector.as_mut() else {
            return;
        };
        for room in sector.map.rooms_mut() {
            for entity in room.enemies.drain(..) {
                let _ = self.world.despawn(entity);
            }
        }
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSector => {
                if matches!(self.phase, GamePhase::Briefing | GamePhase::Victory) {
                    self.start_sector();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Generate a fresh map and launch the ship into its home room.
    fn start_sector(&mut self) {
        if let Some(mut old) = self.sector.take() {
            old.map.teardown(&mut self.presentation);
        }
        world_setup::clear_world(&mut self.world, &mut self.presentation);

        let mut map = GameMap::generate(&mut self.rng, &self.config.map);
        world_setup::populate_map(&mut self.world, &mut self.rng, &mut map, &self.config.map);

        let now = self.time.elapsed_secs;
        let ship = world_setup::spawn_ship(&mut self.world, &self.config, now, &mut self.presentation);
        systems::wormhole::enter_room(
            &mut self.world,
            &mut map,
            RoomId(0),
            now,
            &mut self.presentation,
        );

        if self.music.is_none() {
            self.music = Some(self.presentation.play_loop(MusicId::Stage1, MUSIC_VOLUME));
        }
        self.input_locked = false;
        self.sector = Some(Sector {
            map,
            ship,
            started_at: now,
        });
        self.phase = GamePhase::Active;
        log::info!("sector started");
    }

    fn stop_music(&mut self) {
        if let Some(handle) = self.music.take() {
            self.presentation.stop(handle);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(sector) = self.sector.as_mut() else {
            return;
        };
        let ship = sector.ship;
        let now = self.time.elapsed_secs;
        let dt = self.time.dt();

        // 1. Ship lifecycle (Dying → Dead) and game over
        systems::ship::update_lifecycle(
            &mut self.world,
            ship,
            now,
            &self.config.ship,
            &mut self.presentation,
        );
        if let Some((LifePhase::Dead, 0)) = systems::ship::status(&self.world, ship) {
            log::info!("game over");
            self.phase = GamePhase::GameOver;
            self.presentation.notify(GameEvent::GameOver);
            self.stop_music();
            return;
        }

        // 2. Enemy AI on the active roster, then the room / wormhole update
        let roster = sector.map.active_room().enemies.clone();
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            &roster,
            ship,
            now,
            &mut self.score,
            &mut self.input_locked,
            &mut self.presentation,
        );
        systems::movement::run(&mut self.world, &roster, dt);
        let outcome = systems::wormhole::run(
            &mut self.world,
            &mut sector.map,
            ship,
            &self.input,
            &mut self.input_locked,
            now,
            dt,
            &self.config,
            &mut self.presentation,
        );

        // 3. Input: relaunch is honored even while input is locked
        if self.input.relaunch
            && systems::ship::relaunch(
                &mut self.world,
                ship,
                now,
                &self.config,
                &mut self.input_locked,
                &mut self.presentation,
            )
        {
            systems::projectile::kill_all(&mut self.world);
            let roster = sector.map.active_room().enemies.clone();
            world_setup::reset_enemy_positions(&mut self.world, &mut self.rng, &roster);
        }
        systems::ship::handle_input(
            &mut self.world,
            ship,
            &self.input,
            self.input_locked,
            now,
            &self.config.ship,
            &mut self.presentation,
        );

        // 4. Ship kinematics
        systems::ship::integrate(&mut self.world, ship, dt, &self.config.ship);

        // 5. Projectiles and collisions
        let roster = sector.map.active_room().enemies.clone();
        systems::projectile::run(
            &mut self.world,
            ship,
            &roster,
            now,
            dt,
            &mut self.input_locked,
            &mut self.presentation,
        );

        // 6. Gauge recharge and shield expiry
        systems::ship::regen(&mut self.world, ship, now, dt);

        // 7. Cleanup (expired projectiles, dead enemies, roster compaction)
        systems::cleanup::run(&mut self.world, &mut sector.map, &mut self.despawn_buffer);

        // 8. Presentation transform sync
        systems::sync::run(&self.world, &sector.map, &mut self.presentation);

        if outcome == TransitOutcome::SectorCleared {
            self.score.sectors_cleared += 1;
            self.phase = GamePhase::Victory;
            self.presentation.notify(GameEvent::SectorCleared);
            self.stop_music();
        }
    }
}
