//! Simulation constants and tuning parameters.
//!
//! These are the authoritative defaults; `config::GameConfig::default()`
//! mirrors them and a JSON config may override the tunable subset.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Arena width in pixels.
pub const ARENA_WIDTH: f64 = 800.0;

/// Arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Player ship ---

/// Ship launch position.
pub const SHIP_SPAWN_X: f64 = 400.0;
pub const SHIP_SPAWN_Y: f64 = 500.0;

/// Visual scale of a freshly launched ship.
pub const SHIP_SCALE: f64 = 2.0;

/// Maximum speed per axis (pixels/s).
pub const SHIP_MAX_VELOCITY: f64 = 100.0;

/// Deceleration per axis when not thrusting (pixels/s²).
pub const SHIP_DRAG: f64 = 100.0;

/// Thrust acceleration along the facing (pixels/s²).
pub const SHIP_ACCELERATION: f64 = 80.0;

/// Turn rate (degrees/s).
pub const SHIP_ROTATION_SPEED_DEG: f64 = 240.0;

/// Energy consumed per shot.
pub const SHIP_SHOT_COST: f64 = 10.0;

/// Minimum seconds between two shots.
pub const SHIP_SHOT_INTERVAL: f64 = 0.10;

/// Lives at the start of a sector.
pub const SHIP_LIVES: u32 = 3;

/// Duration of the ship explosion before the ship counts as dead (seconds).
pub const SHIP_DEATH_DURATION: f64 = 1.0;

/// Distance from the ship center to the gun muzzle (pixels).
pub const SHIP_NOSE_OFFSET: f64 = 32.0;

// --- Energy gauge ---

pub const GAUGE_MAX: f64 = 100.0;

/// Recharge rate (units/s).
pub const GAUGE_RECHARGE_RATE: f64 = 33.0;

/// Number of display segments.
pub const GAUGE_SEGMENTS: usize = 10;

// --- Shield ---

/// Energy drained per activation.
pub const SHIELD_DRAIN: f64 = 7.0;

/// Length of one shield pulse (seconds).
pub const SHIELD_DURATION: f64 = 0.10;

// --- Projectiles ---

/// Distance under which a projectile touches its target (pixels).
pub const SHOT_HIT_RADIUS: f64 = 16.0;

pub const SHOT_SPEED_DEFAULT: f64 = 500.0;
pub const HOMING_SPEED_DEFAULT: f64 = 100.0;
pub const BEAM_SPEED_DEFAULT: f64 = 0.0;

/// Default lifetime (seconds).
pub const SHOT_LIFETIME_DEFAULT: f64 = 3.0;

pub const SHOT_DAMAGE_DEFAULT: i32 = 5;

// --- Enemies (shared) ---

/// Duration of the death animation (seconds).
pub const ENEMY_DEATH_DURATION: f64 = 0.75;

/// Contact is checked within this multiple of the hit radius.
pub const ENEMY_CONTACT_RADIUS_FACTOR: f64 = 1.5;

/// Per-instance speed randomization bounds.
pub const ENEMY_SPEED_JITTER_MIN: f64 = 0.8;
pub const ENEMY_SPEED_JITTER_SPAN: f64 = 0.4;

/// Default stun timeout for Spinner and Sprayer (seconds).
pub const ENEMY_STUN_TIMEOUT: f64 = 1.0;

/// Region used when re-placing enemies after a relaunch.
pub const ENEMY_RESET_X_MIN: f64 = 40.0;
pub const ENEMY_RESET_X_MAX: f64 = 760.0;
pub const ENEMY_RESET_Y_MIN: f64 = 20.0;
pub const ENEMY_RESET_Y_MAX: f64 = 300.0;

// --- Spinner ---

pub const SPINNER_SPEED: f64 = 70.0;
pub const SPINNER_SPIN_DEG: f64 = 480.0;
pub const SPINNER_LIFE: i32 = 10;
pub const SPINNER_HIT_RADIUS: f64 = 15.0;

// --- Sprayer ---

pub const SPRAYER_SPEED: f64 = 20.0;
pub const SPRAYER_LIFE: i32 = 25;
pub const SPRAYER_HIT_RADIUS: f64 = 24.0;
pub const SPRAYER_FIRST_SHOT_DELAY: f64 = 2.0;
pub const SPRAYER_BASE_SHOT_INTERVAL: f64 = 1.5;
pub const SPRAYER_SHOT_INTERVAL_JITTER: f64 = 1.0;
pub const SPRAYER_PROJECTILE_SPEED: f64 = 90.0;

// --- Thresher ---

pub const THRESHER_SPEED: f64 = 0.0;
pub const THRESHER_LIFE: i32 = 40;
pub const THRESHER_HIT_RADIUS: f64 = 24.0;
pub const THRESHER_FIRST_SHOT_DELAY: f64 = 1.0;
pub const THRESHER_BASE_SHOT_INTERVAL: f64 = 0.1;
pub const THRESHER_SHOT_INTERVAL_JITTER: f64 = 0.2;
pub const THRESHER_PROJECTILE_SPEED: f64 = 33.0;
pub const THRESHER_STUN_TIMEOUT: f64 = 2.5;
pub const THRESHER_STUN_SCORE: u64 = 100;
pub const THRESHER_KILL_SCORE: u64 = 3500;

/// Lifetime of enemy projectiles (seconds).
pub const ENEMY_PROJECTILE_LIFETIME: f64 = 30.0;

// --- Map ---

pub const MIN_ROOMS: usize = 8;
pub const RNG_ROOMS: usize = 8;

/// Exit slots per room.
pub const MAX_EXITS: usize = 4;

/// Enemies stocked in each populated room (inclusive).
pub const ROOM_ENEMIES_MIN: usize = 5;
pub const ROOM_ENEMIES_MAX: usize = 10;

/// Roster draw: p < THRESHER_CUTOFF → Thresher, p < SPINNER_CUTOFF → Spinner,
/// else Sprayer.
pub const THRESHER_CUTOFF: f64 = 0.10;
pub const SPINNER_CUTOFF: f64 = 0.75;

/// Where the exit marker appears in a cleared room.
pub const EXIT_MARKER_X: f64 = 400.0;
pub const EXIT_MARKER_Y: f64 = 150.0;

/// Marker spin per 60 Hz frame (radians).
pub const EXIT_MARKER_SPIN_PER_FRAME: f64 = 0.0005;

/// The ship must be this close to a marker to open it (pixels).
pub const WORMHOLE_ACTIVATION_DISTANCE: f64 = 75.0;

/// Duration of the wormhole transit (seconds).
pub const WORMHOLE_DELAY: f64 = 2.0;

/// Ship spin per 60 Hz frame during transit (radians).
pub const WORMHOLE_SHIP_SPIN_PER_FRAME: f64 = 0.2;

/// Ship scale multiplier per 60 Hz frame during transit.
pub const WORMHOLE_SHIP_SHRINK_PER_FRAME: f64 = 0.97;

/// Frames per second the per-frame wormhole and marker rates are quoted at.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

// --- Audio ---

pub const MUSIC_VOLUME: f64 = 0.5;
pub const SHIELD_SOUND_VOLUME: f64 = 0.2;
pub const DEFAULT_SOUND_VOLUME: f64 = 1.0;
