//! Gap Runner - A side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `game`: Controller that owns the simulation and applies host events
//! - `platform`: Host adapters (frame clock, key mapping, input queue)
//! - `settings`: Data-driven game tuning

pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame we try to catch up on (seconds)
    pub const MAX_FRAME_SECS: f32 = 0.1;
    /// Seconds between obstacle pair spawns
    pub const SPAWN_INTERVAL_SECS: f32 = 1.5;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 640.0;

    /// Entity defaults
    pub const ENTITY_START_X: f32 = 45.0;
    pub const ENTITY_WIDTH: f32 = 34.0;
    pub const ENTITY_HEIGHT: f32 = 24.0;
    /// Downward acceleration (units/tick²) - low for a slow fall
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set by a jump (units/tick)
    pub const JUMP_IMPULSE: f32 = 8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_HEIGHT: f32 = 512.0;
    /// Horizontal obstacle velocity (units/tick, negative = leftward)
    pub const SCROLL_VELOCITY: f32 = -4.0;
    /// Vertical opening between an upper and lower obstacle
    pub const GAP_SIZE: f32 = 150.0;
    /// Smallest distance from the world top to the gap
    pub const GAP_TOP_MARGIN: f32 = 50.0;
    /// Height kept out of the random gap range at the bottom
    pub const GAP_BOTTOM_RESERVE: f32 = 150.0;
}
