//! Space Dodge - A minimal arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `config`: Data-driven game configuration
//! - `error`: Configuration errors
//!
//! Window, input delivery and drawing belong to the host. The library only
//! exposes `tick`, key handlers and read-only views for the draw phase.

pub mod config;
pub mod error;
pub mod sim;

pub use config::{Config, SpeedRange, TravelAxis};
pub use error::{ConfigError, Result};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, velocities are expressed per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;

    /// Distance kept between the player and every viewport edge
    pub const EDGE_MARGIN: f32 = 10.0;
    /// New entities appear up to this far past the spawn edge
    pub const SPAWN_DEPTH: f32 = 80.0;

    /// Spawn intervals (seconds)
    pub const ENEMY_SPAWN_INTERVAL: f32 = 0.25;
    pub const DECORATION_SPAWN_INTERVAL: f32 = 1.0;

    /// Player movement per tick while a direction key is held
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Score points per second survived
    pub const SCORE_PER_SECOND: f32 = 10.0;
}
