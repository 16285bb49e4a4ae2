//! Game configuration
//!
//! One structure holds every tunable: viewport, spawn cadence, speed ranges
//! and entity sizes. Loaded from JSON when the host provides a file,
//! otherwise one of the built-in presets is used.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};

/// Direction enemies and decorations travel across the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TravelAxis {
    /// Spawn past the right edge, fly left. Player starts on the left.
    #[default]
    Horizontal,
    /// Spawn past the top edge, fall down. Player starts at the bottom.
    Vertical,
}

impl TravelAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelAxis::Horizontal => "Horizontal",
            TravelAxis::Vertical => "Vertical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Some(TravelAxis::Horizontal),
            "vertical" | "v" => Some(TravelAxis::Vertical),
            _ => None,
        }
    }

    /// Unit vector pointing from the spawn edge into the viewport
    pub fn direction(&self) -> Vec2 {
        match self {
            TravelAxis::Horizontal => Vec2::NEG_X,
            TravelAxis::Vertical => Vec2::NEG_Y,
        }
    }
}

/// Inclusive speed range in units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `speed`
    pub const fn fixed(speed: f32) -> Self {
        Self::new(speed, speed)
    }

    pub fn contains(&self, speed: f32) -> bool {
        speed >= self.min && speed <= self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window title (host only)
    pub title: String,

    // === Viewport ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Distance the player is kept from every viewport edge
    pub edge_margin: f32,

    // === Spawning ===
    pub travel_axis: TravelAxis,
    /// Seconds between enemy spawns
    pub enemy_spawn_interval: f32,
    /// Seconds between decoration spawns
    pub decoration_spawn_interval: f32,
    pub enemy_speed_range: SpeedRange,
    pub decoration_speed_range: SpeedRange,
    /// How far past the spawn edge a new entity may appear
    pub spawn_depth: f32,

    // === Player ===
    /// Units per tick while a direction key is held
    pub player_speed: f32,

    // === Sizes (bounding boxes) ===
    pub player_size: Vec2,
    pub enemy_size: Vec2,
    pub decoration_size: Vec2,

    /// RNG seed; the host picks one when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::sky_patrol()
    }
}

impl Config {
    /// Side-scrolling variant: jets fly in from the right, clouds drift by
    pub fn sky_patrol() -> Self {
        Self {
            title: "Space Shooter".to_string(),

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            edge_margin: EDGE_MARGIN,

            travel_axis: TravelAxis::Horizontal,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            decoration_spawn_interval: DECORATION_SPAWN_INTERVAL,
            enemy_speed_range: SpeedRange::new(2.0, 10.0),
            decoration_speed_range: SpeedRange::new(1.0, 3.0),
            spawn_depth: SPAWN_DEPTH,

            player_speed: PLAYER_SPEED,

            player_size: Vec2::new(64.0, 32.0),
            enemy_size: Vec2::new(48.0, 20.0),
            decoration_size: Vec2::new(72.0, 40.0),

            seed: None,
        }
    }

    /// Vertical variant: lasers rain down, stars drift slowly
    pub fn space_shootout() -> Self {
        Self {
            title: "Space Shoutout".to_string(),
            viewport_width: 600.0,
            viewport_height: 600.0,
            travel_axis: TravelAxis::Vertical,
            decoration_spawn_interval: 1.5,
            decoration_speed_range: SpeedRange::fixed(0.5),
            player_size: Vec2::new(59.0, 45.0),
            enemy_size: Vec2::new(6.0, 38.0),
            decoration_size: Vec2::new(13.0, 13.0),
            ..Self::sky_patrol()
        }
    }

    /// Parse a JSON config; missing fields fall back to the defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Reject configurations a session cannot run with
    pub fn validate(&self) -> Result<()> {
        let (w, h) = (self.viewport_width, self.viewport_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: w,
                height: h,
            });
        }

        for (name, value) in [
            ("enemy spawn", self.enemy_spawn_interval),
            ("decoration spawn", self.decoration_spawn_interval),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidInterval { name, value });
            }
        }

        for (name, range) in [
            ("enemy", self.enemy_speed_range),
            ("decoration", self.decoration_speed_range),
            ("player", SpeedRange::fixed(self.player_speed)),
        ] {
            if !range.is_valid() {
                return Err(ConfigError::InvalidSpeedRange {
                    name,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        for (name, size) in [
            ("player", self.player_size),
            ("enemy", self.enemy_size),
            ("decoration", self.decoration_size),
        ] {
            if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
                return Err(ConfigError::InvalidSize {
                    name,
                    width: size.x,
                    height: size.y,
                });
            }
        }

        let m = self.edge_margin;
        let room = self.viewport() - Vec2::splat(2.0 * m);
        if !(m.is_finite() && m >= 0.0)
            || room.x < self.player_size.x
            || room.y < self.player_size.y
        {
            return Err(ConfigError::InvalidMargin(m));
        }

        if !(self.spawn_depth.is_finite() && self.spawn_depth >= 0.0) {
            return Err(ConfigError::InvalidSpawnDepth(self.spawn_depth));
        }

        Ok(())
    }
}
