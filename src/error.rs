//! Error types for session setup
//!
//! The simulation has no runtime failures; everything here is raised while
//! loading or validating a [`Config`](crate::Config).

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Viewport must have a positive, finite size
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// Spawn intervals must be positive and finite
    #[error("Invalid {name} interval: {value}")]
    InvalidInterval { name: &'static str, value: f32 },

    /// Speed ranges need 0 <= min <= max (player speed uses min == max)
    #[error("Invalid {name} speed range: [{min}, {max}]")]
    InvalidSpeedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// Entity sizes must be positive and finite
    #[error("Invalid {name} size: {width}x{height}")]
    InvalidSize {
        name: &'static str,
        width: f32,
        height: f32,
    },

    /// Margin is negative or leaves no room for the player
    #[error("Invalid edge margin: {0}")]
    InvalidMargin(f32),

    /// Spawn depth must be non-negative and finite
    #[error("Invalid spawn depth: {0}")]
    InvalidSpawnDepth(f32),

    /// Config file is not valid JSON for `Config`
    #[error("Config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("Config IO failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
