//! Game session state
//!
//! One `GameSession` per run, owned by the host loop and passed by reference
//! into update, draw and input handlers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::registry::EntityRegistry;
use super::spawn::SpawnScheduler;
use crate::config::{Config, TravelAxis};
use crate::consts::SCORE_PER_SECOND;
use crate::error::Result;

/// Seed used when neither the config nor the host supplies one
pub const DEFAULT_SEED: u64 = 0x5eed_d0d6e;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player collided; nothing moves any more
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Seconds of active (unpaused) play
    pub elapsed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub registry: EntityRegistry,
    pub(crate) spawner: SpawnScheduler,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Start a session with the config's seed, or [`DEFAULT_SEED`]
    pub fn new(config: Config) -> Result<Self> {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        Self::with_seed(config, seed)
    }

    /// Start a session with an explicit seed
    pub fn with_seed(config: Config, seed: u64) -> Result<Self> {
        config.validate()?;

        let registry = EntityRegistry::new(player_start(&config), config.player_size);
        let spawner = SpawnScheduler::new(&config);

        log::info!(
            "New session: {}x{} {} seed={}",
            config.viewport_width,
            config.viewport_height,
            config.travel_axis.as_str(),
            seed
        );

        Ok(Self {
            seed,
            phase: GamePhase::Playing,
            elapsed: 0.0,
            time_ticks: 0,
            registry,
            spawner,
            rng: Pcg32::seed_from_u64(seed),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Playing <-> Paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => {
                log::info!("Paused at {:.2}s", self.elapsed);
                GamePhase::Paused
            }
            GamePhase::Paused => {
                log::info!("Resumed");
                GamePhase::Playing
            }
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Enter the terminal phase
    pub(crate) fn end(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {:.2}s ({} ticks), score {}",
            self.elapsed,
            self.time_ticks,
            self.score()
        );
    }

    /// Score is a pure function of survival time
    pub fn score(&self) -> u64 {
        (self.elapsed * SCORE_PER_SECOND).round() as u64
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score())
    }

    /// Centered banner text for the current phase, if any
    pub fn banner(&self) -> Option<String> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Paused => Some("PAUSED".to_string()),
            GamePhase::GameOver => Some(format!("Game Over!\nYou Scored: {}", self.score())),
        }
    }
}

/// Player spawn point: against the edge opposite the incoming traffic
fn player_start(config: &Config) -> Vec2 {
    let size = config.player_size;
    let margin = config.edge_margin;
    match config.travel_axis {
        TravelAxis::Horizontal => Vec2::new(margin, config.viewport_height / 2.0 - size.y / 2.0),
        TravelAxis::Vertical => Vec2::new(config.viewport_width / 2.0 - size.x / 2.0, margin),
    }
}
