//! Periodic spawning of enemies and decorations
//!
//! The host's "call me every N seconds" facility is modelled by
//! [`IntervalTimer`], fed with the simulation dt so spawning stops whenever
//! the session stops ticking (pause, game over).

use glam::Vec2;
use rand::Rng;

use super::entity::Category;
use super::registry::EntityRegistry;
use crate::config::{Config, SpeedRange, TravelAxis};

/// Fires once per elapsed interval
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: f32,
    accumulated: f32,
}

impl IntervalTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Accumulate `dt` and return how many times the timer fired.
    /// A long `dt` can fire several times.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulated += dt.max(0.0);
        let mut fired = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// Drives both spawn timers
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    enemy_timer: IntervalTimer,
    decoration_timer: IntervalTimer,
}

impl SpawnScheduler {
    pub fn new(config: &Config) -> Self {
        Self {
            enemy_timer: IntervalTimer::new(config.enemy_spawn_interval),
            decoration_timer: IntervalTimer::new(config.decoration_spawn_interval),
        }
    }

    /// Advance the enemy timer, spawning one enemy per firing
    pub fn tick_enemy_spawn(
        &mut self,
        dt: f32,
        registry: &mut EntityRegistry,
        config: &Config,
        rng: &mut impl Rng,
    ) -> u32 {
        let fired = self.enemy_timer.advance(dt);
        for _ in 0..fired {
            spawn_enemy(registry, config, rng);
        }
        fired
    }

    /// Advance the decoration timer, spawning one decoration per firing
    pub fn tick_decoration_spawn(
        &mut self,
        dt: f32,
        registry: &mut EntityRegistry,
        config: &Config,
        rng: &mut impl Rng,
    ) -> u32 {
        let fired = self.decoration_timer.advance(dt);
        for _ in 0..fired {
            spawn_decoration(registry, config, rng);
        }
        fired
    }

    /// Run both timers for one tick
    pub fn update(
        &mut self,
        dt: f32,
        registry: &mut EntityRegistry,
        config: &Config,
        rng: &mut impl Rng,
    ) {
        self.tick_enemy_spawn(dt, registry, config, rng);
        self.tick_decoration_spawn(dt, registry, config, rng);
    }
}

/// Spawn one enemy just past the spawn edge
pub fn spawn_enemy(registry: &mut EntityRegistry, config: &Config, rng: &mut impl Rng) -> u32 {
    spawn_one(
        registry,
        config,
        rng,
        Category::Enemy,
        config.enemy_size,
        config.enemy_speed_range,
    )
}

/// Spawn one decoration just past the spawn edge
pub fn spawn_decoration(
    registry: &mut EntityRegistry,
    config: &Config,
    rng: &mut impl Rng,
) -> u32 {
    spawn_one(
        registry,
        config,
        rng,
        Category::Decoration,
        config.decoration_size,
        config.decoration_speed_range,
    )
}

fn spawn_one(
    registry: &mut EntityRegistry,
    config: &Config,
    rng: &mut impl Rng,
    category: Category,
    size: Vec2,
    speed_range: SpeedRange,
) -> u32 {
    let pos = spawn_position(config, size, rng);
    let vel = config.travel_axis.direction() * sample_speed(speed_range, rng);
    let id = registry.spawn(category, pos, size, vel);
    log::debug!("Spawned {:?} #{} at {} moving {}", category, id, pos, vel);
    id
}

/// Bottom-left corner for a new entity, fully beyond the spawn edge
fn spawn_position(config: &Config, size: Vec2, rng: &mut impl Rng) -> Vec2 {
    let (w, h) = (config.viewport_width, config.viewport_height);
    let margin = config.edge_margin;
    match config.travel_axis {
        TravelAxis::Horizontal => {
            let left = sample(w, w + config.spawn_depth, rng);
            let top = sample(margin, h - margin, rng);
            Vec2::new(left, top - size.y)
        }
        TravelAxis::Vertical => {
            let left = sample(margin, w - margin, rng);
            let bottom = sample(h, h + config.spawn_depth, rng);
            Vec2::new(left, bottom)
        }
    }
}

fn sample_speed(range: SpeedRange, rng: &mut impl Rng) -> f32 {
    sample(range.min, range.max, rng)
}

/// Uniform in `[lo, hi]`; a degenerate range yields `lo`
fn sample(lo: f32, hi: f32, rng: &mut impl Rng) -> f32 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}
