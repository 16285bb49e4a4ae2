//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied dt only, velocities in per-tick units
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod input;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{first_hit, player_hits_any};
pub use entity::{Aabb, Category, Entity};
pub use input::{InputOutcome, Key, key_down, key_up};
pub use registry::EntityRegistry;
pub use spawn::{IntervalTimer, SpawnScheduler, spawn_decoration, spawn_enemy};
pub use state::{DEFAULT_SEED, GamePhase, GameSession};
pub use tick::tick;
