//! Per-tick update
//!
//! Core game loop step. Runs only while playing; paused and finished
//! sessions are left untouched, spawn timers included.

use super::collision;
use super::state::GameSession;

/// Advance the session by one tick of `dt` seconds.
///
/// Order: elapsed time, movement, collision (ends the run), player clamp,
/// offscreen pruning, then spawning so new entities start the next tick
/// beyond the spawn edge.
pub fn tick(session: &mut GameSession, dt: f32) {
    if !session.is_playing() {
        return;
    }

    session.time_ticks += 1;
    session.elapsed += dt;

    session.registry.advance();

    let registry = &session.registry;
    let hit = collision::first_hit(registry.player(), registry.enemies()).map(|e| e.id);
    if let Some(enemy_id) = hit {
        log::debug!("Player hit by enemy #{}", enemy_id);
        session.end();
        return;
    }

    let GameSession {
        config,
        registry,
        spawner,
        rng,
        ..
    } = session;

    registry.clamp_player_to_viewport(config.viewport(), config.edge_margin);
    registry.prune_offscreen(config.travel_axis);
    spawner.update(dt, registry, config, rng);
}
