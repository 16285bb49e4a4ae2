//! Keyboard input handling
//!
//! The host translates its own key codes into [`Key`] and forwards key-down
//! and key-up events here. Movement keys set the player's velocity per axis;
//! both axes are independent so diagonals work.

use serde::{Deserialize, Serialize};

use super::state::GameSession;

/// Abstract game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Toggle pause
    Pause,
    /// Leave immediately
    Quit,
    /// Acknowledge the game-over screen
    Confirm,
}

impl Key {
    /// Up, Down, Left or Right
    pub fn is_direction(&self) -> bool {
        matches!(self, Key::Up | Key::Down | Key::Left | Key::Right)
    }
}

/// What the host should do after an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    /// End the session and close the window
    Quit,
}

/// Handle a key press
pub fn key_down(session: &mut GameSession, key: Key) -> InputOutcome {
    match key {
        Key::Quit => return InputOutcome::Quit,
        Key::Confirm if session.is_game_over() => return InputOutcome::Quit,
        Key::Confirm => {}
        Key::Pause => session.toggle_pause(),
        // Still accepted while paused; applies on resume
        Key::Up | Key::Down | Key::Left | Key::Right if !session.is_game_over() => {
            let speed = session.config().player_speed;
            let vel = &mut session.registry.player_mut().vel;
            match key {
                Key::Up => vel.y = speed,
                Key::Down => vel.y = -speed,
                Key::Left => vel.x = -speed,
                _ => vel.x = speed,
            }
        }
        Key::Up | Key::Down | Key::Left | Key::Right => {}
    }
    InputOutcome::Continue
}

/// Handle a key release.
///
/// An axis stops only when the released key is the one currently driving
/// it, so releasing Up while Down is held keeps moving down.
pub fn key_up(session: &mut GameSession, key: Key) {
    if session.is_game_over() {
        return;
    }
    let vel = &mut session.registry.player_mut().vel;
    match key {
        Key::Up if vel.y > 0.0 => vel.y = 0.0,
        Key::Down if vel.y < 0.0 => vel.y = 0.0,
        Key::Left if vel.x < 0.0 => vel.x = 0.0,
        Key::Right if vel.x > 0.0 => vel.x = 0.0,
        _ => {}
    }
}
