//! Keyboard intent buffering
//!
//! Latest-wins: each recognized key press overwrites the player's buffered
//! direction, which the next tick applies at a safe turning point. A press
//! from a standstill also sets the current direction so the first key
//! produces instant movement.

use crate::sim::{Direction, GameState};

/// Map a host key name to a direction; anything else is unrecognized
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// Record a directional key press. Returns true when the key was recognized
/// so the host can suppress its default scrolling behavior; unrecognized
/// keys have no side effect.
pub fn apply_key(state: &mut GameState, key: &str) -> bool {
    let Some(dir) = direction_for_key(key) else {
        return false;
    };
    state.player.want_dir = dir;
    if state.player.body.dir == Direction::None {
        state.player.body.dir = dir;
    }
    true
}

/// Scoped keyboard subscription: holds the host's teardown and runs it
/// exactly once, on drop or on explicit [`release`](KeyBinding::release),
/// so a global listener never leaks past the game's lifetime.
pub struct KeyBinding {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl KeyBinding {
    /// Wrap the teardown returned by the host's listener registration
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Detach now instead of waiting for drop
    pub fn release(mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}
