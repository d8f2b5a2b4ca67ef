//! Neon Chomp - a tile-maze chase arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, kinematics, chase policy, tick)
//! - `engine`: Host-facing render-loop state machine
//! - `input`: Keyboard intent buffering
//! - `audio`: Fire-and-forget audio collaborator boundary
//! - `tuning`: Data-driven game balance
//!
//! The host mounts a drawing surface and forwards key events; the engine
//! advances the simulation once per frame with a capped time delta and
//! exposes a `{ status, score }` snapshot for the HUD.

pub mod audio;
pub mod engine;
pub mod input;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, SessionSnapshot, Surface};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Maximum per-frame delta fed to the simulation (seconds).
    /// Caps the catch-up step after a host stall (e.g. a backgrounded tab).
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// How close to a cell center an actor must be (in tiles) before a turn
    /// or an adversary decision is allowed
    pub const CENTER_TOLERANCE: f32 = 0.12;
    /// Probe distance ahead of the actor when testing a buffered turn (tiles)
    pub const TURN_PROBE: f32 = 0.55;
    /// Probe distance when the adversary scans for open exits (tiles)
    pub const CHASE_PROBE: f32 = 0.65;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 6.0; // tiles per second
    pub const PLAYER_RADIUS: f32 = 0.38;
    pub const PLAYER_SPAWN: (f32, f32) = (1.5, 1.5);

    /// Adversary defaults
    pub const ADVERSARY_SPEED: f32 = 5.2;
    pub const ADVERSARY_RADIUS: f32 = 0.36;
    pub const ADVERSARY_SPAWN: (f32, f32) = (12.5, 10.5);

    /// Points awarded per pellet
    pub const PELLET_SCORE: u32 = 10;
    /// Chance the adversary ignores the greedy pick at a decision point
    pub const CHASE_RANDOMNESS: f32 = 0.08;
    /// Minimum sim-seconds between two pellet-eaten notifications
    pub const PELLET_EVENT_THROTTLE: f32 = 0.06;
    /// Mouth animation phase rate (radians per second, cosmetic only)
    pub const MOUTH_RATE: f32 = 10.0;
}

/// Center coordinate of the cell containing `v` (cell centers sit at k + 0.5)
#[inline]
pub fn nearest_cell_center(v: f32) -> f32 {
    (v - 0.5).round() + 0.5
}

/// Manhattan distance between two points in tile units
#[inline]
pub fn manhattan_dist(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
