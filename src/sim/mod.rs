//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded timestep only (the engine caps dt before calling in)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod chase;
pub mod grid;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use chase::{choose_direction, greedy_direction};
pub use grid::{Cell, Grid};
pub use state::{Actor, Adversary, Direction, GameEvent, GameState, GameStatus, Player};
pub use tick::tick;
