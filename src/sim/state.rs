//! Game state and core simulation types
//!
//! One `GameState` owns everything a single game instance mutates: the grid,
//! both actors, the session counters, and the seeded RNG. Nothing here is
//! process-global, so multiple instances never cross-contaminate.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::*;
use crate::tuning::Tuning;

/// Travel direction; `None` means zero velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Cardinal directions in chase tie-break order
    pub const CARDINALS: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit velocity vector for this direction
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::None => Vec2::ZERO,
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// The direct reversal of this direction
    pub fn reverse(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A moving body on the grid, shared by player and adversary so the wall
/// rules treat both identically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    /// Continuous position in tile units
    pub pos: Vec2,
    pub dir: Direction,
    /// Tiles per second
    pub speed: f32,
    /// Collision radius in tile units
    pub radius: f32,
}

impl Actor {
    pub fn new(pos: (f32, f32), dir: Direction, speed: f32, radius: f32) -> Self {
        Self {
            pos: Vec2::new(pos.0, pos.1),
            dir,
            speed,
            radius,
        }
    }

    /// Integer indices of the cell containing this actor
    pub fn cell(&self) -> (usize, usize) {
        (self.pos.x.floor() as usize, self.pos.y.floor() as usize)
    }
}

/// The player: an actor plus a buffered turn intent and a cosmetic mouth phase
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Actor,
    /// Buffered direction, applied at the next safe turning point
    pub want_dir: Direction,
    /// Mouth-open animation phase in radians (not gameplay-affecting)
    pub mouth: f32,
}

impl Player {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            body: Actor::new(
                PLAYER_SPAWN,
                Direction::None,
                tuning.player_speed,
                tuning.player_radius,
            ),
            want_dir: Direction::None,
            mouth: 0.0,
        }
    }
}

/// The adversary: no intent buffer, its direction is recomputed by the
/// chase policy at intersections
#[derive(Debug, Clone, PartialEq)]
pub struct Adversary {
    pub body: Actor,
}

impl Adversary {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            body: Actor::new(
                ADVERSARY_SPAWN,
                Direction::Left,
                tuning.adversary_speed,
                tuning.adversary_radius,
            ),
        }
    }
}

/// Session lifecycle. Pellet exhaustion returns to `Idle` (a soft stop),
/// only adversary contact is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    GameOver,
}

/// Events emitted by a tick, drained by the engine and forwarded to the
/// audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PelletEaten,
    AdversaryContact,
    GameOver,
}

/// Complete state of one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    pub status: GameStatus,
    pub score: u32,
    /// Running pellet counter; always matches `grid.count_pellets()`
    pub pellets_remaining: u32,
    pub grid: Grid,
    pub player: Player,
    pub adversary: Adversary,
    /// Accumulated simulation time in seconds
    pub clock: f32,
    /// Sim time of the last pellet-eaten notification (for throttling)
    pub last_pellet_event: f32,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    seed: u64,
}

impl GameState {
    /// Create a fresh game with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let grid = Grid::default_maze();
        let pellets_remaining = grid.count_pellets();
        Self {
            status: GameStatus::Idle,
            score: 0,
            pellets_remaining,
            grid,
            player: Player::spawn(&tuning),
            adversary: Adversary::spawn(&tuning),
            clock: 0.0,
            last_pellet_event: f32::NEG_INFINITY,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            seed,
        }
    }

    /// Seed this game was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rebuild the world for a restart: fresh grid, actors back at spawn,
    /// score and clock cleared. The next seed is drawn from the old stream
    /// so a whole session stays reproducible from the initial seed.
    pub fn reset(&mut self) {
        let next_seed = self.rng.random();
        *self = GameState::new(next_seed, self.tuning.clone());
    }

    /// Take all events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
