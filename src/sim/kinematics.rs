//! Continuous-position movement and wall collision against the grid
//!
//! One code path serves both actors; gameplay fairness assumes the wall
//! rules are numerically identical for player and adversary.

use crate::consts::*;
use crate::nearest_cell_center;

use super::grid::Grid;
use super::state::{Actor, Direction};

/// True when `v` is within the turn tolerance of its cell-center coordinate
#[inline]
pub fn near_center(v: f32) -> bool {
    (v - nearest_cell_center(v)).abs() < CENTER_TOLERANCE
}

/// True when the actor is centered on both axes (a decision point)
#[inline]
pub fn at_cell_center(actor: &Actor) -> bool {
    near_center(actor.pos.x) && near_center(actor.pos.y)
}

/// Advance the actor `speed * dt` along its current direction.
///
/// If the candidate position is not occupiable the actor stops: it is
/// clamped into the valid coordinate range (numerical drift at a boundary
/// wall must not push it outside), snapped onto the center of its cell
/// along the axis of motion, and its direction becomes `None`.
pub fn advance(actor: &mut Actor, grid: &Grid, dt: f32) {
    let dir = actor.dir;
    if dir == Direction::None {
        return;
    }

    let next = actor.pos + dir.unit() * actor.speed * dt;
    if grid.can_occupy(next.x, next.y) {
        actor.pos = next;
        return;
    }

    // Hit a wall: stop and snap on the axis of motion
    if dir.is_horizontal() {
        let clamped = actor.pos.x.clamp(0.5, grid.cols() as f32 - 0.5);
        actor.pos.x = nearest_cell_center(clamped);
    } else {
        let clamped = actor.pos.y.clamp(0.5, grid.rows() as f32 - 0.5);
        actor.pos.y = nearest_cell_center(clamped);
    }
    actor.dir = Direction::None;
}

/// Apply a buffered turn if the actor is at a safe turning point.
///
/// A turn is attempted only when the actor is near the cell center on the
/// axis perpendicular to `want` (no corner-cutting), and only commits when
/// a probe ahead of the actor lands on occupiable ground. On success the
/// perpendicular coordinate is snapped to the exact center, eliminating
/// residual drift. On failure nothing changes; the caller keeps the intent
/// buffered for later attempts.
pub fn try_turn(actor: &mut Actor, want: Direction, grid: &Grid) -> bool {
    if want == Direction::None {
        return false;
    }

    // Turning vertically requires horizontal centering, and vice versa
    if want.is_vertical() && !near_center(actor.pos.x) {
        return false;
    }
    if want.is_horizontal() && !near_center(actor.pos.y) {
        return false;
    }

    let probe = actor.pos + want.unit() * TURN_PROBE;
    if !grid.can_occupy(probe.x, probe.y) {
        return false;
    }

    if want.is_vertical() {
        actor.pos.x = nearest_cell_center(actor.pos.x);
    } else {
        actor.pos.y = nearest_cell_center(actor.pos.y);
    }
    actor.dir = want;
    true
}
