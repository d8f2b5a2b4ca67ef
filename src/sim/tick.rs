//! One fixed-order simulation step
//!
//! Order matters: player turn and movement, pellet consumption, adversary
//! decision and movement, contact check (short-circuits the rest), cosmetic
//! animation, win check.

use super::chase;
use super::kinematics;
use super::state::{Direction, GameEvent, GameState, GameStatus};
use crate::consts::MOUTH_RATE;

/// Advance the simulation by `dt` seconds. The engine caps `dt` before
/// calling in; a non-running session is a no-op.
pub fn tick(state: &mut GameState, dt: f32) {
    if state.status != GameStatus::Running {
        return;
    }
    state.clock += dt;

    // Player: buffered turn first, then movement
    let want = state.player.want_dir;
    if want != Direction::None {
        kinematics::try_turn(&mut state.player.body, want, &state.grid);
    }
    kinematics::advance(&mut state.player.body, &state.grid, dt);

    // Pellet at the player's cell
    let (cx, cy) = state.player.body.cell();
    if state.grid.consume_pellet_at(cx, cy) {
        state.pellets_remaining -= 1;
        state.score += state.tuning.pellet_score;
        // Throttle notifications so high tick rates don't flood the audio sink
        if state.clock - state.last_pellet_event >= state.tuning.pellet_event_throttle {
            state.events.push(GameEvent::PelletEaten);
            state.last_pellet_event = state.clock;
        }
    }

    // Adversary decides only at intersections, then moves
    if kinematics::at_cell_center(&state.adversary.body) {
        state.adversary.body.dir = chase::choose_direction(
            &state.adversary.body,
            state.player.body.pos,
            &state.grid,
            state.tuning.chase_randomness,
            &mut state.rng,
        );
    }
    kinematics::advance(&mut state.adversary.body, &state.grid, dt);

    // Contact check: strict inequality, equality is not a collision
    let dist = state.player.body.pos.distance(state.adversary.body.pos);
    if dist < state.player.body.radius + state.adversary.body.radius {
        state.status = GameStatus::GameOver;
        state.events.push(GameEvent::AdversaryContact);
        state.events.push(GameEvent::GameOver);
        log::info!("game over at score {}", state.score);
        return;
    }

    // Cosmetic mouth phase
    state.player.mouth = (state.player.mouth + dt * MOUTH_RATE) % std::f32::consts::TAU;

    // All pellets consumed: soft stop back to idle
    if state.pellets_remaining == 0 {
        state.status = GameStatus::Idle;
        log::info!("maze cleared with score {}", state.score);
    }
}
