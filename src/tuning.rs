//! Data-driven game balance
//!
//! All gameplay numbers the simulation consumes, collected in one serde
//! struct so a host can override them from JSON without recompiling.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed in tiles per second
    pub player_speed: f32,
    /// Adversary speed in tiles per second
    pub adversary_speed: f32,
    /// Player collision radius in tile units
    pub player_radius: f32,
    /// Adversary collision radius in tile units
    pub adversary_radius: f32,
    /// Points per pellet
    pub pellet_score: u32,
    /// Probability the adversary ignores the greedy pick
    pub chase_randomness: f32,
    /// Per-frame delta cap in seconds
    pub max_frame_dt: f32,
    /// Minimum sim-seconds between pellet-eaten notifications
    pub pellet_event_throttle: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            adversary_speed: ADVERSARY_SPEED,
            player_radius: PLAYER_RADIUS,
            adversary_radius: ADVERSARY_RADIUS,
            pellet_score: PELLET_SCORE,
            chase_randomness: CHASE_RANDOMNESS,
            max_frame_dt: MAX_FRAME_DT,
            pellet_event_throttle: PELLET_EVENT_THROTTLE,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
