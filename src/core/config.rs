//! World geometry and physics bundle.
//!
//! Physics is not user-tunable; `GameConfig::default()` is what the game
//! runs with. The struct exists so every subsystem reads the same numbers
//! and tests can name them explicitly.

use super::constants::*;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub avatar_x: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,
    pub gravity: f64,
    pub flap_strength: f64,
    pub flap_cooldown_ticks: u32,

    pub obstacle_width: f64,
    pub gap_height: f64,
    pub obstacle_velocity: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub spawn_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            flap_cooldown_ticks: FLAP_COOLDOWN_TICKS,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: OBSTACLE_GAP,
            obstacle_velocity: OBSTACLE_VELOCITY,
            margin_top: GAP_MARGIN_TOP,
            margin_bottom: GAP_MARGIN_BOTTOM,
            spawn_threshold: SPAWN_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// True when the gap plus both margins fit on screen. Violating this is
    /// a precondition failure; the obstacle field clamps rather than panics.
    pub fn gap_fits(&self) -> bool {
        self.gap_height + self.margin_top + self.margin_bottom <= self.screen_height
    }
}
