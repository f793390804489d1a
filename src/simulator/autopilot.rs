//! Scripted pilot used by the simulator.

use crate::core::game_state::GameWorld;

/// Flaps whenever the avatar's centre has dropped more than `margin`
/// below the centre of the next gap and the avatar is not already rising.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub margin: f64,
}

impl Autopilot {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// Gap centre the pilot is steering for: the first obstacle whose
    /// trailing edge is still ahead of the avatar, else mid-screen.
    pub fn target_y(&self, world: &GameWorld) -> f64 {
        let avatar_x = world.avatar.x;
        world
            .obstacles
            .as_slice()
            .iter()
            .find(|o| o.trailing_edge() > avatar_x)
            .map(|o| o.gap_center())
            .unwrap_or(world.config.screen_height / 2.0)
    }

    pub fn wants_flap(&self, world: &GameWorld) -> bool {
        if !world.can_flap() || world.avatar.velocity < 0.0 {
            return false;
        }
        let centre = world.avatar.y + world.avatar.height / 2.0;
        centre > self.target_y(world) + self.margin
    }
}
