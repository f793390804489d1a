//! Per-frame read-only snapshot handed to the presenter.
//!
//! The core decides *what* each phase shows; the presenter only decides
//! how it looks.

use super::game_state::{GamePhase, GameWorld};
use super::geometry::Rect;
use super::obstacles::Obstacle;

pub const READY_PROMPT: &str = "Press Space to Flap";
pub const RESTART_LABEL: &str = "Try Again";

/// Text drawn over the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hud {
    /// Instruction shown below the avatar before play starts.
    Prompt(&'static str),
    /// Running score at the top centre.
    LiveScore(u32),
    /// "Score: N" headline above the restart button.
    FinalScore(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneView<'a> {
    pub phase: GamePhase,
    pub world_width: f64,
    pub world_height: f64,
    pub avatar: Rect,
    pub avatar_velocity: f64,
    /// Empty while ready; obstacles are only shown once play has begun.
    pub obstacles: &'a [Obstacle],
    pub hud: Hud,
    /// Present only on the game-over screen.
    pub restart_button: Option<Rect>,
}

impl<'a> SceneView<'a> {
    pub fn of(world: &'a GameWorld) -> Self {
        let (obstacles, hud, restart_button): (&'a [Obstacle], Hud, Option<Rect>) =
            match world.phase {
                GamePhase::Ready => (&[], Hud::Prompt(READY_PROMPT), None),
                GamePhase::Playing => (
                    world.obstacles.as_slice(),
                    Hud::LiveScore(world.score),
                    None,
                ),
                GamePhase::GameOver => (
                    world.obstacles.as_slice(),
                    Hud::FinalScore(world.score),
                    Some(world.restart_button()),
                ),
            };

        Self {
            phase: world.phase,
            world_width: world.config.screen_width,
            world_height: world.config.screen_height,
            avatar: world.avatar.rect(),
            avatar_velocity: world.avatar.velocity,
            obstacles,
            hud,
            restart_button,
        }
    }
}
