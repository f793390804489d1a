//! The game world and its ready → playing → game_over state machine.
//!
//! | Phase    | Event                         | Action                    | Next     |
//! |----------|-------------------------------|---------------------------|----------|
//! | Ready    | Flap                          | reset                     | Playing  |
//! | Playing  | Flap, cooldown == 0           | flap, cooldown = 10       | Playing  |
//! | Playing  | tick                          | physics, obstacles, hit   | Playing / GameOver |
//! | GameOver | Restart or click on button    | reset                     | Ready    |
//!
//! Every other (phase, event) pair is a no-op. Quit is reported to the
//! caller in any phase and never changes the world.

use super::avatar::Avatar;
use super::collision::check_collision;
use super::config::GameConfig;
use super::constants::{BUTTON_HEIGHT, BUTTON_OFFSET_Y, BUTTON_WIDTH};
use super::geometry::Rect;
use super::obstacles::ObstacleField;
use super::tick::{TickEvent, TickResult};
use log::info;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Ready,
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::GameOver => "game_over",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// UI-agnostic input events. Pointer coordinates are in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Quit,
    Flap,
    Restart,
    PointerDown { x: f64, y: f64 },
}

/// What `GameWorld::handle_event` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    /// Ready → Playing.
    Started,
    Flapped,
    /// GameOver → Ready.
    Restarted,
    Quit,
}

/// All mutable game state, owned by the loop and passed by reference.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub obstacles: ObstacleField,
    pub score: u32,
    /// Ticks until the next flap is accepted.
    pub flap_cooldown: u32,
    /// Playing ticks since the last reset.
    pub ticks: u64,
}

impl GameWorld {
    pub fn new(config: GameConfig) -> Self {
        Self {
            phase: GamePhase::Ready,
            avatar: Avatar::new(
                config.avatar_x,
                config.avatar_width,
                config.avatar_height,
                config.screen_height,
            ),
            obstacles: ObstacleField::new(&config),
            score: 0,
            flap_cooldown: 0,
            ticks: 0,
            config,
        }
    }

    /// Re-centres the avatar, clears obstacles, zeroes score and cooldown,
    /// and spawns the first obstacle so play never starts on an empty field.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.avatar.reset(self.config.screen_height);
        self.obstacles.clear();
        self.score = 0;
        self.flap_cooldown = 0;
        self.ticks = 0;
        self.obstacles.spawn(rng);
    }

    /// Hit region of the game-over "Try Again" button, in world units.
    pub fn restart_button(&self) -> Rect {
        Rect::new(
            self.config.screen_width / 2.0 - BUTTON_WIDTH / 2.0,
            self.config.screen_height / 2.0 + BUTTON_OFFSET_Y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn can_flap(&self) -> bool {
        self.phase == GamePhase::Playing && self.flap_cooldown == 0
    }

    /// Dispatches one input event through the transition table.
    pub fn handle_event<R: Rng>(&mut self, event: GameEvent, rng: &mut R) -> EventOutcome {
        match (self.phase, event) {
            (_, GameEvent::Quit) => EventOutcome::Quit,
            (GamePhase::Ready, GameEvent::Flap) => {
                self.reset(rng);
                self.set_phase(GamePhase::Playing);
                EventOutcome::Started
            }
            (GamePhase::Playing, GameEvent::Flap) => {
                if self.flap_cooldown > 0 {
                    return EventOutcome::Ignored;
                }
                self.avatar.flap(self.config.flap_strength);
                self.flap_cooldown = self.config.flap_cooldown_ticks;
                EventOutcome::Flapped
            }
            (GamePhase::GameOver, GameEvent::Restart) => self.restart(rng),
            (GamePhase::GameOver, GameEvent::PointerDown { x, y })
                if self.restart_button().contains_point(x, y) =>
            {
                self.restart(rng)
            }
            _ => EventOutcome::Ignored,
        }
    }

    /// One fixed simulation step. Does nothing outside `Playing`.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickResult {
        let mut result = TickResult::default();
        if self.phase != GamePhase::Playing {
            return result;
        }
        self.ticks += 1;

        self.avatar.integrate(self.config.gravity);

        let cleared = self.obstacles.advance(self.config.obstacle_velocity);
        if cleared > 0 {
            self.score += cleared;
            result.push(TickEvent::ObstaclesCleared {
                count: cleared,
                score: self.score,
            });
        }

        if let Some(gap_top) = self.obstacles.maybe_spawn_next(rng) {
            result.push(TickEvent::ObstacleSpawned { gap_top });
        }

        if check_collision(
            &self.avatar,
            self.obstacles.as_slice(),
            self.config.screen_height,
        ) {
            info!(
                "game over after {} ticks with score {}",
                self.ticks, self.score
            );
            result.push(TickEvent::Collided { score: self.score });
            let from = self.set_phase(GamePhase::GameOver);
            result.push(TickEvent::PhaseChanged {
                from,
                to: GamePhase::GameOver,
            });
        }

        self.flap_cooldown = self.flap_cooldown.saturating_sub(1);
        result
    }

    fn restart<R: Rng>(&mut self, rng: &mut R) -> EventOutcome {
        self.reset(rng);
        self.set_phase(GamePhase::Ready);
        EventOutcome::Restarted
    }

    /// Returns the previous phase.
    fn set_phase(&mut self, next: GamePhase) -> GamePhase {
        let prev = self.phase;
        if prev != next {
            info!("phase {} -> {}", prev, next);
        }
        self.phase = next;
        prev
    }
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
