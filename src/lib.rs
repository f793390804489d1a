//! Flappy - terminal arcade game library
//!
//! Exposes the game core, the terminal adapters, and the headless
//! simulator for testing and for the `flappy` and `simulate` binaries.

pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::core::constants::*;
pub use crate::core::{GameConfig, GameEvent, GamePhase, GameWorld};
