//! Game core: physics, obstacles, collision, state machine, and loop driver.
//!
//! Nothing in here touches the terminal; `input` and `ui` adapt it.

pub mod avatar;
pub mod collision;
pub mod config;
pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod geometry;
pub mod obstacles;
pub mod tick;
pub mod view;

pub use config::GameConfig;
pub use game_loop::{FrameOutcome, FramePacer, GameDriver, InputSource, LoopStats, Presenter};
pub use game_state::{EventOutcome, GameEvent, GamePhase, GameWorld};
pub use view::{Hud, SceneView};
