//! Headless autopilot simulator.
//!
//! Plays many games against the real `GameWorld` with a simple scripted
//! pilot to check that the fixed physics and obstacle spacing make a
//! playable course:
//! - How long a run survives
//! - How many obstacles a competent pilot clears
//! - Whether scores vary run to run as gaps are re-rolled

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
