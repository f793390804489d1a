//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Ticks per game before it is cut off
    pub max_ticks_per_run: u64,

    /// How far below the gap centre (world units) the pilot tolerates
    /// before flapping
    pub flap_margin: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// World every run is played in
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            // Ten minutes of play at 60 Hz
            max_ticks_per_run: 36_000,
            flap_margin: 20.0,
            verbosity: 1,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small deterministic config for quick checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            max_ticks_per_run: 6_000,
            ..Default::default()
        }
    }
}
