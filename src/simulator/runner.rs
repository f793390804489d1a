//! Plays autopilot games against the real game world.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::game_state::{EventOutcome, GameEvent, GamePhase, GameWorld};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every configured game and aggregate a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            info!(
                "run {}/{}: score {}, {} ticks, {} flaps{}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.flaps,
                if stats.timed_out { " (tick cap)" } else { "" }
            );
        }
        runs.push(stats);
    }

    SimReport::from_runs(runs, config.max_ticks_per_run, config.game)
}

/// One game from the ready screen until a crash or the tick cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut world = GameWorld::new(config.game);
    world.handle_event(GameEvent::Flap, rng);

    let pilot = Autopilot::new(config.flap_margin);
    let mut flaps = 0u64;

    while world.phase == GamePhase::Playing && world.ticks < config.max_ticks_per_run {
        if pilot.wants_flap(&world)
            && world.handle_event(GameEvent::Flap, rng) == EventOutcome::Flapped
        {
            flaps += 1;
        }
        world.tick(rng);
    }

    RunStats {
        score: world.score,
        ticks: world.ticks,
        flaps,
        timed_out: world.phase == GamePhase::Playing,
    }
}
