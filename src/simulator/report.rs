//! Simulation report generation.

use crate::core::config::GameConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Outcome of a single autopilot game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    pub flaps: u64,
    /// Still alive when the tick cap was reached.
    pub timed_out: bool,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub max_ticks_per_run: u64,

    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub total_flaps: u64,

    /// score -> number of runs ending with it
    pub score_distribution: BTreeMap<u32, u32>,

    pub runs: Vec<RunStats>,

    /// World the runs were played in.
    pub game: GameConfig,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_ticks_per_run: u64, game: GameConfig) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out: runs.iter().filter(|r| r.timed_out).count() as u32,
            max_ticks_per_run,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            total_flaps: runs.iter().map(|r| r.flaps).sum(),
            score_distribution,
            runs,
            game,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Results ({} runs)", self.num_runs);
        let _ = writeln!(out, "  Avg score:      {:.2}", self.avg_score);
        let _ = writeln!(out, "  Min / max:      {} / {}", self.min_score, self.max_score);
        let _ = writeln!(
            out,
            "  Avg survival:   {:.0} ticks ({:.1}s at 60 Hz)",
            self.avg_ticks,
            self.avg_ticks / 60.0
        );
        let _ = writeln!(out, "  Total flaps:    {}", self.total_flaps);
        let _ = writeln!(
            out,
            "  Hit tick cap:   {} (cap {} ticks)",
            self.runs_timed_out, self.max_ticks_per_run
        );

        if !self.score_distribution.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Score distribution:");
            let peak = self.score_distribution.values().copied().max().unwrap_or(1);
            for (score, count) in &self.score_distribution {
                let bar = "█".repeat(((*count as f64 / peak as f64) * 40.0).ceil() as usize);
                let _ = writeln!(out, "  {:>5} | {:<40} {}", score, bar, count);
            }
        }
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, timed_out: bool) -> RunStats {
        RunStats {
            score,
            ticks,
            flaps: ticks / 30,
            timed_out,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(
            vec![run(2, 600, false), run(4, 1200, false), run(4, 6000, true)],
            6000,
            GameConfig::default(),
        );
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.min_score, 2);
        assert_eq!(report.max_score, 4);
        assert!((report.avg_score - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.avg_ticks, 2600.0);
        assert_eq!(report.score_distribution.get(&4), Some(&2));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 100, GameConfig::default());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert_eq!(report.max_score, 0);
        assert!(report.to_text().contains("0 runs"));
    }

    #[test]
    fn test_json_round_trips_through_value() {
        let report =
            SimReport::from_runs(vec![run(3, 900, false)], 6000, GameConfig::default());
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["num_runs"], 1);
        assert_eq!(value["max_score"], 3);
        assert_eq!(value["runs"][0]["ticks"], 900);
        assert_eq!(value["score_distribution"]["3"], 1);
        assert_eq!(value["game"]["gravity"], 0.5);
        assert_eq!(value["game"]["gap_height"], 200.0);
    }
}
