//! Run summary metrics
//!
//! Price range, imbalance profile, wall engagement and throughput.

use serde::{Deserialize, Serialize};
use types::result::SimulationResult;

/// Aggregated metrics for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub steps: usize,
    pub initial_mid: f64,
    pub final_mid: f64,
    pub min_mid: f64,
    pub max_mid: f64,
    pub mean_imbalance: f64,
    pub min_imbalance: f64,
    pub max_imbalance: f64,
    /// Steps where at least one wall was within the interaction radius
    pub repulsion_steps: usize,
    pub mean_book_volume: f64,
    pub elapsed_ns: u64,
}

impl RunMetrics {
    /// Summarize `result`; `initial_mid` is the pre-run mid.
    pub fn from_result(result: &SimulationResult, initial_mid: f64) -> Self {
        let steps = result.len();
        let prices = &result.price_series;
        let stats = &result.step_stats;

        let (mean_imbalance, mean_book_volume) = if stats.is_empty() {
            (0.0, 0.0)
        } else {
            let n = stats.len() as f64;
            (
                stats.iter().map(|s| s.imbalance).sum::<f64>() / n,
                stats.iter().map(|s| s.total_volume()).sum::<f64>() / n,
            )
        };

        Self {
            steps,
            initial_mid,
            final_mid: prices.last().unwrap_or(initial_mid),
            min_mid: prices.min().unwrap_or(initial_mid).min(initial_mid),
            max_mid: prices.max().unwrap_or(initial_mid).max(initial_mid),
            mean_imbalance,
            min_imbalance: stats.iter().map(|s| s.imbalance).reduce(f64::min).unwrap_or(0.0),
            max_imbalance: stats.iter().map(|s| s.imbalance).reduce(f64::max).unwrap_or(0.0),
            repulsion_steps: result.traces.iter().filter(|t| t.walls_engaged > 0).count(),
            mean_book_volume,
            elapsed_ns: 0,
        }
    }

    /// Set elapsed time.
    pub fn set_elapsed(&mut self, ns: u64) {
        self.elapsed_ns = ns;
    }

    pub fn price_change(&self) -> f64 {
        self.final_mid - self.initial_mid
    }

    /// Throughput: steps per second.
    pub fn steps_per_second(&self) -> f64 {
        if self.elapsed_ns == 0 {
            return 0.0;
        }
        self.steps as f64 / (self.elapsed_ns as f64 / 1_000_000_000.0)
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Steps: {} | Mid: {:.4} -> {:.4} ({:+.4}) | Range: [{:.4}, {:.4}] | Mean imbalance: {:.4} | Wall steps: {} | Throughput: {:.0} steps/s",
            self.steps,
            self.initial_mid,
            self.final_mid,
            self.price_change(),
            self.min_mid,
            self.max_mid,
            self.mean_imbalance,
            self.repulsion_steps,
            self.steps_per_second(),
        )
    }
}
