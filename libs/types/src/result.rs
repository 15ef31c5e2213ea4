//! Simulation output
//!
//! All sequences are index-aligned: entry `t` of each describes step `t`.

use crate::book::{OrderBookSnapshot, StepStats};
use crate::series::PriceSeries;
use serde::{Deserialize, Serialize};

/// Force decomposition and integrator state recorded for one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTrace {
    /// Normal draw for this step
    pub stochastic: f64,
    /// Sum of wall repulsion contributions
    pub repulsion: f64,
    /// `stochastic + repulsion`
    pub force: f64,
    /// Velocity after integrating `force`
    pub velocity: f64,
    /// Number of walls within the interaction radius
    pub walls_engaged: usize,
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    pub price_series: PriceSeries,
    pub book_snapshots: Vec<OrderBookSnapshot>,
    pub step_stats: Vec<StepStats>,
    pub traces: Vec<StepTrace>,
}

impl SimulationResult {
    pub fn with_capacity(n_steps: usize) -> Self {
        Self {
            price_series: PriceSeries::with_capacity(n_steps),
            book_snapshots: Vec::with_capacity(n_steps),
            step_stats: Vec::with_capacity(n_steps),
            traces: Vec::with_capacity(n_steps),
        }
    }

    /// Number of completed steps.
    pub fn len(&self) -> usize {
        self.price_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.price_series.is_empty()
    }

    /// True when every output sequence has the same length.
    pub fn is_aligned(&self) -> bool {
        let n = self.price_series.len();
        self.book_snapshots.len() == n && self.step_stats.len() == n && self.traces.len() == n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_aligned() {
        let result = SimulationResult::with_capacity(8);
        assert!(result.is_empty());
        assert!(result.is_aligned());
    }

    #[test]
    fn test_misaligned_result_detected() {
        let mut result = SimulationResult::default();
        result.price_series.push(100.0);
        assert_eq!(result.len(), 1);
        assert!(!result.is_aligned());
    }
}
