//! Synthetic order book snapshots and per-step statistics

use serde::{Deserialize, Serialize};

/// One step's cross-section of resting volume, `n_levels` per side.
///
/// Produced fresh each step and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    bid_volumes: Vec<f64>,
    ask_volumes: Vec<f64>,
}

impl OrderBookSnapshot {
    /// Both sides must have the same length.
    pub fn new(bid_volumes: Vec<f64>, ask_volumes: Vec<f64>) -> Self {
        debug_assert_eq!(bid_volumes.len(), ask_volumes.len());
        Self {
            bid_volumes,
            ask_volumes,
        }
    }

    pub fn bid_volumes(&self) -> &[f64] {
        &self.bid_volumes
    }

    pub fn ask_volumes(&self) -> &[f64] {
        &self.ask_volumes
    }

    pub fn n_levels(&self) -> usize {
        self.bid_volumes.len()
    }

    pub fn bid_sum(&self) -> f64 {
        self.bid_volumes.iter().sum()
    }

    pub fn ask_sum(&self) -> f64 {
        self.ask_volumes.iter().sum()
    }

    /// Bid plus ask volume at a level.
    pub fn total_at(&self, level: usize) -> Option<f64> {
        Some(self.bid_volumes.get(level)? + self.ask_volumes.get(level)?)
    }
}

/// Per-step reduction of a book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    pub bid_sum: f64,
    pub ask_sum: f64,
    /// `(bid_sum - ask_sum) / (bid_sum + ask_sum)`, zero on an empty book
    pub imbalance: f64,
}

impl StepStats {
    pub fn total_volume(&self) -> f64 {
        self.bid_sum + self.ask_sum
    }

    /// Bid-heavy step.
    pub fn is_bid_pressure(&self) -> bool {
        self.imbalance > 0.0
    }
}
