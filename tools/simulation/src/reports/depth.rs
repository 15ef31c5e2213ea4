//! Depth ladder export
//!
//! Exports one step's book as a price ladder for external visualization.
//! Level prices are `baseline + level * tick_size`, computed in Decimal so
//! the ladder does not accumulate float drift.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::config::SimulationSpec;
use types::result::SimulationResult;

/// A single depth level for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthLevel {
    pub level: usize,
    pub price: Decimal,
    pub bid_volume: f64,
    pub ask_volume: f64,
    pub cumulative_bid: f64,
    pub cumulative_ask: f64,
    pub is_wall: bool,
}

/// Complete depth snapshot for one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub step: usize,
    pub mid: f64,
    pub levels: Vec<DepthLevel>,
    pub total_bid_volume: f64,
    pub total_ask_volume: f64,
    pub imbalance: f64,
}

impl DepthSnapshot {
    /// Level carrying the most combined volume.
    pub fn heaviest_level(&self) -> Option<&DepthLevel> {
        self.levels
            .iter()
            .max_by(|a, b| (a.bid_volume + a.ask_volume).total_cmp(&(b.bid_volume + b.ask_volume)))
    }
}

/// Price at each grid level.
pub fn price_ladder(baseline: f64, tick_size: f64, n_levels: usize) -> Option<Vec<Decimal>> {
    let baseline = Decimal::from_f64(baseline)?;
    let tick = Decimal::from_f64(tick_size)?;
    Some(
        (0..n_levels)
            .map(|level| baseline + tick * Decimal::from(level))
            .collect(),
    )
}

/// Build the depth snapshot for `step`, or `None` past the end of the run.
pub fn snapshot(spec: &SimulationSpec, result: &SimulationResult, step: usize) -> Option<DepthSnapshot> {
    let book = result.book_snapshots.get(step)?;
    let stats = result.step_stats.get(step)?;
    let mid = result.price_series.get(step)?;
    let prices = price_ladder(spec.force.baseline, spec.config.tick_size, book.n_levels())?;

    let mut cumulative_bid = 0.0;
    let mut cumulative_ask = 0.0;
    let levels = prices
        .into_iter()
        .zip(book.bid_volumes().iter().zip(book.ask_volumes()))
        .enumerate()
        .map(|(level, (price, (&bid, &ask)))| {
            cumulative_bid += bid;
            cumulative_ask += ask;
            DepthLevel {
                level,
                price,
                bid_volume: bid,
                ask_volume: ask,
                cumulative_bid,
                cumulative_ask,
                is_wall: spec.walls.contains(level),
            }
        })
        .collect();

    Some(DepthSnapshot {
        step,
        mid,
        levels,
        total_bid_volume: stats.bid_sum,
        total_ask_volume: stats.ask_sum,
        imbalance: stats.imbalance,
    })
}

/// Export depth snapshot as JSON string.
pub fn export_json(spec: &SimulationSpec, result: &SimulationResult, step: usize) -> Option<String> {
    let snap = snapshot(spec, result, step)?;
    serde_json::to_string_pretty(&snap).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use types::config::{SimulationConfig, WallConfiguration};

    fn run() -> (SimulationSpec, SimulationResult) {
        let spec = SimulationSpec::new(SimulationConfig::new(10, 100, 0.1), WallConfiguration::default());
        let result = Engine::seeded(spec.clone(), 42).unwrap().run();
        (spec, result)
    }

    #[test]
    fn test_price_ladder_is_exact() {
        let ladder = price_ladder(95.0, 0.1, 100).unwrap();
        assert_eq!(ladder[0], Decimal::from(95));
        assert_eq!(ladder[50], Decimal::from(100));
        assert_eq!(ladder[99], Decimal::from_str_exact("104.9").unwrap());
    }

    #[test]
    fn test_depth_snapshot() {
        let (spec, result) = run();
        let snap = snapshot(&spec, &result, 3).unwrap();
        assert_eq!(snap.step, 3);
        assert_eq!(snap.levels.len(), 100);
        assert_eq!(snap.mid, result.price_series.get(3).unwrap());
        assert!(snap.levels[25].is_wall);
        assert!(!snap.levels[26].is_wall);
    }

    #[test]
    fn test_cumulative_volume() {
        let (spec, result) = run();
        let snap = snapshot(&spec, &result, 0).unwrap();
        let last = snap.levels.last().unwrap();
        assert!((last.cumulative_bid - snap.total_bid_volume).abs() < 1e-9);
        assert!((last.cumulative_ask - snap.total_ask_volume).abs() < 1e-9);
    }

    #[test]
    fn test_heaviest_level_is_a_wall() {
        let (spec, result) = run();
        let snap = snapshot(&spec, &result, 5).unwrap();
        assert!(snap.heaviest_level().unwrap().is_wall);
    }

    #[test]
    fn test_step_out_of_range() {
        let (spec, result) = run();
        assert!(snapshot(&spec, &result, 10).is_none());
        assert!(export_json(&spec, &result, 10).is_none());
    }

    #[test]
    fn test_export_json() {
        let (spec, result) = run();
        let json = export_json(&spec, &result, 0).unwrap();
        assert!(json.contains("levels"));
        assert!(json.contains("imbalance"));
        assert!(json.contains("is_wall"));
    }
}
