//! Ensemble simulation
//!
//! Runs independent engine instances of one spec, one per thread, each with
//! its own seed (`base_seed + member`). No state is shared between members.

use crate::engine::Engine;
use crate::metrics::RunMetrics;
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Instant;
use tracing::info;
use types::config::SimulationSpec;
use types::errors::ConfigError;

/// One ensemble member's outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleMember {
    pub seed: u64,
    pub metrics: RunMetrics,
}

/// Cross-member aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleReport {
    pub members: Vec<EnsembleMember>,
    pub mean_final_mid: f64,
    /// Population standard deviation of final mids
    pub final_mid_std: f64,
    pub mean_imbalance: f64,
    pub total_repulsion_steps: usize,
}

impl EnsembleReport {
    fn from_members(members: Vec<EnsembleMember>) -> Self {
        let n = members.len().max(1) as f64;
        let mean_final_mid = members.iter().map(|m| m.metrics.final_mid).sum::<f64>() / n;
        let variance = members
            .iter()
            .map(|m| (m.metrics.final_mid - mean_final_mid).powi(2))
            .sum::<f64>()
            / n;
        let mean_imbalance = members.iter().map(|m| m.metrics.mean_imbalance).sum::<f64>() / n;
        let total_repulsion_steps = members.iter().map(|m| m.metrics.repulsion_steps).sum();

        Self {
            members,
            mean_final_mid,
            final_mid_std: variance.sqrt(),
            mean_imbalance,
            total_repulsion_steps,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// A batch of seeded runs over the same spec.
pub struct Ensemble {
    pub spec: SimulationSpec,
    pub base_seed: u64,
    pub size: usize,
}

impl Ensemble {
    pub fn new(spec: SimulationSpec, base_seed: u64, size: usize) -> Self {
        Self {
            spec,
            base_seed,
            size,
        }
    }

    /// Seed for member `i`.
    pub fn member_seed(&self, i: usize) -> u64 {
        self.base_seed.wrapping_add(i as u64)
    }

    /// Validate once, then run every member on its own thread.
    pub fn run(&self) -> Result<EnsembleReport, ConfigError> {
        self.spec.validate()?;
        info!(size = self.size, base_seed = self.base_seed, "Starting ensemble");

        let members = thread::scope(|scope| {
            let handles: Vec<_> = (0..self.size)
                .map(|i| {
                    let seed = self.member_seed(i);
                    let spec = self.spec.clone();
                    scope.spawn(move || run_member(spec, seed))
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect::<Result<Vec<_>, _>>()
        })?;

        let report = EnsembleReport::from_members(members);
        info!(
            members = report.member_count(),
            mean_final_mid = report.mean_final_mid,
            final_mid_std = report.final_mid_std,
            "Ensemble complete"
        );
        Ok(report)
    }
}

fn run_member(spec: SimulationSpec, seed: u64) -> Result<EnsembleMember, ConfigError> {
    let initial_mid = spec.force.initial_mid;
    let mut engine = Engine::seeded(spec, seed)?;
    let start = Instant::now();
    let result = engine.run();
    let mut metrics = RunMetrics::from_result(&result, initial_mid);
    metrics.set_elapsed(start.elapsed().as_nanos() as u64);
    Ok(EnsembleMember { seed, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::config::{SimulationConfig, WallConfiguration};

    fn spec() -> SimulationSpec {
        SimulationSpec::new(SimulationConfig::new(60, 100, 0.1), WallConfiguration::default())
    }

    #[test]
    fn test_ensemble_size_and_seeds() {
        let report = Ensemble::new(spec(), 10, 4).run().unwrap();
        assert_eq!(report.member_count(), 4);
        let seeds: Vec<u64> = report.members.iter().map(|m| m.seed).collect();
        assert_eq!(seeds, vec![10, 11, 12, 13]);
        assert!(report.members.iter().all(|m| m.metrics.steps == 60));
    }

    #[test]
    fn test_members_match_single_runs() {
        let report = Ensemble::new(spec(), 100, 3).run().unwrap();
        for member in &report.members {
            let single = Engine::seeded(spec(), member.seed).unwrap().run();
            assert_eq!(Some(member.metrics.final_mid), single.price_series.last());
        }
    }

    #[test]
    fn test_members_are_independent() {
        let report = Ensemble::new(spec(), 1, 2).run().unwrap();
        assert_ne!(
            report.members[0].metrics.final_mid,
            report.members[1].metrics.final_mid
        );
        assert!(report.final_mid_std > 0.0);
    }

    #[test]
    fn test_invalid_spec_fails_before_spawning() {
        let mut bad = spec();
        bad.config.tick_size = 0.0;
        let err = Ensemble::new(bad, 0, 8).run().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickSize { .. }));
    }

    #[test]
    fn test_empty_ensemble() {
        let report = Ensemble::new(spec(), 0, 0).run().unwrap();
        assert_eq!(report.member_count(), 0);
        assert_eq!(report.mean_final_mid, 0.0);
    }
}
