//! Per-step force model
//!
//! Total force is a zero-mean normal draw plus inverse-linear repulsion from
//! every wall within the interaction radius. Repulsion is `k / dist` (not
//! `k / dist²`) with `|dist|` floored at `min_distance`, so it saturates
//! instead of diverging when price sits on a wall.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use types::config::{ForceParams, WallConfiguration};
use types::errors::ConfigError;

/// Force for one step, split into its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSample {
    pub stochastic: f64,
    pub repulsion: f64,
    pub total: f64,
    pub walls_engaged: usize,
}

/// Floor `|dist|` at `min_abs`, keeping the sign. Zero counts as positive.
pub fn clamp_distance(dist: f64, min_abs: f64) -> f64 {
    if dist.abs() >= min_abs {
        dist
    } else if dist < 0.0 {
        -min_abs
    } else {
        min_abs
    }
}

/// Stochastic + wall repulsion force generator.
#[derive(Debug, Clone)]
pub struct ForceModel {
    params: ForceParams,
    tick_size: f64,
    walls: WallConfiguration,
    noise: Normal<f64>,
}

impl ForceModel {
    pub fn new(
        params: ForceParams,
        tick_size: f64,
        walls: WallConfiguration,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let noise = Normal::new(0.0, params.volatility).map_err(|e| {
            ConfigError::InvalidParameter {
                name: "volatility",
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            params,
            tick_size,
            walls,
            noise,
        })
    }

    pub fn params(&self) -> &ForceParams {
        &self.params
    }

    /// Price expressed in grid units above the baseline.
    pub fn price_index(&self, mid: f64) -> f64 {
        (mid - self.params.baseline) / self.tick_size
    }

    /// Repulsion from a single wall, or `None` outside the interaction radius.
    pub fn wall_contribution(&self, price_idx: f64, wall_index: usize) -> Option<f64> {
        let dist = price_idx - wall_index as f64;
        if dist.abs() < self.params.interaction_radius {
            Some(self.params.repulsion_strength / clamp_distance(dist, self.params.min_distance))
        } else {
            None
        }
    }

    /// Summed repulsion at `mid` and the number of walls contributing.
    pub fn wall_repulsion(&self, mid: f64) -> (f64, usize) {
        let price_idx = self.price_index(mid);
        self.walls
            .iter()
            .filter_map(|w| self.wall_contribution(price_idx, w))
            .fold((0.0, 0), |(sum, n), r| (sum + r, n + 1))
    }

    /// One independent draw of the stochastic term.
    pub fn sample_stochastic<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.noise.sample(rng)
    }

    /// Combine a given stochastic term with the repulsion at `mid`.
    pub fn total_force(&self, stochastic: f64, mid: f64) -> ForceSample {
        let (repulsion, walls_engaged) = self.wall_repulsion(mid);
        ForceSample {
            stochastic,
            repulsion,
            total: stochastic + repulsion,
            walls_engaged,
        }
    }

    /// Draw the stochastic term and compute the full force at `mid`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, mid: f64) -> ForceSample {
        let stochastic = self.sample_stochastic(rng);
        self.total_force(stochastic, mid)
    }
}
