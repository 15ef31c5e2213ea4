//! Synthetic order book generation
//!
//! Each level on each side draws an independent Gamma volume. Every wall
//! level then gets an extra uniform "institutional" block on both sides,
//! so walls persist in expectation while their exact size shimmers.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Distribution, Gamma};
use types::book::OrderBookSnapshot;
use types::config::{BookParams, WallConfiguration};
use types::errors::ConfigError;

/// Draws one full book cross-section per step.
#[derive(Debug, Clone)]
pub struct BookSynthesizer {
    n_levels: usize,
    walls: WallConfiguration,
    level_volume: Gamma<f64>,
    wall_volume: Uniform<f64>,
}

impl BookSynthesizer {
    pub fn new(
        params: &BookParams,
        n_levels: usize,
        walls: WallConfiguration,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        walls.validate(n_levels)?;
        let level_volume = Gamma::new(params.gamma_shape, params.gamma_scale).map_err(|e| {
            ConfigError::InvalidParameter {
                name: "gamma_shape",
                reason: e.to_string(),
            }
        })?;
        let wall_volume = Uniform::new_inclusive(params.wall_volume_min, params.wall_volume_max);
        Ok(Self {
            n_levels,
            walls,
            level_volume,
            wall_volume,
        })
    }

    pub fn n_levels(&self) -> usize {
        self.n_levels
    }

    fn draw_side<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.n_levels)
            .map(|_| self.level_volume.sample(rng))
            .collect()
    }

    /// Bids first, then asks, then one bid/ask wall block per wall.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderBookSnapshot {
        let mut bids = self.draw_side(rng);
        let mut asks = self.draw_side(rng);

        for idx in self.walls.iter() {
            bids[idx] += self.wall_volume.sample(rng);
            asks[idx] += self.wall_volume.sample(rng);
        }

        OrderBookSnapshot::new(bids, asks)
    }
}
