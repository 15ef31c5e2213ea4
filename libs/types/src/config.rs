//! Simulation configuration
//!
//! Every magnitude constant of the force, integration and book models is a
//! named field with a documented default. All sections deserialize from JSON
//! with missing fields falling back to those defaults.

use crate::errors::{ConfigError, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run shape: number of steps, book depth per side, and grid scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated steps (length of every output sequence)
    pub n_steps: usize,
    /// Depth levels per side of the book
    pub n_levels: usize,
    /// Price distance represented by one grid unit
    pub tick_size: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_steps: 400,
            n_levels: 100,
            tick_size: 0.1,
        }
    }
}

impl SimulationConfig {
    pub fn new(n_steps: usize, n_levels: usize, tick_size: f64) -> Self {
        Self {
            n_steps,
            n_levels,
            tick_size,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_steps == 0 {
            return Err(ConfigError::NonPositiveSteps);
        }
        if self.n_levels == 0 {
            return Err(ConfigError::NonPositiveLevels);
        }
        if !(self.tick_size.is_finite() && self.tick_size > 0.0) {
            return Err(ConfigError::InvalidTickSize {
                value: self.tick_size,
            });
        }
        Ok(())
    }
}

/// Fixed support/resistance levels on the depth grid.
///
/// Indices are kept sorted and unique. They never move with price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct WallConfiguration {
    indices: Vec<usize>,
}

impl WallConfiguration {
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// No walls at all.
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Every wall must sit inside `[0, n_levels)`.
    pub fn validate(&self, n_levels: usize) -> Result<(), ConfigError> {
        match self.indices.iter().find(|&&idx| idx >= n_levels) {
            Some(&index) => Err(ConfigError::WallOutOfRange { index, n_levels }),
            None => Ok(()),
        }
    }
}

impl Default for WallConfiguration {
    fn default() -> Self {
        Self::new(vec![25, 75])
    }
}

impl From<Vec<usize>> for WallConfiguration {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl From<WallConfiguration> for Vec<usize> {
    fn from(walls: WallConfiguration) -> Self {
        walls.indices
    }
}

/// Langevin force and integration constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceParams {
    /// Mid-price at step 0
    pub initial_mid: f64,
    /// Price mapped to grid index 0 when locating price relative to walls
    pub baseline: f64,
    /// Standard deviation of the per-step stochastic force
    pub volatility: f64,
    /// Momentum decay applied to velocity each step, in (0, 1)
    pub friction: f64,
    /// Numerator `k` of the inverse-linear wall repulsion `k / dist`
    pub repulsion_strength: f64,
    /// Walls push only while `|dist|` is strictly below this many grid units
    pub interaction_radius: f64,
    /// Floor on `|dist|` so repulsion saturates at a wall
    pub min_distance: f64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            initial_mid: 100.0,
            baseline: 95.0,
            volatility: 0.12,
            friction: 0.8,
            repulsion_strength: 0.15,
            interaction_radius: 5.0,
            min_distance: 0.1,
        }
    }
}

impl ForceParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_mid.is_finite() {
            return Err(ConfigError::invalid("initial_mid", "must be finite"));
        }
        if !self.baseline.is_finite() {
            return Err(ConfigError::invalid("baseline", "must be finite"));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(ConfigError::invalid(
                "volatility",
                format!("must be finite and non-negative, got {}", self.volatility),
            ));
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::invalid(
                "friction",
                format!("must lie in (0, 1), got {}", self.friction),
            ));
        }
        // Negative strength would turn walls into attractors
        if !(self.repulsion_strength.is_finite() && self.repulsion_strength >= 0.0) {
            return Err(ConfigError::invalid(
                "repulsion_strength",
                format!("must be finite and non-negative, got {}", self.repulsion_strength),
            ));
        }
        if !(self.interaction_radius.is_finite() && self.interaction_radius > 0.0) {
            return Err(ConfigError::invalid(
                "interaction_radius",
                format!("must be positive, got {}", self.interaction_radius),
            ));
        }
        if !(self.min_distance.is_finite() && self.min_distance > 0.0) {
            return Err(ConfigError::invalid(
                "min_distance",
                format!("must be positive, got {}", self.min_distance),
            ));
        }
        Ok(())
    }
}

/// Synthetic book volume distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookParams {
    /// Gamma shape for per-level volume
    pub gamma_shape: f64,
    /// Gamma scale for per-level volume
    pub gamma_scale: f64,
    /// Lower bound of the extra uniform volume resting on each wall
    pub wall_volume_min: f64,
    /// Upper bound of the extra uniform volume resting on each wall
    pub wall_volume_max: f64,
}

impl Default for BookParams {
    fn default() -> Self {
        Self {
            gamma_shape: 2.0,
            gamma_scale: 5.0,
            wall_volume_min: 150.0,
            wall_volume_max: 300.0,
        }
    }
}

impl BookParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gamma_shape.is_finite() && self.gamma_shape > 0.0) {
            return Err(ConfigError::invalid(
                "gamma_shape",
                format!("must be positive, got {}", self.gamma_shape),
            ));
        }
        if !(self.gamma_scale.is_finite() && self.gamma_scale > 0.0) {
            return Err(ConfigError::invalid(
                "gamma_scale",
                format!("must be positive, got {}", self.gamma_scale),
            ));
        }
        if !(self.wall_volume_min.is_finite() && self.wall_volume_min >= 0.0) {
            return Err(ConfigError::invalid(
                "wall_volume_min",
                format!("must be non-negative, got {}", self.wall_volume_min),
            ));
        }
        if !(self.wall_volume_max.is_finite() && self.wall_volume_max >= self.wall_volume_min) {
            return Err(ConfigError::invalid(
                "wall_volume_max",
                format!(
                    "must be at least wall_volume_min ({}), got {}",
                    self.wall_volume_min, self.wall_volume_max
                ),
            ));
        }
        // The uniform sampler scales the span by 1 / (1 - eps); it must stay finite
        if !((self.wall_volume_max - self.wall_volume_min) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(ConfigError::invalid(
                "wall_volume_max",
                format!(
                    "span from wall_volume_min ({}) to {} is too large to sample",
                    self.wall_volume_min, self.wall_volume_max
                ),
            ));
        }
        Ok(())
    }
}

/// Everything a run needs, loadable from a single JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSpec {
    pub config: SimulationConfig,
    pub walls: WallConfiguration,
    pub force: ForceParams,
    pub book: BookParams,
    /// Fixed RNG seed; `None` draws one from entropy at run time
    pub seed: Option<u64>,
}

impl SimulationSpec {
    /// Default force/book parameters around a given run shape and walls.
    pub fn new(config: SimulationConfig, walls: WallConfiguration) -> Self {
        Self {
            config,
            walls,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the whole spec. Run shape first, then walls, then model params.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        self.walls.validate(self.config.n_levels)?;
        self.force.validate()?;
        self.book.validate()?;
        Ok(())
    }

    /// Parse and validate a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let spec: SimulationSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Read, parse and validate a spec file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
