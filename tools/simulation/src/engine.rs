//! Simulation engine
//!
//! Drives force -> integrate -> synthesize book -> aggregate stats once per
//! step, strictly in order. The engine owns its RNG, so two engines built
//! from the same spec and seed produce identical output.

use crate::book::BookSynthesizer;
use crate::force::ForceModel;
use crate::integrator::{Integrator, SimulationState};
use crate::stats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use types::config::{SimulationConfig, SimulationSpec, WallConfiguration};
use types::errors::ConfigError;
use types::result::{SimulationResult, StepTrace};

/// Deterministic (given its RNG) Langevin order-flow engine.
pub struct Engine<R: Rng> {
    spec: SimulationSpec,
    force: ForceModel,
    integrator: Integrator,
    book: BookSynthesizer,
    rng: R,
}

impl<R: Rng> Engine<R> {
    /// Validate `spec` and build an engine around an injected RNG.
    ///
    /// `spec.seed` is ignored here; the RNG is already chosen.
    pub fn new(spec: SimulationSpec, rng: R) -> Result<Self, ConfigError> {
        spec.validate()?;
        let force = ForceModel::new(spec.force.clone(), spec.config.tick_size, spec.walls.clone())?;
        let integrator = Integrator::new(spec.force.friction);
        let book = BookSynthesizer::new(&spec.book, spec.config.n_levels, spec.walls.clone())?;
        Ok(Self {
            spec,
            force,
            integrator,
            book,
            rng,
        })
    }

    pub fn spec(&self) -> &SimulationSpec {
        &self.spec
    }

    pub fn force_model(&self) -> &ForceModel {
        &self.force
    }

    /// Run all `n_steps` steps from a fresh state.
    ///
    /// State never carries over between runs; the RNG stream does.
    pub fn run(&mut self) -> SimulationResult {
        let config = &self.spec.config;
        info!(
            n_steps = config.n_steps,
            n_levels = config.n_levels,
            tick_size = config.tick_size,
            walls = ?self.spec.walls.indices(),
            "Starting simulation run"
        );

        let mut result = SimulationResult::with_capacity(config.n_steps);
        let mut state = SimulationState::new(self.spec.force.initial_mid);

        for t in 0..config.n_steps {
            state = self.step(t, state, &mut result);
        }

        info!(
            steps = result.len(),
            final_mid = state.current_mid,
            "Simulation run complete"
        );
        result
    }

    fn step(
        &mut self,
        t: usize,
        state: SimulationState,
        result: &mut SimulationResult,
    ) -> SimulationState {
        let force = self.force.sample(&mut self.rng, state.current_mid);
        let next = self.integrator.step(state, force.total);
        result.price_series.push(next.current_mid);
        result.traces.push(StepTrace {
            stochastic: force.stochastic,
            repulsion: force.repulsion,
            force: force.total,
            velocity: next.velocity,
            walls_engaged: force.walls_engaged,
        });

        let snapshot = self.book.synthesize(&mut self.rng);
        let step_stats = stats::aggregate(&snapshot);
        result.book_snapshots.push(snapshot);
        result.step_stats.push(step_stats);

        debug!(
            step = t,
            force = force.total,
            repulsion = force.repulsion,
            velocity = next.velocity,
            mid = next.current_mid,
            imbalance = step_stats.imbalance,
            "step"
        );
        next
    }
}

impl Engine<ChaCha8Rng> {
    /// Engine with a deterministic ChaCha8 stream.
    pub fn seeded(spec: SimulationSpec, seed: u64) -> Result<Self, ConfigError> {
        Self::new(spec, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Use `spec.seed` if set, otherwise draw a seed from entropy.
    ///
    /// Returns the seed actually used so the run can be replayed.
    pub fn from_spec(spec: SimulationSpec) -> Result<(Self, u64), ConfigError> {
        let seed = resolve_seed(&spec);
        Ok((Self::seeded(spec, seed)?, seed))
    }
}

/// `spec.seed`, or a fresh one from the thread RNG.
pub fn resolve_seed(spec: &SimulationSpec) -> u64 {
    spec.seed.unwrap_or_else(|| rand::thread_rng().gen())
}

/// Run with default force/book parameters and a non-deterministic seed.
pub fn run(
    config: SimulationConfig,
    walls: WallConfiguration,
) -> Result<SimulationResult, ConfigError> {
    let (mut engine, seed) = Engine::from_spec(SimulationSpec::new(config, walls))?;
    debug!(seed, "Drew entropy seed");
    Ok(engine.run())
}

/// Reproducible twin of [`run`].
pub fn run_seeded(
    config: SimulationConfig,
    walls: WallConfiguration,
    seed: u64,
) -> Result<SimulationResult, ConfigError> {
    let mut engine = Engine::seeded(SimulationSpec::new(config, walls), seed)?;
    Ok(engine.run())
}
