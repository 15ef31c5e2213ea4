//! Langevin velocity/position integrator
//!
//! `v' = friction * v + force`, `mid' = mid + v'`. An AR(1) process in
//! velocity; price itself is not mean-reverting.

use serde::{Deserialize, Serialize};

/// Mutable run state, owned by the engine for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub current_mid: f64,
    pub velocity: f64,
}

impl SimulationState {
    /// At rest at `initial_mid`.
    pub fn new(initial_mid: f64) -> Self {
        Self {
            current_mid: initial_mid,
            velocity: 0.0,
        }
    }
}

/// Damped first-order integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    friction: f64,
}

impl Integrator {
    pub fn new(friction: f64) -> Self {
        Self { friction }
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Advance the state by one step under `force`.
    pub fn step(&self, state: SimulationState, force: f64) -> SimulationState {
        let velocity = self.friction * state.velocity + force;
        SimulationState {
            current_mid: state.current_mid + velocity,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_from_rest() {
        let integrator = Integrator::new(0.8);
        let next = integrator.step(SimulationState::new(100.0), 0.05);
        assert_eq!(next.velocity, 0.05);
        assert!((next.current_mid - 100.05).abs() < 1e-12);
    }

    #[test]
    fn test_momentum_decays_geometrically() {
        let integrator = Integrator::new(0.8);
        let mut state = integrator.step(SimulationState::new(100.0), 1.0);
        let mut expected = 1.0;
        for _ in 0..5 {
            state = integrator.step(state, 0.0);
            expected *= 0.8;
            assert!((state.velocity - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_recurrence_is_exact() {
        let integrator = Integrator::new(0.8);
        let prev = SimulationState {
            current_mid: 101.3,
            velocity: -0.27,
        };
        let force = 0.033;
        let next = integrator.step(prev, force);
        assert_eq!(next.velocity, 0.8 * prev.velocity + force);
        assert_eq!(next.current_mid, prev.current_mid + next.velocity);
    }

    #[test]
    fn test_constant_force_reaches_terminal_velocity() {
        // v* = f / (1 - friction)
        let integrator = Integrator::new(0.5);
        let mut state = SimulationState::new(0.0);
        for _ in 0..200 {
            state = integrator.step(state, 1.0);
        }
        assert!((state.velocity - 2.0).abs() < 1e-9);
    }
}
