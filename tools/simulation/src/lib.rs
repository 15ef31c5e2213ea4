//! Order-Flow Impact Simulator
//!
//! Synthesizes a mid-price path and matching synthetic order book depth from
//! a damped random walk (Langevin dynamics) perturbed by repulsive
//! support/resistance walls. Generative only: nothing here is fitted to
//! market data.
//!
//! # Modules
//! - `force` — Stochastic term plus inverse-linear wall repulsion
//! - `integrator` — Velocity/position update with friction
//! - `book` — Gamma-distributed depth with wall volume blocks
//! - `stats` — Bid/ask totals and imbalance per step
//! - `engine` — Seeded per-step driver and `run` entry points
//! - `metrics` — Run summary metrics
//! - `ensemble` — Independent seeded runs across threads
//! - `replay` — Fingerprinting and deterministic replay validation
//! - `reports` — Depth ladder and heatmap projections
//! - `export` — JSON export of a complete run

pub mod force;
pub mod integrator;
pub mod book;
pub mod stats;
pub mod engine;
pub mod metrics;
pub mod ensemble;
pub mod replay;
pub mod reports;
pub mod export;

pub use engine::{run, run_seeded, Engine};

/// Crate version constant
pub const VERSION: &str = "1.0.0";
