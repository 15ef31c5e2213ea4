//! Types library for the order-flow impact simulator
//!
//! This library provides the data model shared by the simulation engine and
//! its consumers: run configuration, book snapshots, price series, run output
//! and the error taxonomy.
//!
//! # Modules
//! - `ids`: Run identifiers (RunId)
//! - `config`: Run shape, walls, force and book parameters
//! - `book`: Order book snapshots and step statistics
//! - `series`: Mid-price series
//! - `result`: Simulation output and per-step traces
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod config;
pub mod book;
pub mod series;
pub mod result;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::config::*;
    pub use crate::book::*;
    pub use crate::series::*;
    pub use crate::result::*;
    pub use crate::errors::*;
}
