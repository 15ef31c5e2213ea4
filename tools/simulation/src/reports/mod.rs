//! Report modules for simulation output
//!
//! Depth ladders and volume heatmaps for display consumers.

pub mod depth;
pub mod heatmap;
