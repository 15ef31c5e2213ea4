//! Simulation export
//!
//! Serializes a run (spec, seed, metrics, full output) to JSON for external
//! consumption, e.g. a display layer.

use crate::metrics::RunMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use types::config::SimulationSpec;
use types::errors::SimError;
use types::ids::RunId;
use types::result::SimulationResult;

/// Combined export containing all simulation outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationExport {
    pub version: String,
    pub run_id: RunId,
    pub created_at: DateTime<Utc>,
    /// Seed actually used, so the run can be replayed
    pub seed: u64,
    pub spec: SimulationSpec,
    pub metrics: RunMetrics,
    pub result: SimulationResult,
}

/// Build a complete simulation export.
pub fn build_export(
    spec: SimulationSpec,
    seed: u64,
    metrics: RunMetrics,
    result: SimulationResult,
) -> SimulationExport {
    SimulationExport {
        version: crate::VERSION.to_string(),
        run_id: RunId::new(),
        created_at: Utc::now(),
        seed,
        spec,
        metrics,
        result,
    }
}

/// Export complete simulation data as JSON.
pub fn export_json(export: &SimulationExport) -> Result<String, SimError> {
    Ok(serde_json::to_string_pretty(export)?)
}

/// Write export to a file path.
pub fn write_to_file(export: &SimulationExport, path: impl AsRef<Path>) -> Result<(), SimError> {
    let json = export_json(export)?;
    std::fs::write(path, json)?;
    Ok(())
}
