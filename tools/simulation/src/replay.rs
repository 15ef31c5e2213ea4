//! Deterministic replay validation
//!
//! Same spec + same seed -> bit-identical output. A run is fingerprinted by
//! SHA-256 over the raw bit patterns of its prices and book volumes, then
//! re-run and compared.

use crate::engine::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{info, warn};
use types::config::SimulationSpec;
use types::errors::ConfigError;
use types::result::SimulationResult;

/// Compact identity of a run's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFingerprint {
    pub steps: usize,
    pub price_hash: String,
    pub book_hash: String,
}

fn hash_floats<'a>(values: impl Iterator<Item = &'a f64>) -> String {
    let mut hasher = Sha256::new();
    for v in values {
        hasher.update(v.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Fingerprint a finished run.
pub fn fingerprint(result: &SimulationResult) -> RunFingerprint {
    let price_hash = hash_floats(result.price_series.as_slice().iter());
    let book_hash = hash_floats(
        result
            .book_snapshots
            .iter()
            .flat_map(|s| s.bid_volumes().iter().chain(s.ask_volumes().iter())),
    );
    RunFingerprint {
        steps: result.len(),
        price_hash,
        book_hash,
    }
}

/// Result of replay validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayValidation {
    pub matches: bool,
    pub original: RunFingerprint,
    pub replayed: RunFingerprint,
}

impl ReplayValidation {
    /// Prices agree even if books do not.
    pub fn prices_match(&self) -> bool {
        self.original.steps == self.replayed.steps
            && self.original.price_hash == self.replayed.price_hash
    }
}

/// Re-run `spec` with `seed` and compare against `expected`.
pub fn validate_replay(
    spec: &SimulationSpec,
    seed: u64,
    expected: &RunFingerprint,
) -> Result<ReplayValidation, ConfigError> {
    let mut engine = Engine::seeded(spec.clone(), seed)?;
    let replayed = fingerprint(&engine.run());
    let matches = replayed == *expected;

    if matches {
        info!(seed, steps = replayed.steps, "Replay matches original run");
    } else {
        warn!(
            seed,
            original = %expected.price_hash,
            replayed = %replayed.price_hash,
            "Replay diverged from original run"
        );
    }

    Ok(ReplayValidation {
        matches,
        original: expected.clone(),
        replayed,
    })
}

/// Run twice with the same seed and compare.
pub fn verify_double_run(spec: &SimulationSpec, seed: u64) -> Result<ReplayValidation, ConfigError> {
    let mut engine = Engine::seeded(spec.clone(), seed)?;
    let original = fingerprint(&engine.run());
    validate_replay(spec, seed, &original)
}
