//! Run one simulation and write its JSON export.
//!
//! Usage: `orderflow-sim [SPEC_JSON] [OUTPUT_JSON]`

use orderflow_sim::engine::Engine;
use orderflow_sim::export::{build_export, write_to_file};
use orderflow_sim::metrics::RunMetrics;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use types::config::SimulationSpec;

const DEFAULT_OUTPUT: &str = "simulation_export.json";

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let spec = match args.next() {
        Some(path) => {
            tracing::info!(%path, "Loading simulation spec");
            SimulationSpec::from_file(&path)?
        }
        None => SimulationSpec::default(),
    };
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let (mut engine, seed) = Engine::from_spec(spec.clone())?;
    tracing::info!(seed, "Using seed");

    let start = Instant::now();
    let result = engine.run();
    let mut metrics = RunMetrics::from_result(&result, spec.force.initial_mid);
    metrics.set_elapsed(start.elapsed().as_nanos() as u64);
    tracing::info!("{}", metrics.summary());

    let export = build_export(spec, seed, metrics, result);
    write_to_file(&export, &output)?;
    tracing::info!(%output, run_id = %export.run_id, "Export written");

    Ok(())
}
