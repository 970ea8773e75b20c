//! Parallel execution of independent scenarios

use algaesim_core::SimulationResult;
use rayon::prelude::*;
use tracing::debug;

use crate::simulation::scenario::Scenario;

/// Run every scenario on the rayon pool.
///
/// Results are returned in the order of `scenarios`. Each run is itself
/// sequential.
pub fn run_batch(scenarios: &[Scenario]) -> Vec<SimulationResult> {
    debug!(n_scenarios = scenarios.len(), "Running scenario batch");
    scenarios.par_iter().map(Scenario::run).collect()
}
