//! Batch runs over independent simulator configurations.
//!
//! Each run builds its own simulator, so no generator state is shared between
//! runs. With the `threading` feature runs are spread over the rayon pool.
use tracing::debug;

use crate::config::SimulatorConfig;
use crate::report::StepReport;

/// Step a fresh simulator `steps` times, reporting after each step.
pub fn run_series(config: &SimulatorConfig, steps: usize, scale: f64) -> Vec<StepReport> {
    let mut sim = config.build();
    (0..steps)
        .map(|_| {
            sim.step(scale);
            sim.report()
        })
        .collect()
}

/// [`run_series`] for every config; output order follows input order.
pub fn run_ensemble(configs: &[SimulatorConfig], steps: usize, scale: f64) -> Vec<Vec<StepReport>> {
    debug!(runs = configs.len(), steps, scale, "running ensemble");
    run_each(configs, |config| run_series(config, steps, scale))
}

#[cfg(feature = "threading")]
fn run_each<F>(configs: &[SimulatorConfig], run: F) -> Vec<Vec<StepReport>>
where
    F: Fn(&SimulatorConfig) -> Vec<StepReport> + Sync + Send,
{
    use rayon::prelude::*;
    configs.par_iter().map(run).collect()
}

#[cfg(not(feature = "threading"))]
fn run_each<F>(configs: &[SimulatorConfig], run: F) -> Vec<Vec<StepReport>>
where
    F: Fn(&SimulatorConfig) -> Vec<StepReport>,
{
    configs.iter().map(run).collect()
}
