//! Distribution aggregator: runs trials and reduces them into tables

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::stats::{Distribution, RawResults};
use crate::walk::run_trial;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

/// Full output of one simulation run: the raw per-trial step counts and the
/// derived distribution table. Rebuilt from scratch on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub raw: RawResults,
    pub distribution: Distribution,
}

/// Run all trials with a caller-provided RNG, preserving call order.
///
/// This is the deterministic path: the same config and the same seeded RNG
/// produce bit-identical results.
pub fn run_trials_with_rng(config: &SimulationConfig, rng: &mut impl Rng) -> Result<RawResults> {
    (0..config.trial_count)
        .map(|_| run_trial(config, rng))
        .collect()
}

/// Run all trials sequentially with an entropy-seeded RNG.
pub fn run_trials_sequential(config: &SimulationConfig) -> Result<RawResults> {
    let mut rng = SmallRng::from_entropy();
    run_trials_with_rng(config, &mut rng)
}

/// Run all trials in parallel.
///
/// Each trial gets its own entropy-seeded RNG so the random streams are
/// independent, and the reduction happens only after every trial has
/// finished, so the distribution semantics match the sequential path.
pub fn run_trials_parallel(config: &SimulationConfig) -> Result<RawResults> {
    // Leave some cores free to keep the host responsive
    let num_threads = num_cpus::get().min(8);

    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .unwrap_or_else(|_| ThreadPoolBuilder::new().build().unwrap());

    pool.install(|| {
        (0..config.trial_count)
            .into_par_iter()
            .map(|_| {
                let mut rng = SmallRng::from_entropy();
                run_trial(config, &mut rng)
            })
            .collect()
    })
}

/// Validate the config, run every trial, and reduce the outcomes into the
/// raw and distribution tables.
///
/// Fails with `InvalidConfig` before any trial runs, or with `Timeout` if a
/// single trial exceeds the step ceiling; no partial results are returned.
pub fn run_and_aggregate(config: &SimulationConfig, parallel: bool) -> Result<SimulationOutcome> {
    config.validate()?;

    let raw = if parallel {
        run_trials_parallel(config)?
    } else {
        run_trials_sequential(config)?
    };

    let distribution = Distribution::from_results(&raw);
    Ok(SimulationOutcome { raw, distribution })
}

/// Seeded variant of [`run_and_aggregate`]: sequential, reproducible.
pub fn run_and_aggregate_seeded(config: &SimulationConfig, seed: u64) -> Result<SimulationOutcome> {
    config.validate()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let raw = run_trials_with_rng(config, &mut rng)?;
    let distribution = Distribution::from_results(&raw);
    Ok(SimulationOutcome { raw, distribution })
}
