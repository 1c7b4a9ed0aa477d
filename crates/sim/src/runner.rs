use rayon::prelude::*;

use secretary_shared::config::{ParameterSweep, Rule, SimulationConfig};
use secretary_shared::result::{RuleEstimate, SweepResult};

use crate::engine;

/// Estimate each rule as an independent job. Job `i` runs with `config.seed + i`,
/// so results do not depend on the worker count.
pub fn run_batch(
    rules: &[Rule],
    config: &SimulationConfig,
    n_workers: Option<usize>,
) -> anyhow::Result<Vec<RuleEstimate>> {
    for rule in rules {
        config.validate(rule)?;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;

    let results: Result<Vec<RuleEstimate>, _> = pool.install(|| {
        rules
            .par_iter()
            .enumerate()
            .map(|(i, &rule)| engine::estimate(rule, &config.with_seed_offset(i as u64)))
            .collect()
    });

    Ok(results?)
}

/// The demonstration report: 1/e, 4th candidate, and n/2 non-candidates.
pub fn run_report(
    config: &SimulationConfig,
    n_workers: Option<usize>,
) -> anyhow::Result<Vec<RuleEstimate>> {
    let rules = Rule::report_rules(config.num_applicants);
    run_batch(&rules, config, n_workers)
}

/// Success-rate curve over a rule parameter, one job per parameter value.
pub fn run_sweep(
    config: &SimulationConfig,
    sweep: &ParameterSweep,
    n_workers: Option<usize>,
) -> anyhow::Result<SweepResult> {
    let rules = sweep.rules()?;
    let points = run_batch(&rules, config, n_workers)?;
    Ok(SweepResult { points })
}
