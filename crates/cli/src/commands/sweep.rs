use secretary_shared::config::{ParameterSweep, SimulationConfig, SweepKind};
use secretary_sim::runner;

use super::worker_count;
use crate::output;

pub fn run(
    config: SimulationConfig,
    kind: SweepKind,
    from: usize,
    to: Option<usize>,
    step: usize,
    workers: usize,
) -> anyhow::Result<()> {
    let sweep = ParameterSweep {
        kind,
        start: from,
        end: to.unwrap_or(config.num_applicants),
        step,
    };

    let start = std::time::Instant::now();
    let result = runner::run_sweep(&config, &sweep, worker_count(workers))?;
    let elapsed = start.elapsed();

    output::print_header(&config);
    output::print_sweep(&result);
    output::print_footer(elapsed);
    Ok(())
}
