use secretary_shared::config::SimulationConfig;
use secretary_sim::runner;

use super::worker_count;
use crate::output;

pub fn run(config: SimulationConfig, workers: usize) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    let results = runner::run_report(&config, worker_count(workers))?;
    let elapsed = start.elapsed();

    output::print_header(&config);
    output::print_report(&results);
    output::print_footer(elapsed);
    Ok(())
}
