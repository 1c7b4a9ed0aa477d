use secretary_shared::config::SimulationConfig;
use secretary_sim::runner;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let config = SimulationConfig {
        num_applicants: 1_000,
        num_trials: 100_000,
        seed: 42,
    };

    println!(
        "Running report ({} applicants, {} trials per rule)...",
        config.num_applicants, config.num_trials
    );
    let start = Instant::now();
    let results = runner::run_report(&config, None)?;
    let elapsed = start.elapsed();

    let total_trials: u64 = results.iter().map(|r| r.tally.trials as u64).sum();
    println!("========================================");
    for est in &results {
        println!("  {:<25.25} {:.3}", est.rule.to_string(), est.success_rate());
    }
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!(
        "  Throughput:  {:.0} trials/sec",
        total_trials as f64 / elapsed.as_secs_f64()
    );
    println!("========================================");
    Ok(())
}
