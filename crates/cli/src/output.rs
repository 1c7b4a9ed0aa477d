use secretary_shared::config::SimulationConfig;
use secretary_shared::result::{RuleEstimate, SweepResult};
use std::time::Duration;

pub fn print_header(config: &SimulationConfig) {
    println!(
        "{} applicants, {} trials per rule (seed {})\n",
        config.num_applicants, config.num_trials, config.seed,
    );
}

fn print_rate(label: &str, rate: f64) {
    println!("{:<25.25} {:.3}", label, rate);
}

pub fn print_report(results: &[RuleEstimate]) {
    for est in results {
        print_rate(&format!("{}:", est.rule.label()), est.success_rate());
    }
}

pub fn print_estimate(est: &RuleEstimate) {
    print_rate(&format!("{}:", est.rule), est.success_rate());
    println!(
        "  hires: {} / {} (no hire in {:.1}% of trials)",
        est.tally.hires,
        est.tally.trials,
        100.0 * (1.0 - est.tally.hire_rate()),
    );
}

pub fn print_sweep(result: &SweepResult) {
    println!("{:>8}  {:>8}  {:>8}", "param", "success", "hired");
    for point in &result.points {
        println!(
            "{:>8}  {:>8.3}  {:>8.3}",
            point.rule.param().unwrap_or_default(),
            point.success_rate(),
            point.tally.hire_rate(),
        );
    }
    if let Some(best) = result.best() {
        println!("\nBest: {} -> {:.3}", best.rule, best.success_rate());
    }
}

pub fn print_footer(elapsed: Duration) {
    println!("\n  Time: {:.2}s", elapsed.as_secs_f64());

    if let Some(stats) = secretary_sim::trial_stats::snapshot_if_enabled() {
        let trials = stats.trials.max(1);
        println!("\nTrial stats ({}=1):", secretary_sim::trial_stats::TRIAL_STATS_ENV);
        println!(
            "  runs={} trials={} hires={} ({:.1}%) no_hires={} ({:.1}%) optimal={} ({:.1}%)",
            stats.runs,
            stats.trials,
            stats.hires,
            100.0 * stats.hires as f64 / trials as f64,
            stats.no_hires,
            100.0 * stats.no_hires as f64 / trials as f64,
            stats.optimal_hires,
            100.0 * stats.optimal_hires as f64 / trials as f64,
        );
    }
}
