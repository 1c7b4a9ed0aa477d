use rand::Rng;

use secretary_shared::config::{ConfigError, Rule, SimulationConfig};
use secretary_shared::result::{RuleEstimate, TrialTally};

use crate::permutation;
use crate::strategy::{self, Strategy};
use crate::trial_stats;

fn run_trials_inner<S, R>(strategy: &S, num_applicants: usize, num_trials: u32, rng: &mut R) -> TrialTally
where
    S: Strategy + ?Sized,
    R: Rng + ?Sized,
{
    let mut ranks = permutation::ranks(num_applicants);
    // shuffling moves values, never changes them
    let optimal = num_applicants - 1;
    let mut tally = TrialTally::default();

    for _ in 0..num_trials {
        permutation::shuffle(&mut ranks, rng);
        // an index past the end (custom strategies only) counts as no hire
        let hired = strategy
            .select(&ranks)
            .and_then(|i| ranks.get(i))
            .map(|&rank| rank == optimal);
        tally.record(hired);
    }

    trial_stats::record_run(tally.trials, tally.hires, tally.successes);
    tally
}

/// Run `config.num_trials` trials of any strategy against a caller-owned generator.
pub fn run_trials<S, R>(
    strategy: &S,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<TrialTally, ConfigError>
where
    S: Strategy + ?Sized,
    R: Rng + ?Sized,
{
    config.validate_pool()?;
    Ok(run_trials_inner(strategy, config.num_applicants, config.num_trials, rng))
}

/// Success rate of any strategy against a caller-owned generator.
pub fn simulate_with_rng<S, R>(
    strategy: &S,
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<f64, ConfigError>
where
    S: Strategy + ?Sized,
    R: Rng + ?Sized,
{
    run_trials(strategy, config, rng).map(|tally| tally.success_rate())
}

/// Run `rule` with a generator seeded from `config.seed`.
pub fn estimate(rule: Rule, config: &SimulationConfig) -> Result<RuleEstimate, ConfigError> {
    config.validate(&rule)?;
    let mut rng = config.rng();
    let tally = run_trials_inner(
        &strategy::for_rule(rule),
        config.num_applicants,
        config.num_trials,
        &mut rng,
    );
    Ok(RuleEstimate { rule, tally })
}

pub fn simulate(rule: Rule, config: &SimulationConfig) -> Result<f64, ConfigError> {
    estimate(rule, config).map(|e| e.success_rate())
}

pub fn simulate_one_over_e(num_applicants: usize, num_trials: u32, seed: u64) -> Result<f64, ConfigError> {
    let config = SimulationConfig { num_applicants, num_trials, seed };
    simulate(Rule::OneOverE, &config)
}

pub fn simulate_candidate_count(
    num_applicants: usize,
    num_trials: u32,
    to_pick: usize,
    seed: u64,
) -> Result<f64, ConfigError> {
    let config = SimulationConfig { num_applicants, num_trials, seed };
    simulate(Rule::CandidateCount { to_pick }, &config)
}

pub fn simulate_non_candidate(
    num_applicants: usize,
    num_trials: u32,
    to_skip: usize,
    seed: u64,
) -> Result<f64, ConfigError> {
    let config = SimulationConfig { num_applicants, num_trials, seed };
    simulate(Rule::NonCandidate { to_skip }, &config)
}
