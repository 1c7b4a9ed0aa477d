pub mod engine;
pub mod permutation;
pub mod runner;
pub mod strategy;
pub mod trial_stats;

pub use engine::{
    estimate, run_trials, simulate, simulate_candidate_count, simulate_non_candidate,
    simulate_one_over_e, simulate_with_rng,
};
pub use strategy::Strategy;
