use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

pub const TRIAL_STATS_ENV: &str = "SECRETARY_TRIAL_STATS";

fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os(TRIAL_STATS_ENV).is_some())
}

#[derive(Debug, Clone, Copy)]
pub struct TrialStatsSnapshot {
    pub runs: u64,
    pub trials: u64,
    pub hires: u64,
    pub no_hires: u64,
    pub optimal_hires: u64,
}

static RUNS: AtomicU64 = AtomicU64::new(0);
static TRIALS: AtomicU64 = AtomicU64::new(0);
static HIRES: AtomicU64 = AtomicU64::new(0);
static NO_HIRES: AtomicU64 = AtomicU64::new(0);
static OPTIMAL_HIRES: AtomicU64 = AtomicU64::new(0);

pub fn reset() {
    RUNS.store(0, Ordering::Relaxed);
    TRIALS.store(0, Ordering::Relaxed);
    HIRES.store(0, Ordering::Relaxed);
    NO_HIRES.store(0, Ordering::Relaxed);
    OPTIMAL_HIRES.store(0, Ordering::Relaxed);
}

pub fn snapshot_if_enabled() -> Option<TrialStatsSnapshot> {
    if !enabled() {
        return None;
    }
    Some(TrialStatsSnapshot {
        runs: RUNS.load(Ordering::Relaxed),
        trials: TRIALS.load(Ordering::Relaxed),
        hires: HIRES.load(Ordering::Relaxed),
        no_hires: NO_HIRES.load(Ordering::Relaxed),
        optimal_hires: OPTIMAL_HIRES.load(Ordering::Relaxed),
    })
}

/// Folds a finished run into the counters. Called once per run, not per trial.
#[inline]
pub(crate) fn record_run(trials: u32, hires: u32, successes: u32) {
    if enabled() {
        RUNS.fetch_add(1, Ordering::Relaxed);
        TRIALS.fetch_add(trials as u64, Ordering::Relaxed);
        HIRES.fetch_add(hires as u64, Ordering::Relaxed);
        NO_HIRES.fetch_add((trials - hires) as u64, Ordering::Relaxed);
        OPTIMAL_HIRES.fetch_add(successes as u64, Ordering::Relaxed);
    }
}
