mod commands;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use secretary_shared::config::{SimulationConfig, SweepKind, BASELINE_APPLICANTS, BASELINE_TRIALS};

#[derive(Parser)]
#[command(name = "secretary", about = "Monte Carlo estimates for secretary-problem stopping rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PoolArgs {
    /// Number of applicants in the pool
    #[arg(long, default_value_t = BASELINE_APPLICANTS)]
    applicants: usize,
    /// Number of trials per estimate
    #[arg(long, default_value_t = BASELINE_TRIALS)]
    trials: u32,
    /// Seed for the random generator (drawn from OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl PoolArgs {
    fn into_config(self) -> SimulationConfig {
        SimulationConfig {
            num_applicants: self.applicants,
            num_trials: self.trials,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    OneOverE,
    CandidateCount,
    NonCandidate,
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepArg {
    CandidateCount,
    NonCandidate,
}

impl From<SweepArg> for SweepKind {
    fn from(arg: SweepArg) -> Self {
        match arg {
            SweepArg::CandidateCount => SweepKind::CandidateCount,
            SweepArg::NonCandidate => SweepKind::NonCandidate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the 1/e, candidate-count and non-candidate rules side by side
    Report {
        #[command(flatten)]
        pool: PoolArgs,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
    },
    /// Estimate a single rule
    Run {
        #[command(flatten)]
        pool: PoolArgs,
        /// Stopping rule to simulate
        #[arg(long, value_enum)]
        rule: RuleArg,
        /// Candidates to pick or non-candidates to skip (ignored by the 1/e rule)
        #[arg(long)]
        param: Option<usize>,
    },
    /// Success-rate curve over a rule parameter
    Sweep {
        #[command(flatten)]
        pool: PoolArgs,
        /// Rule family to sweep
        #[arg(long, value_enum)]
        rule: SweepArg,
        /// First parameter value
        #[arg(long, default_value = "1")]
        from: usize,
        /// Last parameter value (defaults to the pool size)
        #[arg(long)]
        to: Option<usize>,
        /// Step between parameter values
        #[arg(long, default_value = "1")]
        step: usize,
        /// Number of parallel workers (0 = auto)
        #[arg(long, default_value = "0")]
        workers: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report { pool, workers } => commands::report::run(pool.into_config(), workers),
        Commands::Run { pool, rule, param } => commands::run::run(pool.into_config(), rule, param),
        Commands::Sweep {
            pool,
            rule,
            from,
            to,
            step,
            workers,
        } => commands::sweep::run(pool.into_config(), rule.into(), from, to, step, workers),
    }
}
