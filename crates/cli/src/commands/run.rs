use secretary_shared::config::{Rule, SimulationConfig};
use secretary_sim::engine;

use crate::output;
use crate::RuleArg;

pub fn run(config: SimulationConfig, rule: RuleArg, param: Option<usize>) -> anyhow::Result<()> {
    let rule = match (rule, param) {
        (RuleArg::OneOverE, _) => Rule::OneOverE,
        (RuleArg::CandidateCount, Some(to_pick)) => Rule::CandidateCount { to_pick },
        (RuleArg::NonCandidate, Some(to_skip)) => Rule::NonCandidate { to_skip },
        (RuleArg::CandidateCount, None) | (RuleArg::NonCandidate, None) => {
            anyhow::bail!("--param is required for the candidate-count and non-candidate rules")
        }
    };

    let start = std::time::Instant::now();
    let estimate = engine::estimate(rule, &config)?;
    let elapsed = start.elapsed();

    output::print_header(&config);
    output::print_estimate(&estimate);
    output::print_footer(elapsed);
    Ok(())
}
