use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg64;

// Baseline simulation parameters
pub const BASELINE_APPLICANTS: usize = 100;
pub const BASELINE_TRIALS: u32 = 10_000;
pub const DEFAULT_TO_PICK: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("number of applicants must be positive")]
    NoApplicants,
    #[error("number of trials must be positive")]
    NoTrials,
    #[error("{rule} parameter {value} is outside [0, {num_applicants}]")]
    ParameterOutOfRange {
        rule: &'static str,
        value: usize,
        num_applicants: usize,
    },
    #[error("sweep range {start}..={end} is empty")]
    EmptySweep { start: usize, end: usize },
    #[error("sweep step must be positive")]
    ZeroStep,
}

/// A stopping rule together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Reject the first `round(n / e)` applicants, then hire the next candidate.
    OneOverE,
    /// Hire the `to_pick`-th candidate.
    CandidateCount { to_pick: usize },
    /// Hire the first candidate once more than `to_skip` non-candidates have been seen.
    NonCandidate { to_skip: usize },
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::OneOverE => "1/e rule",
            Rule::CandidateCount { .. } => "candidate count rule",
            Rule::NonCandidate { .. } => "non-candidate rule",
        }
    }

    pub fn param(&self) -> Option<usize> {
        match *self {
            Rule::OneOverE => None,
            Rule::CandidateCount { to_pick } => Some(to_pick),
            Rule::NonCandidate { to_skip } => Some(to_skip),
        }
    }

    /// The three rules of the demonstration report for a pool of `num_applicants`.
    /// `to_pick` is capped at the pool size so every rule is valid for small pools.
    pub fn report_rules(num_applicants: usize) -> [Rule; 3] {
        [
            Rule::OneOverE,
            Rule::CandidateCount {
                to_pick: DEFAULT_TO_PICK.min(num_applicants),
            },
            // k = n / 2 generally performs well for the non-candidate rule
            Rule::NonCandidate {
                to_skip: num_applicants / 2,
            },
        ]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.param() {
            Some(p) => write!(f, "{} ({})", self.label(), p),
            None => f.write_str(self.label()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub num_applicants: usize,
    pub num_trials: u32,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_applicants: BASELINE_APPLICANTS,
            num_trials: BASELINE_TRIALS,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Checks the pool size and trial count.
    pub fn validate_pool(&self) -> Result<(), ConfigError> {
        if self.num_applicants == 0 {
            return Err(ConfigError::NoApplicants);
        }
        if self.num_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }

    /// Checks the pool and that the rule parameter lies in `[0, num_applicants]`.
    pub fn validate(&self, rule: &Rule) -> Result<(), ConfigError> {
        self.validate_pool()?;
        if let Some(value) = rule.param() {
            if value > self.num_applicants {
                return Err(ConfigError::ParameterOutOfRange {
                    rule: rule.label(),
                    value,
                    num_applicants: self.num_applicants,
                });
            }
        }
        Ok(())
    }

    pub fn rng(&self) -> Pcg64 {
        Pcg64::seed_from_u64(self.seed)
    }

    /// Config for the `i`-th job of a batch; each job gets its own generator stream.
    pub fn with_seed_offset(&self, i: u64) -> Self {
        Self {
            seed: self.seed.wrapping_add(i),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    CandidateCount,
    NonCandidate,
}

/// An inclusive range of parameter values for one rule family.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSweep {
    pub kind: SweepKind,
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl ParameterSweep {
    pub fn rules(&self) -> Result<Vec<Rule>, ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.start > self.end {
            return Err(ConfigError::EmptySweep {
                start: self.start,
                end: self.end,
            });
        }
        Ok((self.start..=self.end)
            .step_by(self.step)
            .map(|p| match self.kind {
                SweepKind::CandidateCount => Rule::CandidateCount { to_pick: p },
                SweepKind::NonCandidate => Rule::NonCandidate { to_skip: p },
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_matches_baseline() {
        let config = SimulationConfig::default();
        assert_eq!(config.num_applicants, 100);
        assert_eq!(config.num_trials, 10_000);
    }

    #[test]
    fn test_validate_rejects_empty_pool_and_zero_trials() {
        let config = SimulationConfig {
            num_applicants: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(&Rule::OneOverE), Err(ConfigError::NoApplicants));

        let config = SimulationConfig {
            num_trials: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(&Rule::OneOverE), Err(ConfigError::NoTrials));
    }

    #[test]
    fn test_validate_parameter_bounds() {
        let config = SimulationConfig {
            num_applicants: 10,
            ..SimulationConfig::default()
        };
        assert!(config.validate(&Rule::CandidateCount { to_pick: 0 }).is_ok());
        assert!(config.validate(&Rule::NonCandidate { to_skip: 10 }).is_ok());
        assert_eq!(
            config.validate(&Rule::NonCandidate { to_skip: 11 }),
            Err(ConfigError::ParameterOutOfRange {
                rule: "non-candidate rule",
                value: 11,
                num_applicants: 10,
            })
        );
    }

    #[test]
    fn test_seed_offset_changes_stream() {
        let base = SimulationConfig {
            seed: 42,
            ..SimulationConfig::default()
        };
        let mut a = base.rng();
        let mut b = base.with_seed_offset(0).rng();
        let mut c = base.with_seed_offset(1).rng();
        let x: u64 = a.gen();
        assert_eq!(x, b.gen::<u64>());
        assert_ne!(x, c.gen::<u64>());
    }

    #[test]
    fn test_report_rules() {
        let rules = Rule::report_rules(100);
        assert_eq!(rules[0], Rule::OneOverE);
        assert_eq!(rules[1], Rule::CandidateCount { to_pick: 4 });
        assert_eq!(rules[2], Rule::NonCandidate { to_skip: 50 });
        assert_eq!(rules[2].to_string(), "non-candidate rule (50)");
    }

    #[test]
    fn test_report_rules_valid_for_small_pools() {
        for num_applicants in 1..=5 {
            let config = SimulationConfig {
                num_applicants,
                ..SimulationConfig::default()
            };
            for rule in Rule::report_rules(num_applicants) {
                assert!(config.validate(&rule).is_ok(), "{} with n = {}", rule, num_applicants);
            }
        }
        assert_eq!(Rule::report_rules(3)[1], Rule::CandidateCount { to_pick: 3 });
        assert_eq!(Rule::report_rules(1)[1], Rule::CandidateCount { to_pick: 1 });
    }

    #[test]
    fn test_sweep_expansion() {
        let sweep = ParameterSweep {
            kind: SweepKind::CandidateCount,
            start: 1,
            end: 7,
            step: 3,
        };
        let rules = sweep.rules().unwrap();
        assert_eq!(
            rules,
            vec![
                Rule::CandidateCount { to_pick: 1 },
                Rule::CandidateCount { to_pick: 4 },
                Rule::CandidateCount { to_pick: 7 },
            ]
        );

        let empty = ParameterSweep { start: 5, end: 2, ..sweep };
        assert_eq!(empty.rules(), Err(ConfigError::EmptySweep { start: 5, end: 2 }));
        let zero = ParameterSweep { step: 0, ..sweep };
        assert_eq!(zero.rules(), Err(ConfigError::ZeroStep));
    }
}
