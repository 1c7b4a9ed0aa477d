use crate::config::Rule;

/// Outcome counts for a run of independent trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialTally {
    pub trials: u32,
    pub hires: u32,
    pub successes: u32,
}

impl TrialTally {
    #[inline]
    pub fn record(&mut self, hired: Option<bool>) {
        self.trials += 1;
        if let Some(optimal) = hired {
            self.hires += 1;
            if optimal {
                self.successes += 1;
            }
        }
    }

    pub fn no_hires(&self) -> u32 {
        self.trials - self.hires
    }

    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64
        }
    }

    pub fn hire_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hires as f64 / self.trials as f64
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleEstimate {
    pub rule: Rule,
    pub tally: TrialTally,
}

impl RuleEstimate {
    pub fn success_rate(&self) -> f64 {
        self.tally.success_rate()
    }
}

#[derive(Debug, Clone)]
pub struct SweepResult {
    pub points: Vec<RuleEstimate>,
}

impl SweepResult {
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Highest success rate; the earliest point wins ties.
    pub fn best(&self) -> Option<&RuleEstimate> {
        self.points.iter().fold(None, |best, p| match best {
            Some(b) if b.success_rate() >= p.success_rate() => Some(b),
            _ => Some(p),
        })
    }
}
