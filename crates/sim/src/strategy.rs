//! Stopping rules for the secretary problem.
//!
//! Every rule scans a permutation of ranks once and either returns the index of
//! the applicant it hires or `None` when it reaches the end without hiring.
//! An applicant is a *candidate* when its rank beats every rank before it; the
//! first applicant sets the initial best and is never a candidate itself.

use std::f64::consts::E;

use secretary_shared::config::Rule;

/// A selection strategy: permutation in, hired index (or no hire) out.
pub trait Strategy {
    fn select(&self, ranks: &[usize]) -> Option<usize>;
}

impl<F> Strategy for F
where
    F: Fn(&[usize]) -> Option<usize>,
{
    #[inline]
    fn select(&self, ranks: &[usize]) -> Option<usize> {
        self(ranks)
    }
}

/// Strategy implementing `rule`.
pub fn for_rule(rule: Rule) -> impl Strategy {
    move |ranks: &[usize]| select(&rule, ranks)
}

pub fn select(rule: &Rule, ranks: &[usize]) -> Option<usize> {
    match *rule {
        Rule::OneOverE => select_one_over_e(ranks),
        Rule::CandidateCount { to_pick } => select_nth_candidate(ranks, to_pick),
        Rule::NonCandidate { to_skip } => select_after_non_candidates(ranks, to_skip),
    }
}

/// Indices of the candidates in `ranks`, in arrival order.
pub fn candidates(ranks: &[usize]) -> impl Iterator<Item = usize> + '_ {
    let mut best = ranks.first().copied().unwrap_or_default();
    ranks.iter().enumerate().filter_map(move |(i, &rank)| {
        if rank > best {
            best = rank;
            Some(i)
        } else {
            None
        }
    })
}

/// Number of leading applicants the 1/e rule rejects outright.
///
/// `f64::round` rounds half away from zero, and anything below 0.5 rounds to 0.
pub fn one_over_e_cutoff(n: usize) -> usize {
    (n as f64 / E).round() as usize
}

/// Hire the first candidate whose index is past the cutoff.
pub fn select_one_over_e(ranks: &[usize]) -> Option<usize> {
    let cutoff = one_over_e_cutoff(ranks.len());
    candidates(ranks).find(|&i| i > cutoff)
}

/// Hire the `to_pick`-th candidate. `to_pick == 0` never hires.
pub fn select_nth_candidate(ranks: &[usize], to_pick: usize) -> Option<usize> {
    let nth = to_pick.checked_sub(1)?;
    candidates(ranks).nth(nth)
}

/// Hire the first candidate seen after more than `to_skip` non-candidates.
///
/// The non-candidate count accumulates over the whole scan and never resets;
/// the first applicant counts as a non-candidate. A candidate arriving before
/// the threshold only raises the running best.
pub fn select_after_non_candidates(ranks: &[usize], to_skip: usize) -> Option<usize> {
    let mut best = *ranks.first()?;
    let mut non_candidates = 0usize;
    for (i, &rank) in ranks.iter().enumerate() {
        if rank > best {
            best = rank;
            if non_candidates > to_skip {
                return Some(i);
            }
        } else {
            non_candidates += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn descending(n: usize) -> Vec<usize> {
        (0..n).rev().collect()
    }

    #[test]
    fn test_candidates() {
        assert_eq!(candidates(&[2, 0, 4, 1, 3]).collect::<Vec<_>>(), vec![2]);
        assert_eq!(candidates(&[1, 3, 2, 5, 4, 6]).collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(candidates(&[]).count(), 0);
        assert_eq!(candidates(&descending(10)).count(), 0);
        assert_eq!(candidates(&ascending(10)).collect::<Vec<_>>(), (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_cutoff_rounding() {
        assert_eq!(one_over_e_cutoff(0), 0);
        assert_eq!(one_over_e_cutoff(1), 0); // 0.37
        assert_eq!(one_over_e_cutoff(2), 1); // 0.74
        assert_eq!(one_over_e_cutoff(10), 4); // 3.68
        assert_eq!(one_over_e_cutoff(100), 37); // 36.79
    }

    #[test]
    fn test_one_over_e_boundaries() {
        // ascending: first applicant past the cutoff is a candidate
        assert_eq!(select_one_over_e(&ascending(10)), Some(5));
        assert_eq!(select_one_over_e(&ascending(100)), Some(38));
        assert_eq!(select_one_over_e(&descending(10)), None);
    }

    #[test]
    fn test_one_over_e_ignores_candidates_inside_cutoff() {
        // n = 10, cutoff 4: the candidate at index 3 is skipped and raises the bar
        let ranks = [0, 1, 2, 9, 3, 4, 5, 6, 7, 8];
        assert_eq!(select_one_over_e(&ranks), None);

        let ranks = [5, 1, 2, 3, 4, 0, 6, 9, 7, 8];
        assert_eq!(select_one_over_e(&ranks), Some(6));
    }

    #[test]
    fn test_nth_candidate_scenario() {
        let ranks = [2, 0, 4, 1, 3];
        assert_eq!(select_nth_candidate(&ranks, 1), Some(2));
        assert_eq!(select_nth_candidate(&ranks, 2), None);
    }

    #[test]
    fn test_nth_candidate_boundaries() {
        assert_eq!(select_nth_candidate(&ascending(10), 1), Some(1));
        assert_eq!(select_nth_candidate(&ascending(10), 4), Some(4));
        assert_eq!(select_nth_candidate(&ascending(10), 9), Some(9));
        assert_eq!(select_nth_candidate(&ascending(10), 10), None);
        assert_eq!(select_nth_candidate(&ascending(10), 0), None);
        assert_eq!(select_nth_candidate(&descending(10), 1), None);
    }

    #[test]
    fn test_non_candidate_counts_first_applicant() {
        // index 0 is the only non-candidate on an ascending run
        assert_eq!(select_after_non_candidates(&ascending(10), 0), Some(1));
        assert_eq!(select_after_non_candidates(&ascending(10), 1), None);
        assert_eq!(select_after_non_candidates(&descending(10), 0), None);
    }

    #[test]
    fn test_non_candidate_counter_never_resets() {
        // non-candidates at 0, 1, 3; candidate at 2 arrives with count 2 (not > 2),
        // candidate at 4 arrives with count 3 and is hired
        let ranks = [3, 1, 4, 0, 5, 2];
        assert_eq!(select_after_non_candidates(&ranks, 2), Some(4));
        // non-candidates are not required to be consecutive
        let ranks = [3, 1, 5, 2, 0, 4, 6];
        assert_eq!(select_after_non_candidates(&ranks, 3), Some(6));
    }

    #[test]
    fn test_single_applicant_never_hired() {
        for rule in [
            Rule::OneOverE,
            Rule::CandidateCount { to_pick: 1 },
            Rule::NonCandidate { to_skip: 0 },
        ] {
            assert_eq!(select(&rule, &[0]), None, "{}", rule);
        }
    }

    #[test]
    fn test_empty_pool_never_hires() {
        assert_eq!(select_one_over_e(&[]), None);
        assert_eq!(select_nth_candidate(&[], 1), None);
        assert_eq!(select_after_non_candidates(&[], 0), None);
    }

    #[test]
    fn test_for_rule_matches_select() {
        let ranks = [1, 3, 2, 5, 4, 6];
        let strategy = for_rule(Rule::CandidateCount { to_pick: 2 });
        assert_eq!(strategy.select(&ranks), Some(3));
        let closure = |r: &[usize]| r.iter().position(|&x| x == 6);
        assert_eq!(closure.select(&ranks), Some(5));
    }
}
