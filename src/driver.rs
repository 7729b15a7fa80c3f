use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cache::RelationCache;
use crate::config::SolverConfig;
use crate::greedy::construct;
use crate::model::condition::{Score, ScoreResult};
use crate::model::entity::{MemberIndex, Roster};
use crate::model::group::Grouping;
use crate::refine::{refine, Params};

#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    pub trial: usize,
    pub seed: u64,
    pub initial_score: Score,
    pub final_score: Score,
    pub n_accepted: usize,
    pub n_unplaced: usize,
}

struct TrialOutcome {
    grouping: Grouping,
    score: ScoreResult,
    unplaced: Vec<MemberIndex>,
    report: TrialReport,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub grouping: Grouping,
    pub score: ScoreResult,
    pub unplaced: Vec<MemberIndex>,
    pub best_trial: usize,
    pub trials: Vec<TrialReport>,
}

impl Solution {
    pub fn groups<'r>(&self, roster: &'r Roster) -> Vec<Vec<&'r str>> {
        self.grouping.member_ids(roster)
    }

    pub fn unplaced_ids<'r>(&self, roster: &'r Roster) -> Vec<&'r str> {
        self.unplaced.iter().filter_map(|m| roster.id_of(*m)).collect()
    }
}

/// Runs independent construct-then-refine trials and keeps the best.
pub struct Solver<'r> {
    roster: &'r Roster,
    relations: RelationCache,
    config: SolverConfig,
}

impl<'r> Solver<'r> {
    pub fn new(roster: &'r Roster, config: SolverConfig) -> Solver<'r> {
        Solver { roster, relations: RelationCache::new(roster), config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Seeds from the configured seed, or from entropy when there is none.
    pub fn solve(&self, group_count: usize, capacity: usize) -> Solution {
        let mut rng = match self.config.random_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.solve_with_rng(group_count, capacity, &mut rng)
    }

    /// Each trial gets its own seed drawn from `rng`, so a run can be
    /// replayed trial by trial, sequentially or in parallel.
    #[tracing::instrument(level = "debug", skip(self, rng), fields(members = self.roster.len()))]
    pub fn solve_with_rng<R: Rng + ?Sized>(&self, group_count: usize, capacity: usize, rng: &mut R) -> Solution {
        if self.config.trials == 0 {
            warn!("trial count of zero, running a single trial");
        }
        if group_count == 0 || capacity == 0 {
            warn!(group_count, capacity, "no seats available");
        }
        let n_trials = self.config.trials.max(1);
        let first_seed: u64 = rng.gen();
        let seeds: Vec<u64> = (1..n_trials).map(|_| rng.gen()).collect();

        let first = self.run_trial(0, first_seed, group_count, capacity);
        let rest: Vec<TrialOutcome> = if self.config.parallel {
            seeds.par_iter()
                .enumerate()
                .map(|(offset, seed)| self.run_trial(offset + 1, *seed, group_count, capacity))
                .collect()
        } else {
            seeds.iter()
                .enumerate()
                .map(|(offset, seed)| self.run_trial(offset + 1, *seed, group_count, capacity))
                .collect()
        };

        let mut trials = vec![first.report.clone()];
        trials.extend(rest.iter().map(|o| o.report.clone()));
        // strictly better replaces, so the earliest trial wins a tie
        let best = rest
            .into_iter()
            .fold(first, |best, next| if next.score.score > best.score.score { next } else { best });

        let solution = Solution {
            grouping: best.grouping,
            score: best.score,
            unplaced: best.unplaced,
            best_trial: best.report.trial,
            trials,
        };
        info!(
            score = solution.score.score,
            gini = %solution.score.gini,
            trial = solution.best_trial,
            unplaced = solution.unplaced.len(),
            "best grouping found"
        );
        solution
    }

    fn run_trial(&self, trial: usize, seed: u64, group_count: usize, capacity: usize) -> TrialOutcome {
        debug!(trial, seed, "trial started");
        let mut rng = SmallRng::seed_from_u64(seed);
        let construction = construct(self.roster, &self.relations, group_count, capacity, &mut rng);
        let unplaced = construction.unplaced();
        let params = Params { max_iterations: self.config.iterations };
        let refinement = refine(construction.grouping, &self.relations, params, &mut rng);
        debug!(
            trial,
            seed,
            initial = refinement.initial_score.score,
            score = refinement.score.score,
            "trial finished"
        );
        TrialOutcome {
            report: TrialReport {
                trial,
                seed,
                initial_score: refinement.initial_score.score,
                final_score: refinement.score.score,
                n_accepted: refinement.n_accepted,
                n_unplaced: unplaced.len(),
            },
            grouping: refinement.grouping,
            score: refinement.score,
            unplaced,
        }
    }
}

/// One-call entry point: `trials` runs of construct-then-refine.
pub fn find_best_grouping(roster: &Roster, group_count: usize, capacity: usize, config: SolverConfig) -> Solution {
    Solver::new(roster, config).solve(group_count, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Member;
    use crate::score::evaluate;

    fn ring(n: usize) -> Roster {
        Roster::new(
            (0..n)
                .map(|i| Member::new(format!("m{i}"), [format!("m{}", (i + 1) % n)], [format!("m{}", (i + 5) % n)]))
                .collect(),
        ).unwrap()
    }

    #[test]
    fn best_of_all_trials_is_returned() {
        let roster = ring(12);
        let config = SolverConfig::new().with_trials(5).with_iterations(200).with_random_seed(17);
        let solution = find_best_grouping(&roster, 3, 4, config);
        assert_eq!(solution.trials.len(), 5);
        let max = solution.trials.iter().map(|t| t.final_score).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(solution.score.score, max);
        let first_max = solution.trials.iter().position(|t| t.final_score == max).unwrap();
        assert_eq!(solution.best_trial, first_max);
        assert_eq!(evaluate(&solution.grouping, &RelationCache::new(&roster)), solution.score);
    }

    #[test]
    fn trial_reports_never_regress() {
        let roster = ring(10);
        let config = SolverConfig::new().with_trials(4).with_iterations(100).with_random_seed(3);
        let solution = find_best_grouping(&roster, 2, 5, config);
        for report in &solution.trials {
            assert!(report.final_score >= report.initial_score);
            assert_eq!(report.n_unplaced, 0);
        }
    }

    #[test]
    fn zero_trials_still_runs_once() {
        let roster = ring(4);
        let config = SolverConfig::new().with_trials(0).with_iterations(10).with_random_seed(1);
        let solution = find_best_grouping(&roster, 2, 2, config);
        assert_eq!(solution.trials.len(), 1);
        assert_eq!(solution.best_trial, 0);
    }

    #[test]
    fn trials_are_reported_in_order_and_ties_keep_the_first() {
        let roster = ring(6);
        for parallel in [false, true] {
            let config = SolverConfig::new()
                .with_trials(4)
                .with_iterations(20)
                .with_random_seed(5)
                .with_parallel(parallel);
            let solution = find_best_grouping(&roster, 1, 6, config);
            let numbers: Vec<usize> = solution.trials.iter().map(|t| t.trial).collect();
            assert_eq!(numbers, vec![0, 1, 2, 3]);
            // one group seats everyone, so every trial scores the same
            assert!(solution.trials.iter().all(|t| t.final_score == solution.score.score));
            assert_eq!(solution.best_trial, 0);
        }
    }

    #[test]
    fn degenerate_layouts_do_not_fail() {
        let roster = ring(4);
        let config = SolverConfig::new().with_trials(2).with_iterations(10).with_random_seed(1);
        let none = find_best_grouping(&roster, 0, 3, config.clone());
        assert!(none.grouping.is_empty());
        assert_eq!(none.unplaced.len(), 4);

        let closed = find_best_grouping(&roster, 2, 0, config.clone());
        assert_eq!(closed.grouping.placed_count(), 0);
        assert_eq!(closed.unplaced_ids(&roster).len(), 4);

        let empty = Roster::default();
        let nobody = find_best_grouping(&empty, 2, 2, config);
        assert!(nobody.unplaced.is_empty());
        assert_eq!(nobody.groups(&empty), vec![Vec::<&str>::new(), Vec::new()]);
    }
}
