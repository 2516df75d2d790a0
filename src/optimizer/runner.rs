//! Slot search execution.
//!
//! # Algorithm
//!
//! 1. Index the roster by duration (cheapest first within each duration)
//! 2. For each slot count from the total duration down to 1:
//!    a. Enumerate the partitions of that length in lexicographic order
//!    b. Resolve each partition to a candidate, skipping infeasible ones
//!    c. Fold the candidates, in order, into the running best state
//! 3. Shape the final state, or fail if nothing was feasible

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::config::OptimizerConfig;
use crate::demand::{Candidate, DemandResolver};
use crate::error::{ConferenceError, ConferenceResult};
use crate::partition::{slot_counts, PartitionsOfLength};
use crate::roster::Roster;
use crate::selection::{shape, BestState, Verdict};

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Partitions enumerated across all slot counts.
    pub partitions_examined: usize,
    /// Partitions the roster could staff.
    pub feasible_candidates: usize,
    /// Candidates that became the primary assignment.
    pub replacements: usize,
    /// Candidates recorded as ties.
    pub ties: usize,
}

/// Result of a slot search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Winning presenter groups: ties in discovery order, primary last.
    pub groups: Vec<Vec<String>>,
    /// Cost shared by the winning groups.
    pub cost: u64,
    /// Search counters.
    pub stats: SearchStats,
}

impl Schedule {
    /// The primary (last) group.
    pub fn primary(&self) -> &[String] {
        match self.groups.last() {
            Some(group) => group,
            None => &[],
        }
    }

    /// Whether more than one group won.
    pub fn has_ties(&self) -> bool {
        self.groups.len() > 1
    }
}

/// Renders groups as `[a, b],[c, d]`.
impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "[{}]", group.join(", "))?;
        }
        Ok(())
    }
}

/// Fold state threaded through the slot counts.
#[derive(Default)]
struct Search<'a> {
    best: BestState<'a>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn absorb(&mut self, candidate: Candidate<'a>) {
        self.stats.feasible_candidates += 1;
        let cost = candidate.cost;
        let presenters = candidate.len();
        match self.best.consider(candidate) {
            Verdict::Replaced => {
                self.stats.replacements += 1;
                trace!(cost, presenters, "new best assignment");
            }
            Verdict::Tied => {
                self.stats.ties += 1;
                trace!(cost, presenters, "tied assignment");
            }
            Verdict::Rejected => {}
        }
    }

    fn slot_count(
        mut self,
        resolver: &DemandResolver<'a>,
        total: u32,
        slots: usize,
        parallel: bool,
    ) -> Self {
        let examined = self.stats.partitions_examined;
        let feasible = self.stats.feasible_candidates;

        #[cfg(feature = "parallel")]
        if parallel {
            let partitions: Vec<_> = PartitionsOfLength::new(total, slots).collect();
            self.stats.partitions_examined += partitions.len();
            // Order-preserving collect keeps the fold sequential.
            let candidates: Vec<_> = partitions
                .par_iter()
                .filter_map(|p| resolver.resolve(p))
                .collect();
            for candidate in candidates {
                self.absorb(candidate);
            }
            return self.log_slot_count(slots, examined, feasible);
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for partition in PartitionsOfLength::new(total, slots) {
            self.stats.partitions_examined += 1;
            if let Some(candidate) = resolver.resolve(&partition) {
                self.absorb(candidate);
            }
        }
        self.log_slot_count(slots, examined, feasible)
    }

    fn log_slot_count(self, slots: usize, examined: usize, feasible: usize) -> Self {
        debug!(
            slots,
            partitions = self.stats.partitions_examined - examined,
            feasible = self.stats.feasible_candidates - feasible,
            min_cost = ?self.best.min_cost(),
            "slot count searched"
        );
        self
    }
}

/// Slot search runner.
pub struct Optimizer;

impl Optimizer {
    /// Searches every duration partition for the best staffing.
    ///
    /// # Errors
    ///
    /// - [`ConferenceError::InvalidConfig`] if `config` fails validation
    /// - [`ConferenceError::InsufficientPresenters`] if no partition can be
    ///   staffed from `roster`
    ///
    /// # Examples
    ///
    /// ```
    /// use conference_slots::optimizer::{Optimizer, OptimizerConfig};
    /// use conference_slots::roster::{Presenter, Roster};
    ///
    /// let roster = Roster::new(vec![
    ///     Presenter::new("A", 1, 10),
    ///     Presenter::new("B", 1, 5),
    ///     Presenter::new("C", 2, 8),
    ///     Presenter::new("D", 3, 50),
    /// ])
    /// .unwrap();
    ///
    /// let schedule = Optimizer::run(&roster, &OptimizerConfig::new(3)).unwrap();
    /// assert_eq!(schedule.groups, vec![vec!["B", "C"]]);
    /// assert_eq!(schedule.cost, 13);
    /// ```
    pub fn run(roster: &Roster, config: &OptimizerConfig) -> ConferenceResult<Schedule> {
        config.validate().map_err(ConferenceError::InvalidConfig)?;

        let total = config.total_duration;
        info!(
            total_duration = total,
            presenters = roster.len(),
            "starting slot search"
        );
        debug!(
            slot_count = config.slot_count,
            "configured slot count does not bound the search"
        );

        let resolver = DemandResolver::new(roster);
        let search = slot_counts(total).fold(Search::default(), |search, slots| {
            search.slot_count(&resolver, total, slots, config.parallel)
        });

        let stats = search.stats;
        let selection = shape(search.best).ok_or(ConferenceError::InsufficientPresenters {
            total_duration: total,
        })?;

        info!(
            cost = selection.cost,
            groups = selection.groups.len(),
            partitions = stats.partitions_examined,
            feasible = stats.feasible_candidates,
            "slot search finished"
        );

        Ok(Schedule {
            groups: selection.groups,
            cost: selection.cost,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{synthetic_roster, Presenter};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(entries: &[(&str, u32, u64)]) -> Roster {
        Roster::new(
            entries
                .iter()
                .map(|&(n, d, c)| Presenter::new(n, d, c))
                .collect(),
        )
        .unwrap()
    }

    fn config(total: u32) -> OptimizerConfig {
        OptimizerConfig::new(total).with_parallel(false)
    }

    #[test]
    fn test_basic_selection() {
        let r = roster(&[("A", 1, 10), ("B", 1, 5), ("C", 2, 8), ("D", 3, 50)]);
        let schedule = Optimizer::run(&r, &config(3)).unwrap();

        assert_eq!(schedule.groups, vec![vec!["B", "C"]]);
        assert_eq!(schedule.cost, 13);
        assert!(!schedule.has_ties());
        assert_eq!(schedule.primary(), &["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_tie_groups_precede_primary() {
        let r = roster(&[("A", 1, 3), ("B", 3, 7), ("C", 2, 5), ("D", 2, 5)]);
        let schedule = Optimizer::run(&r, &config(4)).unwrap();

        assert_eq!(schedule.groups, vec![vec!["C", "D"], vec!["A", "B"]]);
        assert_eq!(schedule.cost, 10);
        assert!(schedule.has_ties());
        assert_eq!(schedule.stats.ties, 1);
    }

    #[test]
    fn test_insufficient_presenters() {
        let r = roster(&[("A", 1, 10)]);
        let err = Optimizer::run(&r, &config(2)).unwrap_err();

        assert!(matches!(
            err,
            ConferenceError::InsufficientPresenters { total_duration: 2 }
        ));
    }

    #[test]
    fn test_invalid_config() {
        let r = roster(&[("A", 1, 10)]);
        let err = Optimizer::run(&r, &config(0)).unwrap_err();
        assert!(matches!(err, ConferenceError::InvalidConfig(_)));
    }

    #[test]
    fn test_more_presenters_preferred_at_higher_average() {
        // Three one-hour talks at 30 beat a cheaper two-talk plan at 25,
        // because 12.5 per presenter is worse than 10.
        let r = roster(&[("A", 1, 10), ("B", 1, 10), ("C", 1, 10), ("D", 2, 15)]);
        let schedule = Optimizer::run(&r, &config(3)).unwrap();

        assert_eq!(schedule.groups, vec![vec!["A", "B", "C"]]);
        assert_eq!(schedule.cost, 30);
    }

    #[test]
    fn test_fewer_presenters_win_on_lower_average() {
        let r = roster(&[("A", 1, 10), ("B", 1, 10), ("C", 1, 10), ("D", 2, 8)]);
        let schedule = Optimizer::run(&r, &config(3)).unwrap();

        assert_eq!(schedule.groups, vec![vec!["A", "D"]]);
        assert_eq!(schedule.cost, 18);
    }

    #[test]
    fn test_slot_count_does_not_bound_search() {
        let r = roster(&[("A", 1, 4), ("B", 2, 4), ("C", 3, 100)]);
        let narrow = OptimizerConfig::new(3).with_slot_count(1).with_parallel(false);
        let wide = OptimizerConfig::new(3).with_slot_count(3).with_parallel(false);

        let a = Optimizer::run(&r, &narrow).unwrap();
        let b = Optimizer::run(&r, &wide).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.groups, vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_stats_count_every_partition() {
        let r = roster(&[("A", 1, 3), ("B", 3, 7), ("C", 2, 5), ("D", 2, 5)]);
        let schedule = Optimizer::run(&r, &config(4)).unwrap();

        // p(4) = 5; feasible: (1,3), (2,2)
        assert_eq!(schedule.stats.partitions_examined, 5);
        assert_eq!(schedule.stats.feasible_candidates, 2);
        assert_eq!(schedule.stats.replacements, 1);
    }

    #[test]
    fn test_near_max_costs() {
        let half = u64::MAX / 2;
        let r = roster(&[("A", 1, half), ("B", 1, half), ("C", 2, 1)]);
        let schedule = Optimizer::run(&r, &config(2)).unwrap();

        // (1,1) costs u64::MAX - 1; the single two-hour talk wins on average.
        assert_eq!(schedule.groups, vec![vec!["C"]]);
        assert_eq!(schedule.cost, 1);
    }

    #[test]
    fn test_roster_cost_overflow_is_a_load_error() {
        let half = u64::MAX / 2 + 1;
        let err = Roster::new(vec![
            Presenter::new("A", 1, half),
            Presenter::new("B", 1, half),
            Presenter::new("C", 2, 7),
        ])
        .unwrap_err();
        let err: ConferenceError = err.into();
        assert!(matches!(
            err,
            ConferenceError::Load(crate::error::LoadError::CostOverflow { .. })
        ));
    }

    #[test]
    fn test_single_slot_fallback() {
        let r = roster(&[("keynote", 8, 500), ("short", 1, 1)]);
        let schedule = Optimizer::run(&r, &config(8)).unwrap();

        assert_eq!(schedule.groups, vec![vec!["keynote"]]);
        assert_eq!(schedule.cost, 500);
    }

    #[test]
    fn test_display() {
        let schedule = Schedule {
            groups: vec![
                vec!["C".into(), "D".into()],
                vec!["A".into(), "B".into()],
            ],
            cost: 10,
            stats: SearchStats::default(),
        };
        assert_eq!(schedule.to_string(), "[C, D],[A, B]");
    }

    #[test]
    fn test_synthetic_roster_group_costs() {
        let mut rng = StdRng::seed_from_u64(2014);
        let r = synthetic_roster(29, 7, 199, &mut rng).unwrap();
        let schedule = Optimizer::run(&r, &config(8)).unwrap();

        for group in &schedule.groups {
            assert_eq!(r.cost_of(group), schedule.cost, "group {group:?}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_group_costs_match(seed in any::<u64>(), size in 1usize..20, total in 1u32..=7) {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = synthetic_roster(size, 4, 60, &mut rng).unwrap();

            match Optimizer::run(&r, &config(total)) {
                Ok(schedule) => {
                    prop_assert_eq!(r.cost_of(schedule.primary()), schedule.cost);
                    for group in &schedule.groups {
                        prop_assert_eq!(r.cost_of(group), schedule.cost);
                        let hours: u32 = group
                            .iter()
                            .filter_map(|n| r.get(n))
                            .map(|p| p.duration)
                            .sum();
                        prop_assert_eq!(hours, total);
                    }
                }
                Err(err) => {
                    let is_insufficient =
                        matches!(err, ConferenceError::InsufficientPresenters { .. });
                    prop_assert!(is_insufficient);
                    prop_assert!(
                        crate::partition::generate(total)
                            .all(|p| DemandResolver::new(&r).resolve(&p).is_none())
                    );
                }
            }
        }

        #[test]
        fn prop_deterministic_across_modes(seed in any::<u64>(), total in 1u32..=8) {
            let mut rng = StdRng::seed_from_u64(seed);
            let r = synthetic_roster(16, 5, 40, &mut rng).unwrap();

            let sequential = Optimizer::run(&r, &config(total));
            let again = Optimizer::run(&r, &config(total));
            let parallel = Optimizer::run(&r, &config(total).with_parallel(true));

            match (sequential, again, parallel) {
                (Ok(a), Ok(b), Ok(c)) => {
                    prop_assert_eq!(&a, &b);
                    prop_assert_eq!(&a, &c);
                }
                (Err(_), Err(_), Err(_)) => {}
                _ => prop_assert!(false, "modes disagree on feasibility"),
            }
        }
    }
}
