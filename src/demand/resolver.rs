//! Cheapest-per-duration presenter matching.

use std::collections::BTreeMap;

use super::types::{Candidate, DemandMap};
use crate::roster::{Presenter, Roster};

/// Matches demand maps against a roster.
///
/// Built once per run: presenters are bucketed by exact duration and each
/// bucket is stably sorted by cost, so equal-cost presenters keep their
/// roster order. Every resolution then reads the cheapest prefix of each
/// bucket.
///
/// # Examples
///
/// ```
/// use conference_slots::demand::DemandResolver;
/// use conference_slots::roster::{Presenter, Roster};
///
/// let roster = Roster::new(vec![
///     Presenter::new("A", 1, 10),
///     Presenter::new("B", 1, 5),
///     Presenter::new("C", 2, 8),
/// ])
/// .unwrap();
/// let resolver = DemandResolver::new(&roster);
///
/// let candidate = resolver.resolve(&[1, 2]).unwrap();
/// assert_eq!(candidate.names, vec!["B", "C"]);
/// assert_eq!(candidate.cost, 13);
///
/// assert!(resolver.resolve(&[1, 1, 1]).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DemandResolver<'a> {
    by_duration: BTreeMap<u32, Vec<&'a Presenter>>,
}

impl<'a> DemandResolver<'a> {
    /// Indexes `roster` by duration.
    pub fn new(roster: &'a Roster) -> Self {
        let mut by_duration: BTreeMap<u32, Vec<&'a Presenter>> = BTreeMap::new();
        for p in roster.presenters() {
            by_duration.entry(p.duration).or_default().push(p);
        }
        for bucket in by_duration.values_mut() {
            // Stable: ties keep roster order.
            bucket.sort_by_key(|p| p.cost);
        }
        Self { by_duration }
    }

    /// Number of presenters whose duration is exactly `duration`.
    pub fn available(&self, duration: u32) -> usize {
        self.by_duration.get(&duration).map_or(0, Vec::len)
    }

    /// Whether every duration in `demand` has enough presenters.
    pub fn is_feasible(&self, demand: &DemandMap) -> bool {
        demand
            .iter()
            .all(|(duration, count)| self.available(duration) >= count)
    }

    /// Resolves a partition, or `None` if the roster cannot staff it.
    pub fn resolve(&self, partition: &[u32]) -> Option<Candidate<'a>> {
        self.resolve_demand(&DemandMap::from_partition(partition))
    }

    /// Resolves a demand map, or `None` if it is infeasible.
    ///
    /// Each duration bucket contributes its `count` cheapest presenters;
    /// names are concatenated in ascending duration order.
    pub fn resolve_demand(&self, demand: &DemandMap) -> Option<Candidate<'a>> {
        if !self.is_feasible(demand) {
            return None;
        }

        let mut names = Vec::with_capacity(demand.slot_count());
        let mut cost = 0u64;
        for (duration, count) in demand.iter() {
            let bucket = self.by_duration.get(&duration)?;
            for p in &bucket[..count] {
                names.push(p.name.as_str());
                // Bounded by the roster's total cost, which fits in a u64.
                cost += p.cost;
            }
        }

        Some(Candidate::new(names, cost))
    }
}
