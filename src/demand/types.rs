//! Demand maps and candidate assignments.

use std::collections::BTreeMap;

/// Required presenter count per slot duration.
///
/// Iterates in ascending duration order, which fixes the order in which a
/// [`Candidate`] lists its presenters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemandMap {
    counts: BTreeMap<u32, usize>,
}

impl DemandMap {
    /// Counts repeated durations in a partition.
    ///
    /// # Examples
    ///
    /// ```
    /// use conference_slots::demand::DemandMap;
    ///
    /// let demand = DemandMap::from_partition(&[1, 1, 2, 4]);
    /// assert_eq!(demand.get(1), 2);
    /// assert_eq!(demand.get(3), 0);
    /// assert_eq!(demand.slot_count(), 4);
    /// ```
    pub fn from_partition(partition: &[u32]) -> Self {
        let mut counts = BTreeMap::new();
        for &d in partition {
            *counts.entry(d).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count required for `duration` (0 if absent).
    pub fn get(&self, duration: u32) -> usize {
        self.counts.get(&duration).copied().unwrap_or(0)
    }

    /// `(duration, count)` pairs, ascending by duration.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }

    /// Total number of slots demanded.
    pub fn slot_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One partition's matched and costed presenter assignment.
///
/// Names borrow from the roster the candidate was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Presenter names, grouped by ascending duration.
    pub names: Vec<&'a str>,
    /// Sum of the presenters' costs.
    pub cost: u64,
}

impl<'a> Candidate<'a> {
    pub fn new(names: Vec<&'a str>, cost: u64) -> Self {
        Self { names, cost }
    }

    /// Number of presenters in the assignment.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_counts() {
        let demand = DemandMap::from_partition(&[2, 2, 2, 3]);
        assert_eq!(demand.iter().collect::<Vec<_>>(), vec![(2, 3), (3, 1)]);
        assert_eq!(demand.slot_count(), 4);
    }

    #[test]
    fn test_demand_order_is_ascending() {
        // Order of the input does not leak into iteration order.
        let demand = DemandMap::from_partition(&[5, 1, 3, 1]);
        let durations: Vec<u32> = demand.iter().map(|(d, _)| d).collect();
        assert_eq!(durations, vec![1, 3, 5]);
    }

    #[test]
    fn test_demand_empty() {
        let demand = DemandMap::from_partition(&[]);
        assert!(demand.is_empty());
        assert_eq!(demand.slot_count(), 0);
    }

    #[test]
    fn test_candidate_len() {
        let c = Candidate::new(vec!["a", "b"], 12);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert!(Candidate::new(vec![], 0).is_empty());
    }
}
