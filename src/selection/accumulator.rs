//! Running best state.

use std::cmp::Ordering;

use crate::demand::Candidate;

/// What [`BestState::consider`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate became the new primary assignment.
    Replaced,
    /// The candidate was recorded as a tie group.
    Tied,
    /// The state is unchanged.
    Rejected,
}

/// Accumulated search result.
///
/// `primary` is the current best assignment. `tie_groups` holds further
/// assignments that matched the minimum cost and the primary's presenter
/// count at the time they were seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestState<'a> {
    min_cost: Option<u64>,
    primary: Vec<&'a str>,
    tie_groups: Vec<Vec<&'a str>>,
}

impl<'a> BestState<'a> {
    /// Empty state: unbounded minimum, no primary, no ties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest accepted cost, `None` while nothing has been accepted.
    pub fn min_cost(&self) -> Option<u64> {
        self.min_cost
    }

    pub fn primary(&self) -> &[&'a str] {
        &self.primary
    }

    pub fn tie_groups(&self) -> &[Vec<&'a str>] {
        &self.tie_groups
    }

    /// `true` until a candidate has been accepted.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Folds one candidate into the state.
    ///
    /// # Examples
    ///
    /// ```
    /// use conference_slots::demand::Candidate;
    /// use conference_slots::selection::{BestState, Verdict};
    ///
    /// let mut state = BestState::new();
    /// assert_eq!(state.consider(Candidate::new(vec!["A", "B"], 10)), Verdict::Replaced);
    /// assert_eq!(state.consider(Candidate::new(vec!["C", "D"], 10)), Verdict::Tied);
    /// assert_eq!(state.consider(Candidate::new(vec!["E"], 12)), Verdict::Rejected);
    /// assert_eq!(state.min_cost(), Some(10));
    /// ```
    pub fn consider(&mut self, candidate: Candidate<'a>) -> Verdict {
        let pcost = candidate.cost;
        let pcount = candidate.len();
        let scount = self.primary.len();

        let ordering = match self.min_cost {
            None => Ordering::Less,
            Some(min) => pcost.cmp(&min),
        };

        match ordering {
            Ordering::Less if pcount > scount => {
                self.install(candidate);
                self.tie_groups.clear();
                Verdict::Replaced
            }
            Ordering::Less => match self.min_cost {
                Some(min) if pcount > 0 && scount > 0 => {
                    if average_below(pcost, pcount, min, scount) {
                        self.install(candidate);
                        self.tie_groups.clear();
                        Verdict::Replaced
                    } else {
                        Verdict::Rejected
                    }
                }
                // Zero-count guard: nothing selected yet.
                _ if scount == 0 && pcount > 0 => {
                    self.install(candidate);
                    Verdict::Replaced
                }
                _ => Verdict::Rejected,
            },
            Ordering::Equal if pcount == scount => {
                self.tie_groups.push(candidate.names);
                Verdict::Tied
            }
            Ordering::Equal if pcount > scount => {
                // Ties recorded against the smaller primary are kept.
                self.primary = candidate.names;
                Verdict::Replaced
            }
            Ordering::Equal | Ordering::Greater => Verdict::Rejected,
        }
    }

    fn install(&mut self, candidate: Candidate<'a>) {
        self.min_cost = Some(candidate.cost);
        self.primary = candidate.names;
    }

    pub(crate) fn into_parts(self) -> (Option<u64>, Vec<&'a str>, Vec<Vec<&'a str>>) {
        (self.min_cost, self.primary, self.tie_groups)
    }
}

/// `pcost / pcount < min / scount`, compared exactly.
fn average_below(pcost: u64, pcount: usize, min: u64, scount: usize) -> bool {
    u128::from(pcost) * (scount as u128) < u128::from(min) * (pcount as u128)
}
