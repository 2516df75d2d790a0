//! Final group layout.

use super::accumulator::BestState;

/// Winning presenter groups and their shared cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Tie groups in the order they were found, then the primary group.
    pub groups: Vec<Vec<String>>,
    /// Minimum cost at the end of the search.
    pub cost: u64,
}

/// Lays out the final state: tie groups first, primary last.
///
/// Returns `None` if no candidate was ever accepted.
///
/// # Examples
///
/// ```
/// use conference_slots::demand::Candidate;
/// use conference_slots::selection::{shape, BestState};
///
/// let mut state = BestState::new();
/// state.consider(Candidate::new(vec!["A", "B"], 10));
/// state.consider(Candidate::new(vec!["C", "D"], 10));
///
/// let selection = shape(state).unwrap();
/// assert_eq!(selection.groups, vec![vec!["C", "D"], vec!["A", "B"]]);
/// assert_eq!(selection.cost, 10);
/// ```
pub fn shape(state: BestState<'_>) -> Option<Selection> {
    let (min_cost, primary, tie_groups) = state.into_parts();
    let cost = min_cost?;
    if primary.is_empty() {
        return None;
    }

    let groups: Vec<Vec<String>> = tie_groups
        .into_iter()
        .chain(std::iter::once(primary))
        .map(|group| group.into_iter().map(str::to_owned).collect())
        .collect();

    Some(Selection { groups, cost })
}
