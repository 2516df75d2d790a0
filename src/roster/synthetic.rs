//! Seeded random rosters for benchmarks and randomized tests.

use rand::Rng;

use super::types::{Presenter, Roster};
use crate::error::LoadError;

/// Generates `size` presenters named `p1..pN`.
///
/// Durations are drawn uniformly from `1..=max_duration` and costs from
/// `1..=max_cost`. Both bounds are clamped to at least 1.
///
/// # Errors
///
/// Returns [`LoadError::Empty`] when `size` is zero.
///
/// # Examples
///
/// ```
/// use conference_slots::roster::synthetic_roster;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let roster = synthetic_roster(29, 7, 199, &mut rng).unwrap();
/// assert_eq!(roster.len(), 29);
/// assert!(roster.presenters().iter().all(|p| (1..=7).contains(&p.duration)));
/// ```
pub fn synthetic_roster<R: Rng>(
    size: usize,
    max_duration: u32,
    max_cost: u64,
    rng: &mut R,
) -> Result<Roster, LoadError> {
    let max_duration = max_duration.max(1);
    let max_cost = max_cost.max(1);

    let presenters = (1..=size)
        .map(|i| {
            Presenter::new(
                format!("p{i}"),
                rng.random_range(1..=max_duration),
                rng.random_range(1..=max_cost),
            )
        })
        .collect();

    Roster::new(presenters)
}
