//! Demand resolution: from a duration partition to a costed presenter
//! assignment.
//!
//! Each partition is turned into a [`DemandMap`] (how many presenters of
//! each duration it needs). The [`DemandResolver`] then fills every
//! duration bucket independently with its cheapest presenters. This is a
//! per-bucket greedy choice; comparing whole assignments against each
//! other is left to [`crate::selection`].

mod resolver;
mod types;

pub use resolver::DemandResolver;
pub use types::{Candidate, DemandMap};
