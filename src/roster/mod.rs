//! Presenter rosters.
//!
//! A [`Roster`] is the validated, read-only pool of presenters that an
//! optimization run draws from. Rosters come from a CSV source (the `csv`
//! feature), from an explicit record list, or from [`synthetic_roster`]
//! for benchmarks and randomized tests.

#[cfg(feature = "csv")]
mod loader;
mod synthetic;
mod types;

pub use synthetic::synthetic_roster;
pub use types::{Presenter, Roster};
