//! Search orchestration.
//!
//! [`Optimizer::run`] walks every duration partition of the configured
//! total, resolves each against the roster, folds the feasible candidates
//! into a [`crate::selection::BestState`] and shapes the final state into
//! a [`Schedule`].

mod config;
mod runner;

pub use config::OptimizerConfig;
pub use runner::{Optimizer, Schedule, SearchStats};
