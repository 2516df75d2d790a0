//! Global candidate selection.
//!
//! [`BestState`] folds the stream of feasible candidates into a running
//! best assignment plus any exact ties, following a fixed comparison rule:
//!
//! 1. A strictly cheaper candidate wins outright if it uses more
//!    presenters than the current best; with the same or fewer presenters
//!    it must also have a strictly lower average cost per presenter.
//! 2. An equally cheap candidate with the same presenter count is kept as
//!    a tie; with more presenters it replaces the current best but earlier
//!    ties are retained.
//! 3. Anything more expensive is rejected.
//!
//! The rule is order dependent. It is not a Pareto optimum over
//! cost and presenter count, and a cheaper candidate can lose to a more
//! expensive incumbent on average cost.
//!
//! [`shape`] turns the final state into the emitted groups.

mod accumulator;
mod shaper;

pub use accumulator::{BestState, Verdict};
pub use shaper::{shape, Selection};
