//! Conference slot optimization.
//!
//! Staffs a conference of fixed total length from a roster of presenters,
//! each of whom fills a slot of one exact duration for a fee. The search
//! is exhaustive over slot layouts and greedy within each layout:
//!
//! - **Partitions** ([`partition`]): every way of splitting the total
//!   duration into slot lengths, most slots first.
//! - **Demand** ([`demand`]): for one layout, the cheapest presenters of
//!   each required duration.
//! - **Selection** ([`selection`]): an order-dependent comparison that
//!   keeps the running best assignment and any exact cost/count ties.
//! - **Optimizer** ([`optimizer`]): drives the three stages and returns a
//!   [`optimizer::Schedule`].
//! - **Roster** ([`roster`]): validated presenter pools, loaded from CSV
//!   (`csv` feature) or generated for testing.
//!
//! # Example
//!
//! ```
//! use conference_slots::optimizer::{Optimizer, OptimizerConfig};
//! use conference_slots::roster::{Presenter, Roster};
//!
//! let roster = Roster::new(vec![
//!     Presenter::new("A", 1, 3),
//!     Presenter::new("B", 3, 7),
//!     Presenter::new("C", 2, 5),
//!     Presenter::new("D", 2, 5),
//! ])
//! .unwrap();
//!
//! let schedule = Optimizer::run(&roster, &OptimizerConfig::new(4)).unwrap();
//! assert_eq!(schedule.groups, vec![vec!["C", "D"], vec!["A", "B"]]);
//! assert_eq!(schedule.cost, 10);
//! ```
//!
//! # Features
//!
//! - `csv` (default): [`roster::Roster::from_path`] and
//!   [`roster::Roster::from_reader`]
//! - `parallel`: resolve partitions on the rayon thread pool
//! - `serde`: `Serialize`/`Deserialize` on public data types
//! - `cli`: the `conference` binary

pub mod demand;
pub mod error;
pub mod optimizer;
pub mod partition;
pub mod roster;
pub mod selection;

pub use error::{ConferenceError, ConferenceResult, LoadError};
