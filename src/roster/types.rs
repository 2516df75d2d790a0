//! Presenter records and the validated roster.

use std::collections::HashSet;

use crate::error::LoadError;

/// A presenter available for one slot.
///
/// `duration` is the exact slot length the presenter fills, `cost` the fee
/// charged for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Presenter {
    /// Unique presenter name.
    pub name: String,
    /// Slot length in whole hours (positive).
    pub duration: u32,
    /// Fee for the slot.
    pub cost: u64,
}

impl Presenter {
    /// Creates a presenter record.
    pub fn new(name: impl Into<String>, duration: u32, cost: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            cost,
        }
    }
}

/// A validated, non-empty pool of presenters in input order.
///
/// Input order matters: when two presenters of the same duration cost the
/// same, the one listed first is preferred.
///
/// # Examples
///
/// ```
/// use conference_slots::roster::{Presenter, Roster};
///
/// let roster = Roster::new(vec![
///     Presenter::new("ada", 1, 10),
///     Presenter::new("bob", 2, 15),
/// ])
/// .unwrap();
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.get("bob").map(|p| p.cost), Some(15));
/// ```
#[derive(Debug, Clone)]
pub struct Roster {
    presenters: Vec<Presenter>,
}

impl Roster {
    /// Validates and wraps a list of presenters.
    ///
    /// # Errors
    ///
    /// Fails when the list is empty, a duration is zero, a name repeats, or
    /// the costs of all presenters together exceed `u64::MAX`. The last
    /// check bounds every assignment cost drawn from the roster.
    pub fn new(presenters: Vec<Presenter>) -> Result<Self, LoadError> {
        if presenters.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = HashSet::with_capacity(presenters.len());
        let mut total_cost = 0u64;
        for p in &presenters {
            total_cost = total_cost
                .checked_add(p.cost)
                .ok_or_else(|| LoadError::CostOverflow {
                    name: p.name.clone(),
                })?;
            if p.duration == 0 {
                return Err(LoadError::ZeroDuration {
                    name: p.name.clone(),
                });
            }
            if !seen.insert(p.name.as_str()) {
                return Err(LoadError::DuplicateName {
                    name: p.name.clone(),
                });
            }
        }

        Ok(Self { presenters })
    }

    /// Presenters in input order.
    pub fn presenters(&self) -> &[Presenter] {
        &self.presenters
    }

    pub fn len(&self) -> usize {
        self.presenters.len()
    }

    /// Always `false` for a constructed roster.
    pub fn is_empty(&self) -> bool {
        self.presenters.is_empty()
    }

    /// Looks up a presenter by name.
    pub fn get(&self, name: &str) -> Option<&Presenter> {
        self.presenters.iter().find(|p| p.name == name)
    }

    /// Sums the costs of the named presenters.
    ///
    /// Unknown names contribute nothing. Useful for checking a reported
    /// schedule cost against the roster it was computed from. Repeated
    /// names count each time; the sum saturates at `u64::MAX`.
    pub fn cost_of<S: AsRef<str>>(&self, names: &[S]) -> u64 {
        names
            .iter()
            .filter_map(|n| self.get(n.as_ref()))
            .fold(0u64, |acc, p| acc.saturating_add(p.cost))
    }
}
