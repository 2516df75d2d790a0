//! Error types for roster loading and slot optimization.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable presenter roster.
///
/// A load failure never degrades into an empty roster: the optimizer is
/// only ever handed a validated, non-empty pool.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open roster file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "csv")]
    #[error("malformed roster record: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster contains no presenters")]
    Empty,

    #[error("presenter {name} has a zero duration")]
    ZeroDuration { name: String },

    #[error("presenter name {name} appears more than once")]
    DuplicateName { name: String },

    /// The roster's combined cost does not fit in a `u64`.
    #[error("total roster cost overflows at presenter {name}")]
    CostOverflow { name: String },
}

/// Errors surfaced by an optimization run.
#[derive(Error, Debug)]
pub enum ConferenceError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(String),

    /// No duration partition of the total could be staffed from the roster.
    #[error("not enough presenters to fill {total_duration} hours")]
    InsufficientPresenters { total_duration: u32 },
}

pub type ConferenceResult<T> = Result<T, ConferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_message() {
        let err = ConferenceError::InsufficientPresenters { total_duration: 8 };
        assert_eq!(err.to_string(), "not enough presenters to fill 8 hours");
    }

    #[test]
    fn test_load_error_is_transparent() {
        let err: ConferenceError = LoadError::DuplicateName { name: "p1".into() }.into();
        assert_eq!(err.to_string(), "presenter name p1 appears more than once");
        assert!(matches!(err, ConferenceError::Load(LoadError::DuplicateName { .. })));
    }
}
